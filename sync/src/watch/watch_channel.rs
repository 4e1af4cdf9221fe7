use std::{cell::RefCell, fmt, rc::Rc};

use log::warn;

struct ChangeState {
    names: Vec<String>,
    changed: Vec<bool>,
    open: bool,
}

/// Collects change notifications from the watched fields of one host
///
/// Holds one flag per declared param. Watchers set their flag, the owning
/// engine drains the flags once per turn. A closed channel ignores
/// notifications. The state is only ever borrowed through `try_borrow*`: a
/// channel touched while already borrowed reports nothing and stays as it is.
#[derive(Clone)]
pub struct WatchChannel {
    state: Rc<RefCell<ChangeState>>,
}

impl WatchChannel {
    pub fn new(names: Vec<String>) -> Self {
        let changed = vec![false; names.len()];
        Self {
            state: Rc::new(RefCell::new(ChangeState {
                names,
                changed,
                open: true,
            })),
        }
    }

    /// Watcher for the param at `index`, or `None` if out of range
    pub fn watcher(&self, index: usize) -> Option<FieldWatcher> {
        let len = self.state.try_borrow().ok()?.names.len();
        if index >= len {
            return None;
        }
        Some(FieldWatcher {
            channel: self.clone(),
            index,
        })
    }

    /// Names of the params changed since the last drain, in declaration order
    pub fn drain(&self) -> Vec<String> {
        let Ok(mut state) = self.state.try_borrow_mut() else {
            warn!("WatchChannel drained while borrowed, nothing reported");
            return Vec::new();
        };
        let ChangeState { names, changed, .. } = &mut *state;
        names
            .iter()
            .zip(changed.iter_mut())
            .filter_map(|(name, flag)| std::mem::take(flag).then(|| name.clone()))
            .collect()
    }

    pub fn has_changes(&self) -> bool {
        self.state
            .try_borrow()
            .map(|state| state.changed.iter().any(|flag| *flag))
            .unwrap_or(false)
    }

    pub fn close(&self) {
        let Ok(mut state) = self.state.try_borrow_mut() else {
            warn!("WatchChannel closed while borrowed, left open");
            return;
        };
        state.open = false;
        state.changed.iter_mut().for_each(|flag| *flag = false);
    }

    pub fn is_open(&self) -> bool {
        self.state.try_borrow().map(|state| state.open).unwrap_or(false)
    }

    fn mark(&self, index: usize) {
        let Ok(mut state) = self.state.try_borrow_mut() else {
            warn!("WatchChannel notified while being drained, change dropped");
            return;
        };
        if !state.open {
            return;
        }
        if let Some(flag) = state.changed.get_mut(index) {
            *flag = true;
        }
    }

    fn name(&self, index: usize) -> Option<String> {
        self.state.try_borrow().ok()?.names.get(index).cloned()
    }
}

impl fmt::Debug for WatchChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ok(state) = self.state.try_borrow() else {
            return f.debug_struct("WatchChannel").finish_non_exhaustive();
        };
        f.debug_struct("WatchChannel")
            .field("names", &state.names)
            .field("changed", &state.changed)
            .field("open", &state.open)
            .finish()
    }
}

/// Handle a watched field uses to report that its value changed
#[derive(Clone)]
pub struct FieldWatcher {
    channel: WatchChannel,
    index: usize,
}

impl FieldWatcher {
    pub fn notify(&self) {
        self.channel.mark(self.index);
    }

    /// Name of the param this watcher reports for
    pub fn param(&self) -> Option<String> {
        self.channel.name(self.index)
    }

    pub fn is_open(&self) -> bool {
        self.channel.is_open()
    }
}

impl fmt::Debug for FieldWatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldWatcher")
            .field("index", &self.index)
            .finish()
    }
}
