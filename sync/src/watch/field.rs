use std::{fmt, ops::Deref};

use crate::FieldWatcher;

/// An observable host field
///
/// Reports to its watchers whenever its value actually changes. Writing an
/// equal value is not a change, which is what keeps a read from the store
/// from echoing straight back as a write.
pub struct Field<T> {
    value: T,
    watchers: Vec<FieldWatcher>,
}

impl<T> Field<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            watchers: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn watch(&mut self, watcher: FieldWatcher) {
        self.watchers.push(watcher);
    }

    pub fn unwatch(&mut self) {
        self.watchers.clear();
    }

    pub fn is_watched(&self) -> bool {
        self.watchers.iter().any(|watcher| watcher.is_open())
    }

    /// Number of watchers whose channel is still open
    pub fn watcher_count(&self) -> usize {
        self.watchers.iter().filter(|watcher| watcher.is_open()).count()
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    fn notify(&self) {
        for watcher in &self.watchers {
            watcher.notify();
        }
    }
}

impl<T: PartialEq> Field<T> {
    /// Stores `value`, returns whether it differed from the previous value
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.notify();
        true
    }
}

impl<T: PartialEq + Clone> Field<T> {
    /// Mutates the value in place, returns whether it changed
    pub fn modify<F: FnOnce(&mut T)>(&mut self, f: F) -> bool {
        let previous = self.value.clone();
        f(&mut self.value);
        if self.value == previous {
            return false;
        }
        self.notify();
        true
    }
}

impl<T> Deref for Field<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: Default> Default for Field<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("value", &self.value)
            .field("watchers", &self.watchers.len())
            .finish()
    }
}
