use log::{trace, warn};

use crate::{StoreHandle, SyncConfig, SyncError, SyncHost, WatchChannel};

/// Subscribes a host to its fields' change notifications and to changes of
/// the store, which are detected by revision
pub(crate) struct WatchRegistrar {
    channel: Option<WatchChannel>,
    seen_revision: u64,
}

impl WatchRegistrar {
    pub(crate) fn new() -> Self {
        Self {
            channel: None,
            seen_revision: 0,
        }
    }

    pub(crate) fn activate<H: SyncHost>(
        &mut self,
        config: &SyncConfig<H>,
        host: &mut H,
        store: &StoreHandle,
    ) -> Result<(), SyncError> {
        // Nothing is attached to the host until the store has answered.
        let revision = store.revision()?;
        let channel = WatchChannel::new(config.param_names().map(str::to_string).collect());

        for (index, name) in config.param_names().enumerate() {
            let Some(watcher) = channel.watcher(index) else {
                continue;
            };
            if host.watch(name, watcher) {
                trace!("WatchRegistrar watching `{}`", name);
            } else {
                warn!("Param `{}` has no observable field, its changes will not be written", name);
            }
        }

        self.seen_revision = revision;
        self.channel = Some(channel);
        Ok(())
    }

    pub(crate) fn is_active(&self) -> bool {
        self.channel.is_some()
    }

    /// Whether the store changed since the last call, and records the new revision
    pub(crate) fn store_changed(&mut self, store: &StoreHandle) -> Result<bool, SyncError> {
        if !self.is_active() {
            return Ok(false);
        }
        let revision = store.revision()?;
        if revision == self.seen_revision {
            return Ok(false);
        }
        trace!(
            "WatchRegistrar store revision {} -> {}",
            self.seen_revision,
            revision
        );
        self.seen_revision = revision;
        Ok(true)
    }

    /// Treats the store's current revision as already read
    pub(crate) fn mark_seen(&mut self, store: &StoreHandle) -> Result<(), SyncError> {
        self.seen_revision = store.revision()?;
        Ok(())
    }

    pub(crate) fn drain_field_changes(&self) -> Vec<String> {
        match &self.channel {
            Some(channel) => channel.drain(),
            None => Vec::new(),
        }
    }

    pub(crate) fn deactivate(&mut self) {
        if let Some(channel) = self.channel.take() {
            channel.close();
        }
    }
}
