//! # `SyncEngine<H>`
//!
//! One engine per host. The host owns it next to its own state and calls it
//! explicitly from its lifecycle:
//!
//! | Host event | Engine call | Effect |
//! |------------|-------------|--------|
//! | created    | [`SyncEngine::on_init`]     | `before_init`, then one read from the store |
//! | mounted    | [`SyncEngine::on_mount`]    | watch fields and store, request one write |
//! | every turn | [`SyncEngine::update`]      | store changed -> read, field changed -> debounce, deadline -> write |
//! | destroyed  | [`SyncEngine::on_teardown`] | cancel the pending write, stop watching |
//!
//! A host without a sync declaration still goes through the same calls, but
//! none of them touch the store.

use std::time::Instant;

use log::{debug, trace, warn};

use crate::{
    engine::engine_state::EngineState,
    pipeline::{
        read::read_from_store,
        write::{compute_params, write_to_store},
    },
    watch::registrar::WatchRegistrar,
    Debouncer, HookKind, Query, QuerySyncConfig, StoreHandle, SyncConfig, SyncError, SyncHost,
};

pub struct SyncEngine<H> {
    config: Option<SyncConfig<H>>,
    store: StoreHandle,
    skip_own_commits: bool,
    debouncer: Debouncer,
    registrar: WatchRegistrar,
    state: EngineState,
    commits: u64,
}

impl<H> SyncEngine<H> {
    pub(crate) fn new(
        config: Option<SyncConfig<H>>,
        store: StoreHandle,
        settings: &QuerySyncConfig,
    ) -> Self {
        Self {
            config,
            store,
            skip_own_commits: settings.skip_own_commits,
            debouncer: Debouncer::new(settings.debounce),
            registrar: WatchRegistrar::new(),
            state: EngineState::Created,
            commits: 0,
        }
    }

    /// Whether the host declared a sync config
    pub fn is_synced(&self) -> bool {
        self.config.is_some()
    }

    pub fn config(&self) -> Option<&SyncConfig<H>> {
        self.config.as_ref()
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    /// Number of commits this engine made to the store
    pub fn commit_count(&self) -> u64 {
        self.commits
    }

    pub fn has_pending_write(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Runs `before_init` and the initial read from the store
    pub fn on_init(&mut self, host: &mut H) -> Result<(), SyncError> {
        self.expect_state(EngineState::Created, "initialize")?;

        if let Some(config) = self.config.as_ref() {
            config.run_hook(HookKind::BeforeInit, host)?;
            read_from_store(config, host, &self.store)?;
        }

        self.state = EngineState::Initialized;
        Ok(())
    }

    /// One cooperative turn. In order: re-read the store if it changed,
    /// turn field changes into a debounced write request, and run the write
    /// once its deadline is reached.
    pub fn update(&mut self, host: &mut H, now: Instant) -> Result<(), SyncError> {
        self.reject_torn_down("update")?;
        if self.state != EngineState::Mounted {
            return Ok(());
        }
        let Some(config) = self.config.as_ref() else {
            return Ok(());
        };

        if self.registrar.store_changed(&self.store)? {
            debug!("Store changed, reading");
            read_from_store(config, host, &self.store)?;
        }

        let changed = self.registrar.drain_field_changes();
        if !changed.is_empty() {
            trace!("Fields changed: {:?}", changed);
            self.debouncer.schedule(now);
        }

        if self.debouncer.take_due(now) {
            write_to_store(config, host, &self.store)?;
            self.commits += 1;
            if self.skip_own_commits {
                self.registrar.mark_seen(&self.store)?;
            }
        }

        Ok(())
    }

    /// Reads the store into the host immediately
    pub fn read_from_store(&self, host: &mut H) -> Result<(), SyncError> {
        self.reject_torn_down("read from store")?;
        match self.config.as_ref() {
            Some(config) => read_from_store(config, host, &self.store),
            None => Ok(()),
        }
    }

    /// Requests a debounced write of the host into the store. Supersedes any
    /// request still pending.
    pub fn request_write(&mut self, now: Instant) {
        if self.config.is_none() || self.state == EngineState::TornDown {
            return;
        }
        self.debouncer.schedule(now);
    }

    /// The params the host's write codecs currently produce. Unlike a
    /// commit, never includes passthrough keys.
    pub fn query_params(&self, host: &H) -> Result<Query, SyncError> {
        match self.config.as_ref() {
            Some(config) => compute_params(config, host),
            None => Ok(Query::new()),
        }
    }

    /// Stops watching and drops any pending write
    pub fn on_teardown(&mut self) -> Result<(), SyncError> {
        self.reject_torn_down("tear down")?;

        if self.debouncer.cancel() {
            warn!("Host torn down with a pending write, dropping it");
        }
        self.registrar.deactivate();
        self.state = EngineState::TornDown;
        Ok(())
    }

    fn expect_state(&self, expected: EngineState, operation: &'static str) -> Result<(), SyncError> {
        if self.state != expected {
            return Err(SyncError::InvalidTransition {
                state: self.state.name(),
                operation,
            });
        }
        Ok(())
    }

    fn reject_torn_down(&self, operation: &'static str) -> Result<(), SyncError> {
        if self.state == EngineState::TornDown {
            return Err(SyncError::InvalidTransition {
                state: self.state.name(),
                operation,
            });
        }
        Ok(())
    }
}

impl<H: SyncHost> SyncEngine<H> {
    /// Watches every declared field and the store, then requests one write
    /// so the store reflects fields it did not contain yet
    pub fn on_mount(&mut self, host: &mut H, now: Instant) -> Result<(), SyncError> {
        self.expect_state(EngineState::Initialized, "mount")?;

        if let Some(config) = self.config.as_ref() {
            self.registrar.activate(config, host, &self.store)?;
            self.debouncer.schedule(now);
        }

        self.state = EngineState::Mounted;
        Ok(())
    }
}
