use std::time::Duration;

use log::debug;

use crate::{QuerySyncConfig, StoreHandle, SyncConfigBuilder, SyncEngine, SyncError};

/// Installs query sync against one store and hands out an engine per host
pub struct QuerySync {
    config: QuerySyncConfig,
    store: StoreHandle,
}

impl QuerySync {
    pub fn builder() -> QuerySyncBuilder {
        QuerySyncBuilder::new()
    }

    /// Installs with the default [`QuerySyncConfig`]
    pub fn new(store: StoreHandle) -> Self {
        Self {
            config: QuerySyncConfig::default(),
            store,
        }
    }

    pub fn config(&self) -> &QuerySyncConfig {
        &self.config
    }

    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    /// Creates the engine for a new host, resolving its declaration. A host
    /// that declares nothing gets an engine that never touches the store.
    pub fn engine<H: 'static>(&self, declared: Option<&SyncConfigBuilder<H>>) -> SyncEngine<H> {
        let config = declared.map(SyncConfigBuilder::resolve);
        if config.is_none() {
            debug!("Host declared no sync config");
        }
        SyncEngine::new(config, self.store.clone(), &self.config)
    }
}

pub struct QuerySyncBuilder {
    config: QuerySyncConfig,
    store: Option<StoreHandle>,
}

impl QuerySyncBuilder {
    pub fn new() -> Self {
        Self {
            config: QuerySyncConfig::default(),
            store: None,
        }
    }

    pub fn config(&mut self, config: QuerySyncConfig) -> &mut Self {
        self.config = config;
        self
    }

    pub fn debounce(&mut self, delay: Duration) -> &mut Self {
        self.config.debounce = delay;
        self
    }

    pub fn skip_own_commits(&mut self, skip: bool) -> &mut Self {
        self.config.skip_own_commits = skip;
        self
    }

    pub fn store(&mut self, store: StoreHandle) -> &mut Self {
        self.store = Some(store);
        self
    }

    /// Fails with [`SyncError::MissingStore`] when no store was given, since
    /// hosts cannot sync against nothing
    pub fn build(&self) -> Result<QuerySync, SyncError> {
        let store = self.store.clone().ok_or(SyncError::MissingStore)?;
        Ok(QuerySync {
            config: self.config.clone(),
            store,
        })
    }
}

impl Default for QuerySyncBuilder {
    fn default() -> Self {
        Self::new()
    }
}
