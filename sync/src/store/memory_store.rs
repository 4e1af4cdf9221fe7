use log::trace;

use crate::{Query, QueryStore, StoreError};

/// In-memory store, for hosts without a real router and for tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    query: Query,
    revision: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(query: Query) -> Self {
        Self { query, revision: 0 }
    }

    /// Changes the contents from outside any host, like a user navigating
    /// or editing the address bar
    pub fn load(&mut self, query: Query) {
        self.query = query;
        self.revision += 1;
        trace!("MemoryStore::load(revision={})", self.revision);
    }
}

impl QueryStore for MemoryStore {
    fn current(&self) -> &Query {
        &self.query
    }

    fn replace(&mut self, query: Query) -> Result<(), StoreError> {
        // a duplicate replace is not a navigation
        if query == self.query {
            trace!("MemoryStore::replace() skipped, contents unchanged");
            return Ok(());
        }
        self.query = query;
        self.revision += 1;
        trace!("MemoryStore::replace(revision={})", self.revision);
        Ok(())
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}
