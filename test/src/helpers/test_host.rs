use std::{collections::BTreeMap, time::Instant};

use query_sync::{
    Field, FieldWatcher, Query, QuerySync, SyncConfigBuilder, SyncEngine, SyncError, SyncHost,
};

/// Host state with any number of string fields, addressed by name
#[derive(Default)]
pub struct TestState {
    fields: BTreeMap<String, Field<String>>,
    pub hook_log: Vec<String>,
}

impl TestState {
    pub fn with_fields(names: &[&str]) -> Self {
        let mut state = Self::default();
        for name in names {
            state.fields.insert(name.to_string(), Field::default());
        }
        state
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|field| field.get().as_str())
    }

    /// Returns whether the value changed. Unknown names become new, unwatched fields.
    pub fn set(&mut self, name: &str, value: &str) -> bool {
        self.fields
            .entry(name.to_string())
            .or_default()
            .set(value.to_string())
    }

    pub fn field(&self, name: &str) -> Option<&Field<String>> {
        self.fields.get(name)
    }
}

impl SyncHost for TestState {
    fn watch(&mut self, name: &str, watcher: FieldWatcher) -> bool {
        match self.fields.get_mut(name) {
            Some(field) => {
                field.watch(watcher);
                true
            }
            None => false,
        }
    }
}

/// Declares `name` as a param whose field mirrors the query key of the same
/// name. A missing key reads as the empty string.
pub fn mirror(decl: &mut SyncConfigBuilder<TestState>, name: &'static str) {
    decl.read(name, move |host, query| {
        let value = query.get(name).map(String::as_str).unwrap_or("");
        host.set(name, value);
        Ok(())
    })
    .write(name, move |host, query| {
        query.insert(name.to_string(), host.get(name).unwrap_or("").to_string());
        Ok(())
    });
}

/// A component that owns its state next to its sync engine and drives the
/// engine from its own lifecycle
pub struct TestHost {
    pub state: TestState,
    engine: SyncEngine<TestState>,
}

impl TestHost {
    /// Creates the component; the engine reads the store right away
    pub fn create(
        sync: &QuerySync,
        state: TestState,
        declared: Option<&SyncConfigBuilder<TestState>>,
    ) -> Result<Self, SyncError> {
        let mut host = Self {
            state,
            engine: sync.engine(declared),
        };
        host.engine.on_init(&mut host.state)?;
        Ok(host)
    }

    /// Creates and mounts in one go
    pub fn mounted(
        sync: &QuerySync,
        state: TestState,
        declared: Option<&SyncConfigBuilder<TestState>>,
        now: Instant,
    ) -> Result<Self, SyncError> {
        let mut host = Self::create(sync, state, declared)?;
        host.mount(now)?;
        Ok(host)
    }

    pub fn mount(&mut self, now: Instant) -> Result<(), SyncError> {
        self.engine.on_mount(&mut self.state, now)
    }

    pub fn tick(&mut self, now: Instant) -> Result<(), SyncError> {
        self.engine.update(&mut self.state, now)
    }

    pub fn teardown(&mut self) -> Result<(), SyncError> {
        self.engine.on_teardown()
    }

    pub fn read_query(&mut self) -> Result<(), SyncError> {
        self.engine.read_from_store(&mut self.state)
    }

    pub fn write_query(&mut self, now: Instant) {
        self.engine.request_write(now);
    }

    pub fn query_params(&self) -> Result<Query, SyncError> {
        self.engine.query_params(&self.state)
    }

    pub fn engine(&self) -> &SyncEngine<TestState> {
        &self.engine
    }
}
