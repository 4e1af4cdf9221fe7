use std::fmt;

/// Where a [`SyncEngine`](crate::SyncEngine) is in its host's lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Config resolved, store not read yet
    Created,
    /// Initial read done, nothing watched yet
    Initialized,
    /// Watching fields and store
    Mounted,
    /// Host destroyed, pending write dropped
    TornDown,
}

impl EngineState {
    pub fn name(&self) -> &'static str {
        match self {
            EngineState::Created => "Created",
            EngineState::Initialized => "Initialized",
            EngineState::Mounted => "Mounted",
            EngineState::TornDown => "TornDown",
        }
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
