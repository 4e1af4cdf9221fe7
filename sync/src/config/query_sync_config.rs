use std::{default::Default, time::Duration};

/// Contains Config properties shared by every host of a [`QuerySync`](crate::QuerySync)
#[derive(Clone, Debug)]
pub struct QuerySyncConfig {
    /// How long a host waits after the last write request before committing.
    /// Zero coalesces every request made within the same update.
    pub debounce: Duration,
    /// When true, a host does not re-read the store after its own commit.
    /// Off by default, so a read that normalizes state can trigger one more
    /// (convergent) write.
    pub skip_own_commits: bool,
}

impl Default for QuerySyncConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::ZERO,
            skip_own_commits: false,
        }
    }
}
