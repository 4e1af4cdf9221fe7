use thiserror::Error;

use crate::{Direction, HookKind, StoreError};

/// Error type returned by user-supplied codecs and hooks
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while installing or running query sync
#[derive(Debug, Error)]
pub enum SyncError {
    /// The installer was built without a store to sync against
    #[error("A query store must be provided before query sync can be installed")]
    MissingStore,

    /// A field codec failed; the remaining codecs of that pass were skipped
    #[error("{direction} codec for field `{field}` failed: {source}")]
    Codec {
        field: String,
        direction: Direction,
        #[source]
        source: BoxError,
    },

    /// A lifecycle hook failed
    #[error("{hook} hook failed: {source}")]
    Hook {
        hook: HookKind,
        #[source]
        source: BoxError,
    },

    /// The store refused an operation
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A lifecycle method was called out of order
    #[error("SyncEngine in state {state} cannot {operation}")]
    InvalidTransition {
        state: &'static str,
        operation: &'static str,
    },
}

impl SyncError {
    pub(crate) fn codec(field: &str, direction: Direction, source: BoxError) -> Self {
        Self::Codec {
            field: field.to_string(),
            direction,
            source,
        }
    }
}
