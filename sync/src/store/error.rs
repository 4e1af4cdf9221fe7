use thiserror::Error;

/// Errors that can occur while reading from or committing to a query store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store was accessed while already borrowed, e.g. from inside a codec
    #[error("Query store accessed re-entrantly while it was already borrowed")]
    Reentrant,

    /// The store refused to accept a commit
    #[error("Query store rejected the commit: {reason}")]
    Rejected { reason: String },

    /// A URL-backed store could not parse its URL
    #[cfg(feature = "url_store")]
    #[error("Invalid URL for query store: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
