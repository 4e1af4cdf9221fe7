//! # Query Sync
//! Keeps the observable fields of a component in sync with a flat key-value
//! store (usually the query string of the current URL), so state survives
//! navigation and can be bookmarked or shared.
//!
//! Each host composes one [`SyncEngine`], built by a [`QuerySync`] installer
//! from the host's [`SyncConfigBuilder`] declaration, and drives it through
//! `on_init`, `on_mount`, `update` and `on_teardown`.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

#[macro_use]
extern crate cfg_if;

mod config;
mod debounce;
mod engine;
mod error;
mod pipeline;
mod store;
mod watch;

cfg_if! {
    if #[cfg(feature = "url_store")] {
        pub use store::url_store::UrlQueryStore;
    }
}

pub use config::{
    codec::{Codec, Direction, PartialCodec, ReadFn, WriteFn},
    hooks::{Hook, HookKind},
    query_sync_config::QuerySyncConfig,
    sync_config::{SyncConfig, SyncConfigBuilder},
};
pub use debounce::Debouncer;
pub use engine::{
    engine_state::EngineState,
    query_sync::{QuerySync, QuerySyncBuilder},
    sync_engine::SyncEngine,
};
pub use error::{BoxError, SyncError};
pub use store::{
    error::StoreError,
    memory_store::MemoryStore,
    query_store::{Query, QueryStore, StoreHandle},
};
pub use watch::{
    field::Field,
    sync_host::SyncHost,
    watch_channel::{FieldWatcher, WatchChannel},
};
