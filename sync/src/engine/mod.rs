pub mod engine_state;
pub mod query_sync;
pub mod sync_engine;
