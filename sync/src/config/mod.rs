pub mod codec;
pub mod hooks;
pub mod query_sync_config;
pub mod sync_config;
