pub mod field;
pub mod registrar;
pub mod sync_host;
pub mod watch_channel;
