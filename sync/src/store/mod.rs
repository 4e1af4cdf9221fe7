pub mod error;
pub mod memory_store;
pub mod query_store;

cfg_if! {
    if #[cfg(feature = "url_store")] {
        pub mod url_store;
    }
}
