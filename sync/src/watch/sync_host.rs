use crate::FieldWatcher;

/// Reactive capability a host provides to its [`SyncEngine`](crate::SyncEngine)
///
/// ```ignore
/// impl SyncHost for SearchPage {
///     fn watch(&mut self, name: &str, watcher: FieldWatcher) -> bool {
///         match name {
///             "q" => self.query.watch(watcher),
///             "page" => self.page.watch(watcher),
///             _ => return false,
///         }
///         true
///     }
/// }
/// ```
pub trait SyncHost {
    /// Attaches `watcher` to the observable field behind the param `name`.
    /// Returns false if the host has no such field.
    fn watch(&mut self, name: &str, watcher: FieldWatcher) -> bool;
}
