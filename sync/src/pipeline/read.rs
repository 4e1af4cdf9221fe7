use log::{debug, trace};

use crate::{Direction, HookKind, StoreHandle, SyncConfig, SyncError};

/// Store -> host. Runs `before_read`, every read codec in declaration order
/// against the store's current contents, then `after_read`. Never commits.
pub(crate) fn read_from_store<H>(
    config: &SyncConfig<H>,
    host: &mut H,
    store: &StoreHandle,
) -> Result<(), SyncError> {
    config.run_hook(HookKind::BeforeRead, host)?;

    {
        let query = store.current()?;
        for (name, codec) in config.params() {
            trace!("read `{}`", name);
            codec
                .read(host, &query)
                .map_err(|source| SyncError::codec(name, Direction::Read, source))?;
        }
        debug!("Read {} params from store", config.param_count());
    }

    config.run_hook(HookKind::AfterRead, host)
}
