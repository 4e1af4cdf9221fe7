use log::{debug, trace};

use crate::{Direction, HookKind, Query, StoreHandle, SyncConfig, SyncError};

/// Host -> store. Builds the payload (seeded with the store's contents when
/// `passthrough_query` is set), runs every write codec in declaration order,
/// then `before_write`, one commit and `after_write`.
pub(crate) fn write_to_store<H>(
    config: &SyncConfig<H>,
    host: &mut H,
    store: &StoreHandle,
) -> Result<(), SyncError> {
    let mut payload = if config.passthrough_query() {
        store.snapshot()?
    } else {
        Query::new()
    };

    write_params(config, host, &mut payload)?;

    config.run_hook(HookKind::BeforeWrite, host)?;
    debug!("Committing {} keys to store", payload.len());
    store.replace(payload)?;
    config.run_hook(HookKind::AfterWrite, host)
}

/// The values the host's write codecs produce, without passthrough keys
pub(crate) fn compute_params<H>(config: &SyncConfig<H>, host: &H) -> Result<Query, SyncError> {
    let mut payload = Query::new();
    write_params(config, host, &mut payload)?;
    Ok(payload)
}

fn write_params<H>(config: &SyncConfig<H>, host: &H, payload: &mut Query) -> Result<(), SyncError> {
    for (name, codec) in config.params() {
        trace!("write `{}`", name);
        codec
            .write(host, payload)
            .map_err(|source| SyncError::codec(name, Direction::Write, source))?;
    }
    Ok(())
}
