use std::rc::Rc;

use log::debug;

use crate::{
    config::{codec::PartialCodec, hooks::noop_hook},
    BoxError, Codec, Hook, HookKind, Query, SyncError,
};

/// A host's resolved sync declaration. Immutable once built.
pub struct SyncConfig<H> {
    passthrough_query: bool,
    params: Vec<(String, Codec<H>)>,
    hooks: [Hook<H>; 5],
}

impl<H: 'static> SyncConfig<H> {
    pub fn builder() -> SyncConfigBuilder<H> {
        SyncConfigBuilder::new()
    }
}

impl<H> SyncConfig<H> {
    /// Whether writes start from a copy of the store's current contents
    pub fn passthrough_query(&self) -> bool {
        self.passthrough_query
    }

    /// Declared params, in declaration order
    pub fn params(&self) -> impl Iterator<Item = (&str, &Codec<H>)> {
        self.params
            .iter()
            .map(|(name, codec)| (name.as_str(), codec))
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(name, _)| name.as_str())
    }

    pub fn codec(&self, name: &str) -> Option<&Codec<H>> {
        self.params
            .iter()
            .find(|(param, _)| param == name)
            .map(|(_, codec)| codec)
    }

    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    pub fn hook(&self, kind: HookKind) -> &Hook<H> {
        &self.hooks[kind.index()]
    }

    pub(crate) fn run_hook(&self, kind: HookKind, host: &mut H) -> Result<(), SyncError> {
        (self.hook(kind))(host).map_err(|source| SyncError::Hook { hook: kind, source })
    }
}

/// The partial sync declaration of a host
///
/// Anything left unset is filled in by [`SyncConfigBuilder::resolve`]: hooks
/// become no-ops, `passthrough_query` becomes false and a param missing its
/// read or write half only syncs in the direction it defines.
pub struct SyncConfigBuilder<H> {
    passthrough_query: Option<bool>,
    params: Vec<(String, PartialCodec<H>)>,
    hooks: [Option<Hook<H>>; 5],
}

impl<H: 'static> SyncConfigBuilder<H> {
    pub fn new() -> Self {
        Self {
            passthrough_query: None,
            params: Vec::new(),
            hooks: [None, None, None, None, None],
        }
    }

    pub fn passthrough_query(&mut self, enabled: bool) -> &mut Self {
        self.passthrough_query = Some(enabled);
        self
    }

    /// Declares a param. Declaring a name again replaces its codec but keeps
    /// its original position.
    pub fn param(&mut self, name: &str, codec: PartialCodec<H>) -> &mut Self {
        *self.param_entry(name) = codec;
        self
    }

    /// Sets the read half of a param, declaring it if needed
    pub fn read<F>(&mut self, name: &str, read: F) -> &mut Self
    where
        F: Fn(&mut H, &Query) -> Result<(), BoxError> + 'static,
    {
        self.param_entry(name).set_read(Rc::new(read));
        self
    }

    /// Sets the write half of a param, declaring it if needed
    pub fn write<F>(&mut self, name: &str, write: F) -> &mut Self
    where
        F: Fn(&H, &mut Query) -> Result<(), BoxError> + 'static,
    {
        self.param_entry(name).set_write(Rc::new(write));
        self
    }

    pub fn hook<F>(&mut self, kind: HookKind, hook: F) -> &mut Self
    where
        F: Fn(&mut H) -> Result<(), BoxError> + 'static,
    {
        self.hooks[kind.index()] = Some(Rc::new(hook));
        self
    }

    pub fn before_init<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&mut H) -> Result<(), BoxError> + 'static,
    {
        self.hook(HookKind::BeforeInit, hook)
    }

    pub fn before_read<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&mut H) -> Result<(), BoxError> + 'static,
    {
        self.hook(HookKind::BeforeRead, hook)
    }

    pub fn after_read<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&mut H) -> Result<(), BoxError> + 'static,
    {
        self.hook(HookKind::AfterRead, hook)
    }

    pub fn before_write<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&mut H) -> Result<(), BoxError> + 'static,
    {
        self.hook(HookKind::BeforeWrite, hook)
    }

    pub fn after_write<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&mut H) -> Result<(), BoxError> + 'static,
    {
        self.hook(HookKind::AfterWrite, hook)
    }

    /// Builds a complete [`SyncConfig`]. Top-level settings are resolved
    /// first, then each param's codec. The builder is left untouched, so one
    /// declaration can be resolved for any number of hosts.
    pub fn resolve(&self) -> SyncConfig<H> {
        let passthrough_query = self.passthrough_query.unwrap_or(false);
        let hooks = HookKind::ALL.map(|kind| {
            self.hooks[kind.index()]
                .clone()
                .unwrap_or_else(noop_hook)
        });

        let params = self
            .params
            .iter()
            .map(|(name, partial)| (name.clone(), partial.resolve()))
            .collect::<Vec<_>>();

        debug!(
            "SyncConfig resolved (params={}, passthrough_query={})",
            params.len(),
            passthrough_query
        );

        SyncConfig {
            passthrough_query,
            params,
            hooks,
        }
    }

    fn param_entry(&mut self, name: &str) -> &mut PartialCodec<H> {
        let index = match self.params.iter().position(|(param, _)| param == name) {
            Some(index) => index,
            None => {
                self.params.push((name.to_string(), PartialCodec::new()));
                self.params.len() - 1
            }
        };
        &mut self.params[index].1
    }
}

impl<H: 'static> Default for SyncConfigBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}
