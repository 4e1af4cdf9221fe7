use std::{fmt, rc::Rc};

use crate::BoxError;

/// Lifecycle hook, invoked with the host
pub type Hook<H> = Rc<dyn Fn(&mut H) -> Result<(), BoxError>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    BeforeInit,
    BeforeRead,
    AfterRead,
    BeforeWrite,
    AfterWrite,
}

impl HookKind {
    pub const ALL: [HookKind; 5] = [
        HookKind::BeforeInit,
        HookKind::BeforeRead,
        HookKind::AfterRead,
        HookKind::BeforeWrite,
        HookKind::AfterWrite,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HookKind::BeforeInit => "before_init",
            HookKind::BeforeRead => "before_read",
            HookKind::AfterRead => "after_read",
            HookKind::BeforeWrite => "before_write",
            HookKind::AfterWrite => "after_write",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            HookKind::BeforeInit => 0,
            HookKind::BeforeRead => 1,
            HookKind::AfterRead => 2,
            HookKind::BeforeWrite => 3,
            HookKind::AfterWrite => 4,
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) fn noop_hook<H: 'static>() -> Hook<H> {
    Rc::new(|_: &mut H| -> Result<(), BoxError> { Ok(()) })
}
