use std::{fmt, rc::Rc};

use crate::{BoxError, Query};

/// Read half of a codec: updates the host from the store's contents
pub type ReadFn<H> = Rc<dyn Fn(&mut H, &Query) -> Result<(), BoxError>>;
/// Write half of a codec: adds the host's state to the outgoing payload
pub type WriteFn<H> = Rc<dyn Fn(&H, &mut Query) -> Result<(), BoxError>>;

/// Which way a codec translates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Read,
    Write,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Read => write!(f, "read"),
            Direction::Write => write!(f, "write"),
        }
    }
}

pub(crate) fn noop_read<H: 'static>() -> ReadFn<H> {
    Rc::new(|_: &mut H, _: &Query| -> Result<(), BoxError> { Ok(()) })
}

pub(crate) fn noop_write<H: 'static>() -> WriteFn<H> {
    Rc::new(|_: &H, _: &mut Query| -> Result<(), BoxError> { Ok(()) })
}

/// The resolved read/write pair for one synchronized field
pub struct Codec<H> {
    read: ReadFn<H>,
    write: WriteFn<H>,
}

impl<H> Codec<H> {
    pub fn read(&self, host: &mut H, query: &Query) -> Result<(), BoxError> {
        (self.read)(host, query)
    }

    pub fn write(&self, host: &H, payload: &mut Query) -> Result<(), BoxError> {
        (self.write)(host, payload)
    }
}

impl<H> Clone for Codec<H> {
    fn clone(&self) -> Self {
        Self {
            read: self.read.clone(),
            write: self.write.clone(),
        }
    }
}

/// A codec as declared by a host, either half may be left out
pub struct PartialCodec<H> {
    read: Option<ReadFn<H>>,
    write: Option<WriteFn<H>>,
}

impl<H: 'static> PartialCodec<H> {
    pub fn new() -> Self {
        Self {
            read: None,
            write: None,
        }
    }

    pub fn with_read<F>(mut self, read: F) -> Self
    where
        F: Fn(&mut H, &Query) -> Result<(), BoxError> + 'static,
    {
        self.read = Some(Rc::new(read));
        self
    }

    pub fn with_write<F>(mut self, write: F) -> Self
    where
        F: Fn(&H, &mut Query) -> Result<(), BoxError> + 'static,
    {
        self.write = Some(Rc::new(write));
        self
    }

    pub(crate) fn set_read(&mut self, read: ReadFn<H>) {
        self.read = Some(read);
    }

    pub(crate) fn set_write(&mut self, write: WriteFn<H>) {
        self.write = Some(write);
    }

    pub fn has_read(&self) -> bool {
        self.read.is_some()
    }

    pub fn has_write(&self) -> bool {
        self.write.is_some()
    }

    /// Fills the missing halves with no-ops, leaving `self` untouched
    pub fn resolve(&self) -> Codec<H> {
        Codec {
            read: self.read.clone().unwrap_or_else(noop_read),
            write: self.write.clone().unwrap_or_else(noop_write),
        }
    }
}

impl<H: 'static> Default for PartialCodec<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Clone for PartialCodec<H> {
    fn clone(&self) -> Self {
        Self {
            read: self.read.clone(),
            write: self.write.clone(),
        }
    }
}
