use std::{
    cell::{Ref, RefCell},
    collections::BTreeMap,
    rc::Rc,
};

use crate::StoreError;

/// Flat key-value contents of a store, e.g. the decoded query string of a URL
pub type Query = BTreeMap<String, String>;

/// A flat string-keyed store that hosts synchronize against
pub trait QueryStore {
    /// The store's current contents
    fn current(&self) -> &Query;

    /// Replaces the contents of the store without creating a new history
    /// entry. Must bump the revision if the contents changed.
    fn replace(&mut self, query: Query) -> Result<(), StoreError>;

    /// Counter that changes every time the contents change, by any party.
    /// Hosts poll it to learn about store changes.
    fn revision(&self) -> u64;

    fn snapshot(&self) -> Query {
        self.current().clone()
    }
}

/// Cloneable handle to a store shared by every host registered against it
#[derive(Clone)]
pub struct StoreHandle {
    inner: Rc<RefCell<dyn QueryStore>>,
}

impl StoreHandle {
    pub fn new<S: QueryStore + 'static>(store: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(store)),
        }
    }

    /// Wraps a store the caller keeps its own typed reference to
    pub fn shared<S: QueryStore + 'static>(store: Rc<RefCell<S>>) -> Self {
        Self { inner: store }
    }

    /// Borrows the store's current contents in place
    pub fn current(&self) -> Result<Ref<'_, Query>, StoreError> {
        let store = self
            .inner
            .try_borrow()
            .map_err(|_| StoreError::Reentrant)?;
        Ok(Ref::map(store, |store| store.current()))
    }

    pub fn snapshot(&self) -> Result<Query, StoreError> {
        self.inner
            .try_borrow()
            .map(|store| store.snapshot())
            .map_err(|_| StoreError::Reentrant)
    }

    pub fn revision(&self) -> Result<u64, StoreError> {
        self.inner
            .try_borrow()
            .map(|store| store.revision())
            .map_err(|_| StoreError::Reentrant)
    }

    pub fn replace(&self, query: Query) -> Result<(), StoreError> {
        let mut store = self
            .inner
            .try_borrow_mut()
            .map_err(|_| StoreError::Reentrant)?;
        store.replace(query)
    }

    /// Whether both handles point at the same store
    pub fn same_store(&self, other: &StoreHandle) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
