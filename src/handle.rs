//! Entity handles
//!
//! An [`EntityHandle`] is a shared-ownership pointer to one entity instance.
//! `Database::create` keeps a clone of the handle in the table cache, so a
//! later `Database::update` writes whatever the caller has since changed
//! through any clone of it.
//!
//! ## Locking
//! Each handle wraps a `parking_lot::RwLock`. Store operations that flush a
//! table take a read lock on every live handle of that table, so a caller
//! must not hold a [`EntityHandle::write`] guard across such a call.

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::codec::Entity;
use crate::error::Result;
use crate::record::Record;

/// Shared, mutable handle to an entity
pub struct EntityHandle<E> {
    inner: Arc<RwLock<E>>,
}

impl<E: Entity> EntityHandle<E> {
    /// Wrap a (usually new) entity
    pub fn new(entity: E) -> Self {
        Self {
            inner: Arc::new(RwLock::new(entity)),
        }
    }

    /// Borrow the entity for reading
    pub fn read(&self) -> RwLockReadGuard<'_, E> {
        self.inner.read()
    }

    /// Borrow the entity for mutation
    ///
    /// Drop the guard before calling into the store. `Database` operations
    /// lock the table cache and then read-lock every live handle of the
    /// table; holding this guard across such a call deadlocks (same thread)
    /// or inverts the lock order against another thread inside
    /// `find_by`/`update`/`create`.
    ///
    /// ```no_run
    /// # use tabula::{Database, EntityHandle};
    /// # use tabula::models::Customer;
    /// # fn demo(db: &Database, customer: &EntityHandle<Customer>) -> tabula::Result<()> {
    /// customer.write().set_name("Belmont"); // guard dropped at end of statement
    /// db.update("customers")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn write(&self) -> RwLockWriteGuard<'_, E> {
        self.inner.write()
    }

    /// The entity's identifier, `None` until created
    pub fn id(&self) -> Option<u64> {
        self.inner.read().id()
    }

    /// Clone the entity out of the handle
    pub fn snapshot(&self) -> E
    where
        E: Clone,
    {
        self.inner.read().clone()
    }

    /// Whether two handles point at the same instance
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<E> Clone for EntityHandle<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for EntityHandle<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntityHandle").field(&*self.inner.read()).finish()
    }
}

impl<E: Entity + Send + Sync + 'static> EntityHandle<E> {
    /// Type-erased view used by the table cache
    pub(crate) fn live(&self) -> Arc<dyn LiveRecord> {
        self.inner.clone()
    }
}

/// Something the table cache can re-serialize on demand
pub(crate) trait LiveRecord: Send + Sync {
    fn snapshot(&self) -> Result<Record>;
}

impl<E: Entity + Send + Sync> LiveRecord for RwLock<E> {
    fn snapshot(&self) -> Result<Record> {
        self.read().to_record()
    }
}
