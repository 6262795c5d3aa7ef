//! # Storage Layer
//!
//! This module defines the storage abstraction for stockroom. The
//! [`StorageBackend`] trait lets the menu work against any backend without
//! knowing how records are kept.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the record table lives in a `BTreeMap`
//!   - No persistence
//!   - Optionally seeded with default stock on construction
//!
//! A persistent backend only has to implement the trait; the menu state
//! machine is generic over it and never changes.
//!
//! ## Connection Discipline
//!
//! Every backend carries a connection flag. All operations except
//! [`StorageBackend::connected`] fail with `StockError::NotConnected` while it
//! is unset. Callers acquire the backend through [`Connection::open`], which
//! connects and hands back a guard. Dropping the guard disconnects, so the
//! release runs on every exit path, including `?` propagation and unwinding.
//!
//! ```text
//! let mut store = InMemoryStore::new();
//! {
//!     let mut conn = Connection::open(&mut store)?;   // connected
//!     conn.add_item("Hammer", 2)?;
//! }                                                   // disconnected here
//! ```

use crate::error::Result;
use crate::model::{InventoryItem, ItemId, Records};
use std::ops::{Deref, DerefMut};

pub mod memory;

/// Abstract interface for inventory storage.
pub trait StorageBackend {
    /// Sets the connection flag.
    fn connect(&mut self) -> Result<()>;

    /// Clears the connection flag. Must not fail.
    fn disconnect(&mut self);

    /// Current connection status, side-effect free.
    fn connected(&self) -> bool;

    /// All records in ascending id order.
    fn query_all(&self) -> Result<Records>;

    /// A single record. `NotFound` if the id is absent.
    fn query_by_id(&self, id: ItemId) -> Result<InventoryItem>;

    /// Inserts a record under the next id and returns that id.
    ///
    /// Fails with `InvalidData` for a blank name or a quantity that is not
    /// strictly positive.
    fn add_item(&mut self, name: &str, quantity: i64) -> Result<ItemId>;

    /// Replaces the quantity of `id`, or removes the record when `quantity`
    /// is zero. Fails with `InvalidData` if the id is absent or the quantity
    /// cannot be stored.
    fn edit_quantity(&mut self, id: ItemId, quantity: i64) -> Result<()>;
}

/// Scoped acquisition of a backend.
///
/// Connects on [`Connection::open`] and disconnects on drop. Derefs to the
/// backend so callers use it directly.
pub struct Connection<'a, B: StorageBackend> {
    backend: &'a mut B,
}

impl<'a, B: StorageBackend> Connection<'a, B> {
    pub fn open(backend: &'a mut B) -> Result<Self> {
        backend.connect()?;
        Ok(Self { backend })
    }
}

impl<B: StorageBackend> Deref for Connection<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        self.backend
    }
}

impl<B: StorageBackend> DerefMut for Connection<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        self.backend
    }
}

impl<B: StorageBackend> Drop for Connection<'_, B> {
    fn drop(&mut self) {
        self.backend.disconnect();
    }
}
