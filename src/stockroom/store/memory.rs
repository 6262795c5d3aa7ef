use super::StorageBackend;
use crate::error::{Result, StockError};
use crate::model::{InventoryItem, ItemId, Quantity, Records};
use rand::Rng;
use tracing::{debug, info};

/// Names the store is seeded with by [`InMemoryStore::with_default_stock`].
pub const DEFAULT_STOCK: [&str; 4] = ["Box", "Shoes", "Hammer", "Screwdriver"];

/// In-memory record table. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    connected: bool,
    records: Records,
}

impl InMemoryStore {
    /// An empty, disconnected store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A disconnected store holding [`DEFAULT_STOCK`] under ids `1..=4`, each
    /// with a random quantity between 1 and 5.
    pub fn with_default_stock() -> Self {
        let mut rng = rand::thread_rng();
        let records = DEFAULT_STOCK
            .iter()
            .zip(1..)
            .map(|(name, id)| (id, InventoryItem::new(*name, rng.gen_range(1..=5))))
            .collect();
        Self {
            connected: false,
            records,
        }
    }

    fn ensure_connected(&self) -> Result<()> {
        if self.connected {
            Ok(())
        } else {
            Err(StockError::NotConnected)
        }
    }

    fn next_id(&self) -> ItemId {
        self.records.keys().next_back().map_or(1, |max| max + 1)
    }
}

impl StorageBackend for InMemoryStore {
    fn connect(&mut self) -> Result<()> {
        self.connected = true;
        info!("DB connection established");
        Ok(())
    }

    fn disconnect(&mut self) {
        self.connected = false;
        info!("DB connection closed");
    }

    fn connected(&self) -> bool {
        self.connected
    }

    fn query_all(&self) -> Result<Records> {
        self.ensure_connected()?;
        Ok(self.records.clone())
    }

    fn query_by_id(&self, id: ItemId) -> Result<InventoryItem> {
        self.ensure_connected()?;
        self.records
            .get(&id)
            .cloned()
            .ok_or(StockError::NotFound(id))
    }

    fn add_item(&mut self, name: &str, quantity: i64) -> Result<ItemId> {
        self.ensure_connected()?;
        let name = name.trim();
        if name.is_empty() {
            return Err(StockError::InvalidData(
                "item name is empty, record not added".into(),
            ));
        }
        let quantity = match Quantity::try_from(quantity) {
            Ok(q) if q > 0 => q,
            _ => {
                return Err(StockError::InvalidData(
                    "quantity must be greater than 0, record not added".into(),
                ))
            }
        };

        let id = self.next_id();
        self.records.insert(id, InventoryItem::new(name, quantity));
        debug!(id, item = name, quantity, "item added");
        Ok(id)
    }

    fn edit_quantity(&mut self, id: ItemId, quantity: i64) -> Result<()> {
        self.ensure_connected()?;
        let current = self.records.get(&id).ok_or_else(|| {
            StockError::InvalidData(format!("no item with ID {id}, record not edited"))
        })?;

        if quantity == 0 {
            self.records.remove(&id);
            debug!(id, "item deleted");
            return Ok(());
        }

        let quantity = Quantity::try_from(quantity).map_err(|_| {
            StockError::InvalidData(format!(
                "quantity {quantity} cannot be stored, record not edited"
            ))
        })?;
        let edited = current.with_quantity(quantity);
        self.records.insert(id, edited);
        debug!(id, quantity, "item edited");
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Inserts a record directly, bypassing the connection check.
        pub fn with_item(mut self, id: ItemId, name: &str, quantity: Quantity) -> Self {
            self.store
                .records
                .insert(id, InventoryItem::new(name, quantity));
            self
        }

        pub fn connected(mut self) -> Self {
            self.store.connected = true;
            self
        }
    }
}
