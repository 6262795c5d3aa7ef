use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Record key. Ids start at 1 and are assigned as `max + 1`.
pub type ItemId = u32;

/// Stock count stored on a record.
pub type Quantity = u32;

/// Snapshot of the record table, iterated in ascending id order.
pub type Records = BTreeMap<ItemId, InventoryItem>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    pub quantity: Quantity,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    /// Returns a copy carrying a different quantity. Records are never
    /// mutated in place.
    pub fn with_quantity(&self, quantity: Quantity) -> Self {
        Self {
            name: self.name.clone(),
            quantity,
        }
    }
}
