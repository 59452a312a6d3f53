use serde::{Deserialize, Serialize};

use shelftrack_core::{DomainError, Entity, TagUid};

/// A catalog item tracked by the inventory store.
///
/// Stock is unsigned, so "stock is never negative" holds by type rather
/// than by runtime check; the store rejects a decrement at zero as a
/// visible result value instead of clamping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    uid: TagUid,
    name: String,
    stock: u32,
    min_stock: u32,
}

impl Item {
    /// Build a seed item. The display name must be non-empty.
    pub fn new(
        uid: TagUid,
        name: impl Into<String>,
        stock: u32,
        min_stock: u32,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self {
            uid,
            name,
            stock,
            min_stock,
        })
    }

    pub fn uid(&self) -> &TagUid {
        &self.uid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn min_stock(&self) -> u32 {
        self.min_stock
    }

    /// True when stock has reached the restock threshold.
    pub fn is_low(&self) -> bool {
        self.stock <= self.min_stock
    }

    // Stock mutation is reserved to the store so every change flows through
    // its take/restock contract.
    pub(crate) fn decrement(&mut self) {
        debug_assert!(self.stock > 0);
        self.stock -= 1;
    }

    pub(crate) fn increment(&mut self) {
        self.stock = self.stock.saturating_add(1);
    }
}

impl Entity for Item {
    type Id = TagUid;

    fn id(&self) -> &Self::Id {
        &self.uid
    }
}
