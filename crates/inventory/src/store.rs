//! The inventory store: exclusive owner of all item records.

use serde::Serialize;

use shelftrack_core::{DomainError, DomainResult, Entity, TagUid};

use crate::item::Item;

/// Outcome of a take operation.
///
/// Unknown uids and zero-stock takes are ordinary values, not errors, so
/// the scan resolver can branch on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TakeResult {
    /// The item matched and its stock was decremented by one.
    Taken { remaining: u32 },
    /// The item matched but stock was already zero; nothing changed.
    OutOfStock,
    /// No item carries the requested uid.
    NotFound,
}

impl TakeResult {
    /// True when some item carried the requested uid.
    pub fn matched(&self) -> bool {
        !matches!(self, TakeResult::NotFound)
    }

    /// True when stock actually moved.
    pub fn updated(&self) -> bool {
        matches!(self, TakeResult::Taken { .. })
    }
}

/// Outcome of a restock operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestockResult {
    /// The item matched and its stock was incremented by one.
    Restocked { level: u32 },
    /// No item carries the requested uid.
    NotFound,
}

impl RestockResult {
    pub fn matched(&self) -> bool {
        matches!(self, RestockResult::Restocked { .. })
    }
}

/// Seeded, closed catalog of items.
///
/// Items are provisioned once at construction; there are no create/delete
/// operations afterwards. The backing `Vec` preserves seed order, and no
/// mutation ever reorders it, so `snapshot()` is stable across the store's
/// lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryStore {
    items: Vec<Item>,
}

impl InventoryStore {
    /// Build the catalog from a seed set.
    ///
    /// Duplicate uids in the seed are a configuration mistake and are
    /// rejected rather than silently merged.
    pub fn new(seed: impl IntoIterator<Item = Item>) -> DomainResult<Self> {
        let mut items: Vec<Item> = Vec::new();
        for item in seed {
            if items.iter().any(|existing| existing.has_id(item.uid())) {
                return Err(DomainError::conflict(format!(
                    "duplicate uid in seed: {}",
                    item.uid()
                )));
            }
            items.push(item);
        }
        Ok(Self { items })
    }

    /// Decrement stock by one for the matching item, if it has any left.
    ///
    /// Exact match only (uids are already case-normalized). Mutates at most
    /// the single matched item.
    pub fn take(&mut self, uid: &TagUid) -> TakeResult {
        match self.items.iter_mut().find(|item| item.has_id(uid)) {
            Some(item) if item.stock() > 0 => {
                item.decrement();
                TakeResult::Taken {
                    remaining: item.stock(),
                }
            }
            Some(_) => TakeResult::OutOfStock,
            None => TakeResult::NotFound,
        }
    }

    /// Increment stock by one for the matching item, unconditionally.
    ///
    /// There is no upper bound; restocking is always accepted on a match.
    pub fn restock(&mut self, uid: &TagUid) -> RestockResult {
        match self.items.iter_mut().find(|item| item.has_id(uid)) {
            Some(item) => {
                item.increment();
                RestockResult::Restocked {
                    level: item.stock(),
                }
            }
            None => RestockResult::NotFound,
        }
    }

    /// Look up a single item by uid.
    pub fn get(&self, uid: &TagUid) -> Option<&Item> {
        self.items.iter().find(|item| item.has_id(uid))
    }

    /// Current items, in seed order.
    pub fn snapshot(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
