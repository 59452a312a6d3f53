//! Low-stock alert derivation.

use shelftrack_inventory::Item;

use crate::alert::Alert;

/// Recompute the full low-stock alert set from an item snapshot.
///
/// Pure and deterministic: the result depends only on the snapshot passed
/// in, never on prior alert state. One alert per item with
/// `stock <= min_stock`, in snapshot order. Callers run this after every
/// mutation; full recomputation is O(n) over a small bounded catalog and
/// guarantees the derived set cannot drift from item state.
pub fn derive_low_stock(items: &[Item]) -> Vec<Alert> {
    items
        .iter()
        .filter(|item| item.is_low())
        .map(Alert::low_stock)
        .collect()
}
