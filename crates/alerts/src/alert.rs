use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shelftrack_core::TagUid;
use shelftrack_inventory::Item;

/// Alert classification, one per lifecycle/source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertKind {
    LowStock,
    ScanSuccess,
    ScanError,
}

/// Alert identifier.
///
/// Derived alerts are keyed by the item uid they describe; transient
/// alerts carry their own time-ordered uuid. The two families can never
/// collide, and transient ids are unique among themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertId {
    Item(TagUid),
    Scan(Uuid),
}

impl AlertId {
    /// Mint a fresh transient alert id.
    ///
    /// Uses UUIDv7 (time-ordered), so ids also sort in append order.
    pub fn fresh_scan() -> Self {
        Self::Scan(Uuid::now_v7())
    }

    /// True for ids in the dismissible (transient) family.
    pub fn is_transient(&self) -> bool {
        matches!(self, AlertId::Scan(_))
    }
}

impl core::fmt::Display for AlertId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AlertId::Item(uid) => core::fmt::Display::fmt(uid, f),
            AlertId::Scan(id) => core::fmt::Display::fmt(id, f),
        }
    }
}

/// A user-visible alert.
///
/// Alerts deliberately carry no timestamp: the derived set must be a pure
/// function of item state, so deriving twice from the same snapshot yields
/// *identical* values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    /// Low-stock alert for one item; id is the item uid.
    pub fn low_stock(item: &Item) -> Self {
        Self {
            id: AlertId::Item(item.uid().clone()),
            kind: AlertKind::LowStock,
            message: format!(
                "{} is low on stock! Current: {}. Please restock.",
                item.name(),
                item.stock()
            ),
        }
    }

    /// Transient success alert for a resolved scan.
    pub fn scan_success(uid: &TagUid, name: &str) -> Self {
        Self {
            id: AlertId::fresh_scan(),
            kind: AlertKind::ScanSuccess,
            message: format!("{name} (UID: {uid}) detected and taken."),
        }
    }

    /// Transient error alert for a scan that matched no item.
    pub fn scan_error(uid: &TagUid) -> Self {
        Self {
            id: AlertId::fresh_scan(),
            kind: AlertKind::ScanError,
            message: format!("Unknown RFID Tag: {uid}. No matching product found."),
        }
    }
}
