//! Engine facade: store + deriver + scan resolver + transient alerts.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use shelftrack_alerts::{Alert, AlertId, derive_low_stock};
use shelftrack_core::{DomainResult, TagUid};
use shelftrack_events::{EventBus, InMemoryEventBus, Subscription};
use shelftrack_inventory::{InventoryStore, Item, RestockResult, TakeResult};

use crate::event::EngineEvent;
use crate::scan::ScanOutcome;

/// The inventory state engine.
///
/// Owns the item records (via the store) and the transient alert list.
/// Mutations take `&mut self`, so single-writer execution is checked by
/// the compiler rather than assumed. After every effective mutation an
/// [`EngineEvent`] is published; observers re-query [`snapshot`] and
/// [`alerts`] on receipt.
///
/// [`snapshot`]: InventoryEngine::snapshot
/// [`alerts`]: InventoryEngine::alerts
#[derive(Debug)]
pub struct InventoryEngine {
    store: InventoryStore,
    transient: Vec<Alert>,
    bus: Arc<InMemoryEventBus<EngineEvent>>,
}

impl InventoryEngine {
    /// Provision the engine from a fixed seed catalog.
    pub fn new(seed: impl IntoIterator<Item = Item>) -> DomainResult<Self> {
        let store = InventoryStore::new(seed)?;
        info!(items = store.len(), "inventory engine provisioned");
        Ok(Self {
            store,
            transient: Vec::new(),
            bus: Arc::new(InMemoryEventBus::new()),
        })
    }

    /// Decrement stock for `uid` by one, if the item exists and has stock.
    pub fn take(&mut self, uid: &TagUid) -> TakeResult {
        let result = self.store.take(uid);
        match result {
            TakeResult::Taken { remaining } => {
                info!(%uid, remaining, "stock taken");
                self.publish(EngineEvent::StockTaken {
                    uid: uid.clone(),
                    remaining,
                    occurred_at: Utc::now(),
                });
            }
            TakeResult::OutOfStock => debug!(%uid, "take refused: out of stock"),
            TakeResult::NotFound => debug!(%uid, "take refused: unknown uid"),
        }
        result
    }

    /// Increment stock for `uid` by one, unconditionally on match.
    pub fn restock(&mut self, uid: &TagUid) -> RestockResult {
        let result = self.store.restock(uid);
        match result {
            RestockResult::Restocked { level } => {
                info!(%uid, level, "stock restocked");
                self.publish(EngineEvent::StockRestocked {
                    uid: uid.clone(),
                    level,
                    occurred_at: Utc::now(),
                });
            }
            RestockResult::NotFound => debug!(%uid, "restock refused: unknown uid"),
        }
        result
    }

    /// Resolve one raw scan input (simulated RFID read).
    ///
    /// Empty input (after trimming) is ignored outright. A matched uid is
    /// taken and reported as taken even when stock was already zero — the
    /// success alert mirrors the detection, not the decrement. An unknown
    /// uid appends a transient error alert. The engine never holds scanner
    /// input; clearing the input buffer is the caller's concern.
    pub fn resolve_scan(&mut self, raw: &str) -> ScanOutcome {
        let Ok(uid) = TagUid::new(raw) else {
            debug!("ignoring empty scan input");
            return ScanOutcome::Ignored;
        };

        match self.store.get(&uid).map(|item| item.name().to_owned()) {
            Some(name) => {
                let take = self.take(&uid);
                self.transient.push(Alert::scan_success(&uid, &name));
                ScanOutcome::Taken { uid, name, take }
            }
            None => {
                warn!(%uid, "scan matched no catalog item");
                self.transient.push(Alert::scan_error(&uid));
                self.publish(EngineEvent::ScanRejected {
                    uid: uid.clone(),
                    occurred_at: Utc::now(),
                });
                ScanOutcome::Unknown { uid }
            }
        }
    }

    /// Remove a transient alert by id. Returns whether one was removed.
    ///
    /// Derived low-stock ids are refused outright: dismissing them would
    /// have no lasting effect, since the next derivation pass regenerates
    /// them as long as the stock condition holds.
    pub fn dismiss_alert(&mut self, id: &AlertId) -> bool {
        if !id.is_transient() {
            debug!(%id, "dismiss refused: derived alerts clear themselves");
            return false;
        }

        let before = self.transient.len();
        self.transient.retain(|alert| &alert.id != id);
        let dismissed = self.transient.len() < before;

        if dismissed {
            debug!(%id, "transient alert dismissed");
            self.publish(EngineEvent::AlertDismissed {
                id: id.clone(),
                occurred_at: Utc::now(),
            });
        }
        dismissed
    }

    /// Current items, in seed order.
    pub fn snapshot(&self) -> &[Item] {
        self.store.snapshot()
    }

    /// Combined alert list: derived low-stock alerts first (snapshot
    /// order), then transient alerts in append order.
    pub fn alerts(&self) -> Vec<Alert> {
        let mut alerts = derive_low_stock(self.store.snapshot());
        alerts.extend(self.transient.iter().cloned());
        alerts
    }

    /// Subscribe to change events.
    ///
    /// This is the observer contract toward the presentation layer: one
    /// event per effective mutation, consumed by re-querying the engine.
    pub fn subscribe(&self) -> Subscription<EngineEvent> {
        self.bus.subscribe()
    }

    fn publish(&self, event: EngineEvent) {
        // State is already mutated; observers can always re-query, so a
        // failed publish is logged and dropped rather than propagated.
        if let Err(err) = self.bus.publish(event) {
            warn!(?err, "dropping engine event: bus unavailable");
        }
    }
}
