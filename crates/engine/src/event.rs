use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shelftrack_alerts::AlertId;
use shelftrack_core::TagUid;
use shelftrack_events::Event;

/// Change notifications published to presentation observers.
///
/// Every variant describes a mutation that has already been applied;
/// observers re-query `snapshot()`/`alerts()` on receipt. Mutations that
/// change nothing (zero-stock take, unknown restock uid, no-op dismiss)
/// publish nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// One unit was taken; `remaining` is the post-decrement level.
    StockTaken {
        uid: TagUid,
        remaining: u32,
        occurred_at: DateTime<Utc>,
    },
    /// One unit was restocked; `level` is the post-increment level.
    StockRestocked {
        uid: TagUid,
        level: u32,
        occurred_at: DateTime<Utc>,
    },
    /// A scan matched no catalog item; a transient error alert was appended.
    ScanRejected {
        uid: TagUid,
        occurred_at: DateTime<Utc>,
    },
    /// A transient alert was removed by the caller.
    AlertDismissed {
        id: AlertId,
        occurred_at: DateTime<Utc>,
    },
}

impl Event for EngineEvent {
    fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::StockTaken { .. } => "inventory.stock.taken",
            EngineEvent::StockRestocked { .. } => "inventory.stock.restocked",
            EngineEvent::ScanRejected { .. } => "inventory.scan.rejected",
            EngineEvent::AlertDismissed { .. } => "alerts.transient.dismissed",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            EngineEvent::StockTaken { occurred_at, .. }
            | EngineEvent::StockRestocked { occurred_at, .. }
            | EngineEvent::ScanRejected { occurred_at, .. }
            | EngineEvent::AlertDismissed { occurred_at, .. } => *occurred_at,
        }
    }
}
