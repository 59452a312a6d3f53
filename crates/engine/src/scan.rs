use shelftrack_core::TagUid;
use shelftrack_inventory::TakeResult;

/// Result of resolving one raw scan input against the catalog.
///
/// The resolver is stateless between invocations; each call runs to
/// completion and returns one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Input was empty after trimming; no alert, no mutation.
    Ignored,
    /// A catalog item matched. A transient success alert was appended
    /// regardless of whether stock actually moved; `take` records whether
    /// it did.
    Taken {
        uid: TagUid,
        name: String,
        take: TakeResult,
    },
    /// No catalog item carries the scanned uid; a transient error alert
    /// was appended.
    Unknown { uid: TagUid },
}

impl ScanOutcome {
    /// True when the scan matched a catalog item.
    pub fn matched(&self) -> bool {
        matches!(self, ScanOutcome::Taken { .. })
    }
}
