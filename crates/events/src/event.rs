use chrono::{DateTime, Utc};

/// A domain-agnostic change event.
///
/// Events are immutable facts about a state change that already happened.
/// They are published *after* the mutation completes, so observers can
/// always re-query the engine and see at least the state the event
/// describes.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "inventory.stock.taken").
    fn event_type(&self) -> &'static str;

    /// When the change occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
