//! Change-notification plumbing for the inventory engine.
//!
//! The engine does not assume a reactive presentation framework. Instead it
//! publishes change events over a lightweight pub/sub bus; observers
//! subscribe, receive a notification per mutation, and re-query the engine
//! for current state.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
