//! Event publishing/subscription abstraction (mechanics only).
//!
//! The bus is the seam between the engine and its presentation observers.
//! It is intentionally lightweight:
//!
//! - **Transport-agnostic**: the engine only needs `publish`/`subscribe`.
//! - **Broadcast semantics**: every subscriber gets a copy of every event.
//! - **No persistence**: the engine's in-memory state is the source of
//!   truth; events are notifications, not a log. An observer that misses
//!   an event recovers by re-querying the snapshot and alert list.
//!
//! Observers consume their subscription from a single thread and re-query
//! the engine on each received notification.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// A subscription to the engine's change events.
///
/// Each subscription receives a copy of every event published after the
/// subscription was created. Dropping the subscription detaches it; the
/// bus prunes dead subscribers on the next publish.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next event is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive an event without blocking.
    ///
    /// This is the polling entry point for single-threaded frontends: drain
    /// with `try_recv` after each command, then re-render.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for an event.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

/// Pub/sub contract for engine change events.
///
/// `publish` can fail (e.g. a poisoned lock inside an implementation); the
/// engine logs and drops the event in that case, since its own state is
/// already mutated and observers can re-query at any time.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
