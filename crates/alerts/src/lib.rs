//! Alert model and low-stock derivation.
//!
//! Two alert lifecycles coexist and must not be conflated:
//!
//! - **Derived** (`low-stock`): a pure function of the item snapshot,
//!   recomputed in full after every mutation. Never created or dismissed
//!   imperatively.
//! - **Transient** (`scan-success`, `scan-error`): appended by the scan
//!   resolver and kept until explicitly dismissed.
//!
//! The `kind` tag plus the two-family [`AlertId`] make the distinction
//! explicit in the type system.

pub mod alert;
pub mod derive;

pub use alert::{Alert, AlertId, AlertKind};
pub use derive::derive_low_stock;
