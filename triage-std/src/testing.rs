//! Testing utilities for Triage.
//!
//! # Features
//!
//! - [`UnrecognizedRecord`]: a record that implements no capability, for
//!   exercising fallbacks
//! - [`assert_idempotent`]: checks that repeated calls agree
//! - Fixture constructors for every notification and cargo variant

use crate::{
    cargo::{Cargo, Container, Parcel},
    notification::{DirectMessage, GroupMessage, Notification, SystemAlert},
};
use std::fmt::Debug;
use triage_core::Record;

/// A record outside every closed set.
///
/// Registries have no entry for it, so dynamic dispatch resolves it to the
/// defined fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnrecognizedRecord {
    /// Free-form label, useful in assertion messages.
    pub label: String,
}

impl UnrecognizedRecord {
    /// Create a new unrecognized record.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Record for UnrecognizedRecord {}

/// Call `f` several times and assert every result equals the first.
///
/// Returns the first result.
///
/// # Example
///
/// ```rust,ignore
/// let scored = assert_idempotent(|| triage.compute_and_identify(&msg));
/// ```
pub fn assert_idempotent<T, F>(f: F) -> T
where
    T: PartialEq + Debug,
    F: Fn() -> T,
{
    let first = f();
    for attempt in 1..=3 {
        let again = f();
        assert_eq!(first, again, "call {attempt} diverged from the first call");
    }
    first
}

/// A direct message from `sender`.
pub fn direct(sender: &str, priority: u32, urgent: bool) -> Notification {
    DirectMessage::new(sender, "fixture", priority, urgent).into()
}

/// A group message to `group`.
pub fn group(group: &str, priority: u32) -> Notification {
    GroupMessage::new(group, "fixture", priority).into()
}

/// A system alert with `code`.
pub fn alert(code: &str) -> Notification {
    SystemAlert::new(code, "fixture").into()
}

/// A parcel with the given flags.
pub fn parcel(flammable: bool, delicate: bool) -> Cargo {
    Parcel::new(flammable, delicate).into()
}

/// A container with the given flags.
pub fn container(flammable: bool, delicate: bool) -> Cargo {
    Container::new(flammable, delicate, 10.0).into()
}
