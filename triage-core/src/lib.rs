//! # triage-core
//!
//! Core traits for the Triage closed-set dispatch library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that defines its own record types without needing the standard
//! closed sets shipped in `triage-std`.
//!
//! # Capabilities
//!
//! Every record that enters dispatch declares what it can do through an
//! explicit trait rather than by happening to have the right methods:
//!
//! - [`Identify`] - the behavior-relevant identity of a record
//! - [`Score`] - a pure importance/cost computation over the record's own fields
//! - [`Behavior`] - both of the above, pairing them into a [`Scored`] result
//! - [`Transfer`] - an admission decision against a [`TransferPolicy`]
//!
//! # Error Types
//!
//! Dispatch itself never fails. Errors only surface while building
//! configuration or registries:
//!
//! - [`TriageError`] - Top-level error type
//! - [`ConfigError`] - Invalid policy configuration
//! - [`RegistryError`] - Registry construction errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod behavior;
mod error;
mod outcome;
mod policy;
mod record;

// Re-exports
pub use behavior::{Behavior, Identify, Score, Transfer};
pub use error::{BoxError, ConfigError, RegistryError, TriageError};
pub use outcome::{Decision, Scored};
pub use policy::{DEFAULT_RESTRICTED_DESTINATION, TransferPolicy, TransferPolicyBuilder};
pub use record::Record;
