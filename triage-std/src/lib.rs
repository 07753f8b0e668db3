//! # triage-std
//!
//! Standard implementations for the Triage closed-set dispatch library.
//!
//! This crate provides:
//! - **Closed sets**: the [`closed_set!`] macro, [`Notification`](notification::Notification)
//!   and [`Cargo`](cargo::Cargo)
//! - **Dynamic dispatch**: [`ScoreRegistry`](dynamic::ScoreRegistry) and
//!   [`TransferRegistry`](dynamic::TransferRegistry) over `&dyn Any`, with
//!   defined fallbacks for unrecognized records
//! - **Dispatcher**: [`Triage`](dispatcher::Triage), bundling a policy and both registries
//! - **Testing utilities**: fixtures and purity assertions

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use triage_core;

// Modules
pub mod cargo;
pub mod closed_set;
pub mod dispatcher;
pub mod dynamic;
pub mod notification;
pub mod testing;
