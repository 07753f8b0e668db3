//! # triage - Closed-Set Behavior Dispatch
//!
//! `triage` dispatches over a closed, compile-time-known set of record
//! variants. Each variant declares its capabilities explicitly
//! ([`Identify`], [`Score`], [`Transfer`]); the enums built with
//! [`closed_set!`] delegate to them with an exhaustive `match`.
//! Dynamic lookup through `&dyn Any` is available as an explicit escape
//! hatch and resolves unrecognized values to defined fallbacks.
//!
//! ## Quick Start
//!
//! ```rust
//! use triage::prelude::*;
//! use triage::notification::DirectMessage;
//! use triage::cargo::{Cargo, Container};
//!
//! let triage = Triage::new();
//!
//! let msg = Notification::from(DirectMessage::new("ana", "call me", 3, true));
//! assert_eq!(triage.compute_and_identify(&msg), Scored::new("ana", 50));
//!
//! let container = Cargo::from(Container::new(true, false, 40.0));
//! assert_eq!(triage.evaluate_transfer(&container, "Africa").as_str(), "Granted");
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use triage_core::{
    // Capabilities
    Behavior,
    // Error types
    BoxError,
    ConfigError,
    DEFAULT_RESTRICTED_DESTINATION,
    // Outcomes
    Decision,
    Identify,
    // Record
    Record,
    RegistryError,
    Score,
    Scored,
    Transfer,
    // Policy
    TransferPolicy,
    TransferPolicyBuilder,
    TriageError,
};

// Closed sets
pub use triage_std::closed_set;

// Dispatcher
pub use triage_std::dispatcher::Triage;

/// Notification variants and scoring.
pub mod notification {
    pub use triage_std::notification::{
        ALERT_SCORE, DirectMessage, GroupMessage, Notification, SystemAlert, URGENT_SCORE,
        compute_and_identify,
    };
}

/// Cargo variants and transfer evaluation.
pub mod cargo {
    pub use triage_std::cargo::{Cargo, Container, Manifest, Parcel, evaluate_transfer};
}

/// Dynamic dispatch support.
pub mod dynamic {
    pub use triage_std::dynamic::{
        ScoreRegistry, ScoreRegistryBuilder, TransferRegistry, TransferRegistryBuilder,
    };
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use triage_std::testing::*;
}

/// Prelude module - common imports for Triage.
///
/// # Usage
///
/// ```rust,ignore
/// use triage::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Behavior, Decision, Identify, Record, Score, Scored, Transfer, TransferPolicy, Triage,
        cargo::Cargo, notification::Notification,
    };
}

#[cfg(feature = "macros")]
pub use triage_macros::{Identify, Record};
