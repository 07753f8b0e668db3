//! Cargo variants and the transfer admission rules.
//!
//! The two variants apply deliberately different rules at the restricted
//! destination:
//!
//! - a [`Parcel`] is denied if it is flammable **or** delicate, otherwise `"Granted!"`;
//! - a [`Container`] is denied only if it is flammable **and** delicate, otherwise `"Granted"`.
//!
//! Any other destination is always granted.

use triage_core::{Decision, Record, Transfer, TransferPolicy};

/// A single-item parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Parcel {
    flammable: bool,
    delicate: bool,
}

impl Parcel {
    /// Create a new parcel.
    pub const fn new(flammable: bool, delicate: bool) -> Self {
        Self {
            flammable,
            delicate,
        }
    }

    /// Whether the contents are flammable.
    pub const fn is_flammable(&self) -> bool {
        self.flammable
    }

    /// Whether the contents are delicate.
    pub const fn is_delicate(&self) -> bool {
        self.delicate
    }
}

impl Record for Parcel {}

impl Transfer for Parcel {
    fn transfer_decision(&self, policy: &TransferPolicy, destination: &str) -> Decision {
        if policy.is_restricted(destination) && (self.flammable || self.delicate) {
            Decision::Denied
        } else {
            Decision::GrantedLoud
        }
    }
}

/// A bulk shipping container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Container {
    flammable: bool,
    delicate: bool,
    size: f64,
}

impl Container {
    /// Create a new container.
    pub const fn new(flammable: bool, delicate: bool, size: f64) -> Self {
        Self {
            flammable,
            delicate,
            size,
        }
    }

    /// Whether the contents are flammable.
    pub const fn is_flammable(&self) -> bool {
        self.flammable
    }

    /// Whether the contents are delicate.
    pub const fn is_delicate(&self) -> bool {
        self.delicate
    }

    /// Container size.
    pub const fn size(&self) -> f64 {
        self.size
    }
}

impl Record for Container {}

impl Transfer for Container {
    fn transfer_decision(&self, policy: &TransferPolicy, destination: &str) -> Decision {
        if policy.is_restricted(destination) && (self.flammable && self.delicate) {
            Decision::Denied
        } else {
            Decision::Granted
        }
    }
}

crate::closed_set! {
    /// Every kind of cargo the transfer rules understand.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Cargo: Transfer {
        /// A [`Parcel`].
        Parcel(Parcel),
        /// A [`Container`].
        Container(Container),
    }
}

/// Evaluate a transfer of `cargo` to `destination` under the default policy.
pub fn evaluate_transfer(cargo: &Cargo, destination: &str) -> Decision {
    cargo.evaluate_transfer(destination)
}

/// Produces a one-line manifest entry describing a piece of cargo.
pub trait Manifest {
    /// The manifest line.
    fn manifest(&self) -> String;
}

impl Manifest for Parcel {
    fn manifest(&self) -> String {
        format!(
            "parcel flammable={} delicate={}",
            self.flammable, self.delicate
        )
    }
}

impl Manifest for Container {
    fn manifest(&self) -> String {
        format!(
            "container size={} flammable={} delicate={}",
            self.size, self.flammable, self.delicate
        )
    }
}

impl Manifest for Cargo {
    fn manifest(&self) -> String {
        match self {
            Cargo::Parcel(parcel) => parcel.manifest(),
            Cargo::Container(container) => container.manifest(),
        }
    }
}
