//! # Capability traits
//!
//! A record qualifies for dispatch only by implementing these traits
//! explicitly. Each capability is pure: it reads the record's own fields
//! and nothing else, and it is total over every field value.

use crate::{
    outcome::{Decision, Scored},
    policy::TransferPolicy,
};

/// Exposes the field that identifies a record for dispatch purposes.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Identify`",
    label = "missing `Identify` implementation",
    note = "Implement `identity` or derive it with `#[derive(Identify)]` and an `#[identity]` field."
)]
pub trait Identify {
    /// The identity string (sender, group name, alert code, ...).
    fn identity(&self) -> &str;
}

/// Computes a numeric importance or cost for a record.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Score`",
    label = "missing `Score` implementation",
    note = "`score` must be a pure function of the record's own fields."
)]
pub trait Score {
    /// The computed value.
    fn score(&self) -> u32;
}

/// The full behavior contract: an identity plus a score.
///
/// Implemented automatically for anything that is both [`Identify`] and
/// [`Score`].
pub trait Behavior: Identify + Score {
    /// Pair the identity with the computed value.
    fn compute_and_identify(&self) -> Scored {
        Scored::new(self.identity(), self.score())
    }
}

impl<T: Identify + Score + ?Sized> Behavior for T {}

/// Decides whether a record may be transferred to a destination.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Transfer`",
    label = "missing `Transfer` implementation",
    note = "Implement `transfer_decision` to take part in transfer evaluation."
)]
pub trait Transfer {
    /// Evaluate against an explicit policy.
    fn transfer_decision(&self, policy: &TransferPolicy, destination: &str) -> Decision;

    /// Evaluate against the default policy.
    fn evaluate_transfer(&self, destination: &str) -> Decision {
        self.transfer_decision(&TransferPolicy::default(), destination)
    }
}

impl<T: Identify + ?Sized> Identify for Box<T> {
    fn identity(&self) -> &str {
        (**self).identity()
    }
}

impl<T: Score + ?Sized> Score for Box<T> {
    fn score(&self) -> u32 {
        (**self).score()
    }
}

impl<T: Transfer + ?Sized> Transfer for Box<T> {
    fn transfer_decision(&self, policy: &TransferPolicy, destination: &str) -> Decision {
        (**self).transfer_decision(policy, destination)
    }
}
