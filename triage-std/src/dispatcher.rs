//! The dispatcher: one entry point for scoring notifications and evaluating
//! cargo transfers, statically or through `&dyn Any`.

use crate::{
    cargo::Cargo,
    dynamic::{ScoreRegistry, TransferRegistry},
    notification::Notification,
};
use std::any::Any;
use triage_core::{Behavior, Decision, Scored, Transfer, TransferPolicy};

/// Bundles a [`TransferPolicy`] with the runtime registries.
///
/// Every operation is a pure function of its inputs and the configured
/// policy; repeated calls with the same arguments return identical results.
pub struct Triage {
    policy: TransferPolicy,
    scores: ScoreRegistry,
    transfers: TransferRegistry,
}

impl Triage {
    /// A dispatcher using the default policy.
    pub fn new() -> Self {
        Self::with_policy(TransferPolicy::default())
    }

    /// A dispatcher using `policy` for transfer decisions.
    pub fn with_policy(policy: TransferPolicy) -> Self {
        Self {
            transfers: TransferRegistry::cargo(policy.clone()),
            scores: ScoreRegistry::notifications(),
            policy,
        }
    }

    /// Replace the runtime registries.
    ///
    /// The transfer registry is rebound to this dispatcher's policy, so the
    /// static and dynamic paths always agree.
    pub fn with_registries(mut self, scores: ScoreRegistry, transfers: TransferRegistry) -> Self {
        self.scores = scores;
        self.transfers = transfers.with_policy(self.policy.clone());
        self
    }

    /// The policy used for static transfer evaluation.
    pub fn policy(&self) -> &TransferPolicy {
        &self.policy
    }

    /// Identify a notification and compute its importance.
    pub fn compute_and_identify(&self, notification: &Notification) -> Scored {
        let scored = notification.compute_and_identify();
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                kind = notification.kind(),
                identity = %scored.identity,
                value = scored.value,
                "Scored notification"
            );
        }
        scored
    }

    /// Decide whether `cargo` may be transferred to `destination`.
    pub fn evaluate_transfer(&self, cargo: &Cargo, destination: &str) -> Decision {
        let decision = cargo.transfer_decision(&self.policy, destination);
        #[cfg(feature = "tracing")]
        {
            if decision.is_denied() {
                tracing::info!(kind = cargo.kind(), destination, "Transfer denied");
            } else {
                tracing::debug!(kind = cargo.kind(), destination, %decision, "Transfer evaluated");
            }
        }
        decision
    }

    /// Score a value of any type, falling back to (`""`, `0`).
    ///
    /// Lookup is by concrete type: pass `&*boxed` for a `Box<T>`, since the
    /// box itself is not a registered record.
    pub fn identify_any(&self, record: &dyn Any) -> Scored {
        self.scores.dispatch(record)
    }

    /// Evaluate a transfer of a value of any type, falling back to
    /// `"Unknown Detected"`.
    ///
    /// As with [`identify_any`](Self::identify_any), deref boxed records first.
    pub fn transfer_any(&self, record: &dyn Any, destination: &str) -> Decision {
        self.transfers.dispatch(record, destination)
    }
}

impl Default for Triage {
    fn default() -> Self {
        Self::new()
    }
}
