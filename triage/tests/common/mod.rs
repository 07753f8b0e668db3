#![allow(dead_code)]

use triage::{Decision, Identify, Record, Score, Transfer, TransferPolicy};

// ============================================================================
// Logging
// ============================================================================

/// Route `tracing` output through the test harness so it shows on failure.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Test Records
// ============================================================================

/// A record defined outside the library, taking part in dispatch by
/// implementing the capabilities itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Pallet {
    pub owner: String,
    pub weight: u32,
    pub hazardous: bool,
}

impl Record for Pallet {}

impl Identify for Pallet {
    fn identity(&self) -> &str {
        &self.owner
    }
}

impl Score for Pallet {
    fn score(&self) -> u32 {
        self.weight / 10
    }
}

impl Transfer for Pallet {
    fn transfer_decision(&self, policy: &TransferPolicy, destination: &str) -> Decision {
        if policy.is_restricted(destination) && self.hazardous {
            Decision::Denied
        } else {
            Decision::Granted
        }
    }
}

pub const DESTINATIONS: [&str; 5] = ["Africa", "America", "Asia", "africa", ""];

pub const FLAGS: [(bool, bool); 4] = [(false, false), (true, false), (false, true), (true, true)];
