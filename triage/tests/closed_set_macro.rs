//! Tests for declaring closed sets outside the library.

use triage::{Behavior, Decision, Identify, Score, Transfer, closed_set, notification::SystemAlert};

mod common;
use common::Pallet;

closed_set! {
    /// Things a warehouse can rank.
    #[derive(Clone, Debug)]
    pub enum Inbound: Behavior {
        Pallet(Pallet),
        Alert(SystemAlert),
    }
}

closed_set! {
    /// Things a warehouse can ship.
    #[derive(Clone, Debug)]
    pub enum Outbound: Transfer {
        Pallet(Pallet),
    }
}

fn pallet(hazardous: bool) -> Pallet {
    Pallet {
        owner: "dock-2".to_string(),
        weight: 75,
        hazardous,
    }
}

#[test]
fn test_closed_set_delegates_behavior() {
    let inbound: Inbound = pallet(false).into();
    assert_eq!(inbound.kind(), "Pallet");
    assert_eq!(inbound.identity(), "dock-2");
    assert_eq!(inbound.score(), 7);

    let alert = Inbound::from(SystemAlert::new("FIRE", "evacuate"));
    assert_eq!(alert.kind(), "Alert");
    assert_eq!(alert.compute_and_identify().value, 100);
}

#[test]
fn test_closed_set_delegates_transfer() {
    let outbound = Outbound::from(pallet(true));
    assert_eq!(outbound.evaluate_transfer("Africa"), Decision::Denied);
    assert_eq!(outbound.evaluate_transfer("America"), Decision::Granted);
}

#[test]
fn test_closed_set_registers_dynamically() {
    let registry = triage::dynamic::ScoreRegistry::builder()
        .register::<Inbound>()
        .build()
        .unwrap();
    let inbound = Inbound::from(pallet(false));
    assert_eq!(registry.dispatch(&inbound).identity, "dock-2");
}
