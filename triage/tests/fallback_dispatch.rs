use std::any::Any;
use triage::{
    Decision, RegistryError, Scored, Triage, TriageError,
    cargo::Parcel,
    dynamic::{ScoreRegistry, TransferRegistry},
    notification::{DirectMessage, SystemAlert},
    testing::{UnrecognizedRecord, assert_idempotent},
};

mod common;
use common::{Pallet, init_logging};

#[test]
fn test_unrecognized_record_scores_fallback() {
    init_logging();
    let triage = Triage::new();
    let scored = triage.identify_any(&UnrecognizedRecord::new("stray"));
    assert_eq!(scored, Scored::new("", 0));
    assert!(scored.is_fallback());
}

#[test]
fn test_unrecognized_record_transfer_is_unknown() {
    let triage = Triage::new();
    let decision = triage.transfer_any(&UnrecognizedRecord::default(), "Africa");
    assert_eq!(decision.as_str(), "Unknown Detected");
}

#[test]
fn test_heterogeneous_queue() {
    init_logging();
    let triage = Triage::new();
    let queue: Vec<Box<dyn Any>> = vec![
        Box::new(DirectMessage::new("ana", "x", 2, true)),
        Box::new(SystemAlert::new("E3", "y")),
        Box::new(UnrecognizedRecord::new("z")),
        Box::new(Parcel::new(true, true)),
    ];

    let scores: Vec<_> = queue
        .iter()
        .map(|item| triage.identify_any(&**item).value)
        .collect();
    assert_eq!(scores, vec![50, 100, 0, 0]);

    let decisions: Vec<_> = queue
        .iter()
        .map(|item| triage.transfer_any(&**item, "Africa"))
        .collect();
    assert_eq!(
        decisions,
        vec![
            Decision::Unknown,
            Decision::Unknown,
            Decision::Unknown,
            Decision::Denied
        ]
    );
}

#[test]
fn test_external_record_registers_alongside_builtins() {
    let scores = ScoreRegistry::builder()
        .register::<DirectMessage>()
        .register::<Pallet>()
        .build()
        .unwrap();
    let transfers = TransferRegistry::builder()
        .register::<Pallet>()
        .build()
        .unwrap();
    let triage = Triage::new().with_registries(scores, transfers);

    let pallet = Pallet {
        owner: "warehouse-7".to_string(),
        weight: 420,
        hazardous: true,
    };
    assert_eq!(triage.identify_any(&pallet), Scored::new("warehouse-7", 42));
    assert_eq!(triage.transfer_any(&pallet, "Africa"), Decision::Denied);
    assert_eq!(triage.transfer_any(&pallet, "Asia"), Decision::Granted);
    assert_eq!(triage.identify_any(&SystemAlert::new("E1", "x")), Scored::fallback());
}

#[test]
fn test_duplicate_registration_surfaces_as_triage_error() {
    fn build() -> Result<ScoreRegistry, TriageError> {
        let registry = ScoreRegistry::builder()
            .register::<Pallet>()
            .register::<Pallet>()
            .build()?;
        Ok(registry)
    }

    let err = build().err().unwrap();
    assert!(matches!(
        err,
        TriageError::Registry(RegistryError::AlreadyRegistered(_))
    ));
    assert!(err.to_string().starts_with("registry error: record type already registered"));
}

#[test]
fn test_fallback_is_idempotent() {
    let triage = Triage::new();
    let stray = UnrecognizedRecord::new("again");
    assert_idempotent(|| triage.identify_any(&stray));
    assert_idempotent(|| triage.transfer_any(&stray, "Africa"));
}
