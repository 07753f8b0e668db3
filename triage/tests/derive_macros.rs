#![cfg(feature = "macros")]

use triage::{Identify, Record, Score, Scored, dynamic::ScoreRegistry};

// ============================================================================
// Test: derive(Record) + derive(Identify)
// ============================================================================

#[derive(Clone, Debug, triage::Record, triage::Identify)]
struct Invoice {
    #[identity]
    customer: String,
    total_cents: u32,
}

impl Score for Invoice {
    fn score(&self) -> u32 {
        self.total_cents / 100
    }
}

#[derive(Clone, Debug, triage::Record, triage::Identify)]
struct Tag(u8, #[identity] &'static str);

#[test]
fn test_derive_record() {
    fn assert_record<T: Record>() {}
    assert_record::<Invoice>();
    assert_record::<Tag>();
}

#[test]
fn test_derive_identify_named_field() {
    let invoice = Invoice {
        customer: "acme".to_string(),
        total_cents: 1250,
    };
    assert_eq!(invoice.identity(), "acme");
}

#[test]
fn test_derive_identify_tuple_field() {
    let tag = Tag(1, "urgent");
    assert_eq!(tag.identity(), "urgent");
    assert_eq!(tag.0, 1);
}

#[test]
fn test_derived_record_dispatches() {
    let registry = ScoreRegistry::builder()
        .register::<Invoice>()
        .build()
        .unwrap();
    let invoice = Invoice {
        customer: "acme".to_string(),
        total_cents: 1250,
    };
    assert_eq!(registry.dispatch(&invoice), Scored::new("acme", 12));
}
