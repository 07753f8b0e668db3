//! Dynamic dispatch support.
//!
//! The closed sets dispatch statically and never reach a default branch.
//! This module is the escape hatch for values whose concrete type is only
//! known at runtime (`&dyn Any`, plugin payloads, heterogeneous queues).
//! Lookups that match no registered record type resolve to a defined
//! fallback instead of failing.

pub mod score;
pub mod transfer;

pub use score::{ScoreRegistry, ScoreRegistryBuilder};
pub use transfer::{TransferRegistry, TransferRegistryBuilder};

use std::{
    any::{Any, TypeId},
    collections::HashMap,
};
use triage_core::RegistryError;

/// A registered record type and its dispatch function.
struct Entry<F> {
    name: &'static str,
    run: F,
}

/// Maps concrete record types to dispatch functions.
struct TypeTable<F> {
    entries: HashMap<TypeId, Entry<F>>,
}

impl<F> TypeTable<F> {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    fn insert<T: Any>(&mut self, run: F) -> Result<(), RegistryError> {
        let name = std::any::type_name::<T>();
        if self.entries.contains_key(&TypeId::of::<T>()) {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        self.entries.insert(TypeId::of::<T>(), Entry { name, run });
        Ok(())
    }

    /// Insert a type known to be absent, for the preloaded tables.
    fn with<T: Any>(mut self, run: F) -> Self {
        debug_assert!(!self.contains::<T>());
        self.entries.insert(
            TypeId::of::<T>(),
            Entry {
                name: std::any::type_name::<T>(),
                run,
            },
        );
        self
    }

    fn lookup(&self, record: &dyn Any) -> Option<&Entry<F>> {
        self.entries.get(&record.type_id())
    }

    fn contains<T: Any>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.values().map(|entry| entry.name).collect();
        names.sort_unstable();
        names
    }
}
