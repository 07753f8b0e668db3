//! Runtime registry for evaluating transfers of cargo behind `&dyn Any`.

use super::TypeTable;
use crate::cargo::{Cargo, Container, Parcel};
use std::any::Any;
use triage_core::{Decision, Record, RegistryError, Transfer, TransferPolicy};

type TransferFn = fn(&dyn Any, &TransferPolicy, &str) -> Option<Decision>;

fn transfer_as<T: Record + Transfer>(
    record: &dyn Any,
    policy: &TransferPolicy,
    destination: &str,
) -> Option<Decision> {
    record
        .downcast_ref::<T>()
        .map(|record| record.transfer_decision(policy, destination))
}

/// A registry of cargo types whose transfers can be evaluated at runtime.
pub struct TransferRegistry {
    table: TypeTable<TransferFn>,
    policy: TransferPolicy,
}

impl TransferRegistry {
    /// Create a builder.
    pub fn builder() -> TransferRegistryBuilder {
        TransferRegistryBuilder::new()
    }

    /// A registry preloaded with [`Parcel`], [`Container`] and [`Cargo`],
    /// evaluated under `policy`.
    pub fn cargo(policy: TransferPolicy) -> Self {
        let table = TypeTable::new()
            .with::<Parcel>(transfer_as::<Parcel> as TransferFn)
            .with::<Container>(transfer_as::<Container> as TransferFn)
            .with::<Cargo>(transfer_as::<Cargo> as TransferFn);
        Self { table, policy }
    }

    /// Evaluate under `policy` from now on.
    pub fn with_policy(mut self, policy: TransferPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The policy decisions are made under.
    pub fn policy(&self) -> &TransferPolicy {
        &self.policy
    }

    /// Evaluate a transfer of a record of any type.
    ///
    /// Unregistered types yield [`Decision::Unknown`] (`"Unknown Detected"`).
    pub fn dispatch(&self, record: &dyn Any, destination: &str) -> Decision {
        match self.table.lookup(record) {
            Some(entry) => {
                let decision = (entry.run)(record, &self.policy, destination).unwrap_or_default();
                #[cfg(feature = "tracing")]
                {
                    if decision.is_denied() {
                        tracing::info!(record = entry.name, destination, "Transfer denied");
                    } else {
                        tracing::debug!(
                            record = entry.name,
                            destination,
                            %decision,
                            "Transfer evaluated"
                        );
                    }
                }
                decision
            }
            None => {
                #[cfg(feature = "tracing")]
                {
                    tracing::debug!(destination, "Unrecognized cargo");
                }
                Decision::Unknown
            }
        }
    }

    /// Whether `T` is registered.
    pub fn contains<T: Record>(&self) -> bool {
        self.table.contains::<T>()
    }

    /// Number of registered record types.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no record types are registered.
    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    /// Registered type names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.table.names()
    }
}

impl Default for TransferRegistry {
    fn default() -> Self {
        Self::cargo(TransferPolicy::default())
    }
}

/// Builder for constructing a [`TransferRegistry`].
pub struct TransferRegistryBuilder {
    table: TypeTable<TransferFn>,
    policy: TransferPolicy,
    error: Option<RegistryError>,
}

impl Default for TransferRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferRegistryBuilder {
    /// Create a new empty builder using the default policy.
    pub fn new() -> Self {
        Self {
            table: TypeTable::new(),
            policy: TransferPolicy::default(),
            error: None,
        }
    }

    /// Use `policy` instead of the default.
    pub fn policy(mut self, policy: TransferPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Register a record type.
    pub fn register<T: Record + Transfer>(mut self) -> Self {
        if self.error.is_none() {
            self.error = self.table.insert::<T>(transfer_as::<T> as TransferFn).err();
        }
        self
    }

    /// Build the registry, reporting the first duplicate registration.
    pub fn build(self) -> Result<TransferRegistry, RegistryError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(TransferRegistry {
                table: self.table,
                policy: self.policy,
            }),
        }
    }
}
