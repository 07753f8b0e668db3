//! Runtime registry for scoring records behind `&dyn Any`.

use super::TypeTable;
use crate::notification::{DirectMessage, GroupMessage, Notification, SystemAlert};
use std::any::Any;
use triage_core::{Behavior, Record, RegistryError, Scored};

type ScoreFn = fn(&dyn Any) -> Option<Scored>;

fn score_as<T: Record + Behavior>(record: &dyn Any) -> Option<Scored> {
    record
        .downcast_ref::<T>()
        .map(|record| record.compute_and_identify())
}

/// A registry of record types that can be scored at runtime.
pub struct ScoreRegistry {
    table: TypeTable<ScoreFn>,
}

impl ScoreRegistry {
    /// Create a builder.
    pub fn builder() -> ScoreRegistryBuilder {
        ScoreRegistryBuilder::new()
    }

    /// A registry preloaded with every notification variant and
    /// [`Notification`] itself.
    pub fn notifications() -> Self {
        let table = TypeTable::new()
            .with::<DirectMessage>(score_as::<DirectMessage> as ScoreFn)
            .with::<GroupMessage>(score_as::<GroupMessage> as ScoreFn)
            .with::<SystemAlert>(score_as::<SystemAlert> as ScoreFn)
            .with::<Notification>(score_as::<Notification> as ScoreFn);
        Self { table }
    }

    /// Score a record of any type.
    ///
    /// Unregistered types yield [`Scored::fallback`] (`""`, `0`).
    pub fn dispatch(&self, record: &dyn Any) -> Scored {
        match self.table.lookup(record) {
            Some(entry) => {
                let scored = (entry.run)(record).unwrap_or_default();
                #[cfg(feature = "tracing")]
                {
                    tracing::debug!(
                        record = entry.name,
                        identity = %scored.identity,
                        value = scored.value,
                        "Scored record"
                    );
                }
                scored
            }
            None => {
                #[cfg(feature = "tracing")]
                {
                    tracing::debug!("Unrecognized record, using fallback score");
                }
                Scored::fallback()
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

impl Default for ScoreRegistry {
    fn default() -> Self {
        Self::notifications()
    }
}

/// Builder for constructing a [`ScoreRegistry`].
pub struct ScoreRegistryBuilder {
    table: TypeTable<ScoreFn>,
    error: Option<RegistryError>,
}

impl Default for ScoreRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreRegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            table: TypeTable::new(),
            error: None,
        }
    }

    /// Register a record type.
    pub fn register<T: Record + Behavior>(mut self) -> Self {
        if self.error.is_none() {
            self.error = self.table.insert::<T>(score_as::<T> as ScoreFn).err();
        }
        self
    }

    /// Build the registry, reporting the first duplicate registration.
    pub fn build(self) -> Result<ScoreRegistry, RegistryError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(ScoreRegistry { table: self.table }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_known_variants() {
        let registry = ScoreRegistry::notifications();
        let direct = DirectMessage::new("ana", "hey", 4, false);
        let alert = SystemAlert::new("E1", "down");
        assert_eq!(registry.dispatch(&direct), Scored::new("ana", 4));
        assert_eq!(registry.dispatch(&alert), Scored::new("E1", 100));
    }

    #[test]
    fn test_dispatch_closed_set_value() {
        let registry = ScoreRegistry::notifications();
        let notification = Notification::from(GroupMessage::new("ops", "x", 9));
        assert_eq!(registry.dispatch(&notification), Scored::new("ops", 9));
    }

    #[test]
    fn test_dispatch_unknown_type_falls_back() {
        let registry = ScoreRegistry::notifications();
        assert_eq!(registry.dispatch(&42_u8), Scored::fallback());
        assert_eq!(registry.dispatch(&"text"), Scored::fallback());
    }

    #[test]
    fn test_boxed_any_uses_concrete_type() {
        let registry = ScoreRegistry::notifications();
        let boxed: Box<dyn Any> = Box::new(SystemAlert::new("E9", "x"));
        assert_eq!(registry.dispatch(&*boxed), Scored::new("E9", 100));
    }

    #[test]
    fn test_builder_rejects_duplicates() {
        let result = ScoreRegistry::builder()
            .register::<DirectMessage>()
            .register::<DirectMessage>()
            .build();
        assert!(matches!(result, Err(RegistryError::AlreadyRegistered(_))));
    }

    #[test]
    fn test_builder_registers_subset() {
        let registry = ScoreRegistry::builder()
            .register::<GroupMessage>()
            .build()
            .unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains::<GroupMessage>());
        assert!(!registry.contains::<DirectMessage>());
        assert_eq!(
            registry.dispatch(&DirectMessage::new("ana", "hey", 4, true)),
            Scored::fallback()
        );
    }

    #[test]
    fn test_preloaded_notifications() {
        let registry = ScoreRegistry::notifications();
        assert_eq!(registry.len(), 4);
        assert!(registry.contains::<DirectMessage>());
        assert!(registry.contains::<GroupMessage>());
        assert!(registry.contains::<SystemAlert>());
        assert!(registry.contains::<Notification>());
    }

    #[test]
    fn test_empty_registry() {
        let registry = ScoreRegistry::builder().build().unwrap();
        assert!(registry.is_empty());
        assert!(registry.names().is_empty());
    }
}
