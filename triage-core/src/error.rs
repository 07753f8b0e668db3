//! Error types for Triage.
//!
//! Dispatch is total and never returns an error. The types here cover the
//! construction seams:
//!
//! - [`TriageError`] - Top-level error type
//! - [`ConfigError`] - Invalid policy configuration
//! - [`RegistryError`] - Errors while building a registry

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Triage operations.
#[derive(Error, Debug)]
pub enum TriageError {
    /// The policy configuration was invalid.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// A registry could not be built.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors raised while validating configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The restricted destination was empty or blank.
    #[error("restricted destination must not be empty")]
    EmptyDestination,
}

/// Errors raised while building a registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The record type was registered twice.
    #[error("record type already registered: {0}")]
    AlreadyRegistered(&'static str),
}

impl From<BoxError> for TriageError {
    fn from(err: BoxError) -> Self {
        TriageError::Custom(err)
    }
}
