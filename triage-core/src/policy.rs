//! Transfer policy configuration.

use crate::error::ConfigError;

/// The destination restricted by [`TransferPolicy::default`].
pub const DEFAULT_RESTRICTED_DESTINATION: &str = "Africa";

/// Which destination the transfer rules treat as restricted.
///
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPolicy {
    restricted_destination: String,
}

impl TransferPolicy {
    /// Start building a policy from the defaults.
    pub fn builder() -> TransferPolicyBuilder {
        TransferPolicyBuilder::default()
    }

    /// The restricted destination.
    pub fn restricted_destination(&self) -> &str {
        &self.restricted_destination
    }

    /// Whether `destination` is the restricted one.
    pub fn is_restricted(&self, destination: &str) -> bool {
        destination == self.restricted_destination
    }
}

impl Default for TransferPolicy {
    fn default() -> Self {
        Self {
            restricted_destination: DEFAULT_RESTRICTED_DESTINATION.to_string(),
        }
    }
}

/// Builder for [`TransferPolicy`].
#[derive(Debug, Clone)]
pub struct TransferPolicyBuilder {
    restricted_destination: String,
}

impl Default for TransferPolicyBuilder {
    fn default() -> Self {
        Self {
            restricted_destination: DEFAULT_RESTRICTED_DESTINATION.to_string(),
        }
    }
}

impl TransferPolicyBuilder {
    /// Set the restricted destination.
    pub fn restricted_destination(mut self, destination: impl Into<String>) -> Self {
        self.restricted_destination = destination.into();
        self
    }

    /// Validate and build the policy.
    pub fn build(self) -> Result<TransferPolicy, ConfigError> {
        if self.restricted_destination.trim().is_empty() {
            return Err(ConfigError::EmptyDestination);
        }
        Ok(TransferPolicy {
            restricted_destination: self.restricted_destination,
        })
    }
}
