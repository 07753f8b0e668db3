//! Dispatch results.

use std::fmt;

/// The pair produced by scoring dispatch: an identity and a computed value.
///
/// The default value (`""`, `0`) is the defined fallback for inputs that
/// match no known variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Scored {
    /// The variant's identity field.
    pub identity: String,
    /// The variant's computed value.
    pub value: u32,
}

impl Scored {
    /// Create a new result.
    pub fn new(identity: impl Into<String>, value: u32) -> Self {
        Self {
            identity: identity.into(),
            value,
        }
    }

    /// The fallback result for unrecognized inputs.
    pub fn fallback() -> Self {
        Self::default()
    }

    /// Whether this is the fallback result.
    pub fn is_fallback(&self) -> bool {
        self.identity.is_empty() && self.value == 0
    }
}

impl From<Scored> for (String, u32) {
    fn from(scored: Scored) -> Self {
        (scored.identity, scored.value)
    }
}

/// Outcome of a transfer evaluation.
///
/// The rendered strings are fixed. Note that the two granted variants differ:
/// parcels answer `"Granted!"` while containers answer `"Granted"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Decision {
    /// Renders as `"Granted"`.
    Granted,
    /// Renders as `"Granted!"`.
    GrantedLoud,
    /// Renders as `"Denied!"`.
    Denied,
    /// Renders as `"Unknown Detected"`; the fallback for unrecognized cargo.
    #[default]
    Unknown,
}

impl Decision {
    /// The fixed string for this decision.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Decision::Granted => "Granted",
            Decision::GrantedLoud => "Granted!",
            Decision::Denied => "Denied!",
            Decision::Unknown => "Unknown Detected",
        }
    }

    /// Whether the transfer was refused.
    pub const fn is_denied(&self) -> bool {
        matches!(self, Decision::Denied)
    }

    /// Whether the transfer was admitted, with or without emphasis.
    pub const fn is_granted(&self) -> bool {
        matches!(self, Decision::Granted | Decision::GrantedLoud)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Decision {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
