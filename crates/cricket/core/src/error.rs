//! Common error infrastructure for cricket-core.
//!
//! Scoring rejections are deliberately quiet: a delivery that the rules do
//! not allow (after the match ends, a wicket on a free hit) leaves the state
//! untouched and reports why. Domain-specific errors live next to the code
//! that raises them; this module holds the shared classification.

/// Severity level of an error, used for categorization and logging.
///
/// - **Ignored**: the input is legal UI traffic that the rules turn into a no-op
/// - **Validation**: the input itself is malformed (out-of-domain run value)
/// - **Internal**: a state invariant broke, indicating a bug
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The rules make this event a no-op.
    ///
    /// Examples: scoring after the match ended, wicket during a free hit
    Ignored,

    /// Invalid input that should be corrected by the caller.
    ///
    /// Examples: seven runs off one ball, an empty lineup
    Validation,

    /// Unexpected state inconsistency. The transition is rolled back.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ignored => "ignored",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all cricket-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by how the caller should react, not by impact
pub trait ScoringError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Stable across releases; used in logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
