//! Common error infrastructure for chronicles-core.
//!
//! This module provides the shared classification used by every error type in
//! the crate. Domain-specific errors (e.g. `ProgressionError`, `QuestError`) are
//! defined in their respective modules alongside the rules they enforce.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each component has its own error enum with specific variants
//! - **Fail Before Mutating**: Every error is raised before any state changes
//! - **Severity Classification**: Errors are categorized so the calling layer can
//!   decide how to present them

/// Severity level of an error, used for categorization and presentation.
///
/// - **Recoverable**: The request is fine, the character's current state is not
///   (dead, broke, inventory full). Retrying after a state change can succeed.
/// - **Validation**: The request itself is wrong (unknown quest, wrong item type).
/// - **Corrupted**: Content or save data violates an integrity rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - may succeed once the character's state changes.
    ///
    /// Examples: character is dead, not enough gold
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: quest not found, item is not a weapon
    Validation,

    /// Corrupted data - content or save records break an invariant.
    ///
    /// Examples: cyclic prerequisite chain, health above max_health on load
    Corrupted,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Corrupted => "corrupted",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error points at broken data rather than a bad request.
    pub const fn is_corruption(&self) -> bool {
        matches!(self, Self::Corrupted)
    }
}

/// Common trait for all chronicles-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, logging, and testing.
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
