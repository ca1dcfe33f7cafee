//! Common error infrastructure for shipyard-core.
//!
//! This module provides shared types and traits used across all error types in shipyard-core.
//! Domain-specific errors (e.g., `CatalogError`, `DesignEditError`) are defined in their
//! respective modules alongside the operations that produce them.
//!
//! Expected domain outcomes of compilation (missing component, slot overfilled,
//! tech too low) are never errors in this sense: they are reported as messages
//! on [`crate::CompiledShipStats`]. The types here cover the boundaries that
//! can refuse outright: catalog construction and design mutation.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: Temporary conditions that may succeed with a different request
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors (e.g. an unusable catalog)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the caller can retry with an alternative request.
    ///
    /// Examples: slot already full, slot holds a different component
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown slot id, category not accepted by the slot
    Validation,

    /// Internal error - unexpected inconsistency between design and catalog.
    Internal,

    /// Fatal error - catalog data cannot be used at all.
    ///
    /// Examples: duplicate ids, placeholder entries
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates broken input data rather than a bad request.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all shipyard-core errors.
///
/// This trait provides a uniform interface for error classification across
/// all error types in the crate.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait ShipyardError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, metrics, and testing.
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
