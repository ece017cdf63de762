//! Error types for section bookkeeping.

use crate::section::State;

/// Result type alias for section operations.
pub type Result<T> = std::result::Result<T, SectionError>;

/// Errors surfaced by the section bookkeeping layer.
///
/// This layer has no I/O and no external failure sources: every variant
/// signals a programming error in the caller, surfaced immediately and never
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum SectionError {
    /// An operation was invoked that is inconsistent with the section's
    /// current configuration or state.
    #[error("contract violation in {operation}: {message}")]
    ContractViolation {
        operation: &'static str,
        message: String,
    },

    /// A position or count argument falls outside the valid bounds of the
    /// current row layout.
    #[error("index {index} out of range (length {length})")]
    OutOfRange { index: usize, length: usize },

    /// No section is registered under the given id.
    #[error("unknown section '{id}'")]
    UnknownSection { id: String },

    /// A section is already registered under the given id.
    #[error("section '{id}' is already registered")]
    DuplicateSection { id: String },
}

impl SectionError {
    /// Create a contract violation error.
    pub fn contract(operation: &'static str, message: impl Into<String>) -> Self {
        Self::ContractViolation {
            operation,
            message: message.into(),
        }
    }

    /// Create a contract violation for a content-row operation on a section
    /// that is not loaded.
    pub fn not_loaded(operation: &'static str, state: State) -> Self {
        Self::contract(
            operation,
            format!("section must be in state Loaded, but is {state:?}"),
        )
    }

    /// Create an out-of-range error.
    pub fn out_of_range(index: usize, length: usize) -> Self {
        Self::OutOfRange { index, length }
    }

    /// Create an unknown-section error.
    pub fn unknown_section(id: impl Into<String>) -> Self {
        Self::UnknownSection { id: id.into() }
    }

    /// Create a duplicate-section error.
    pub fn duplicate_section(id: impl Into<String>) -> Self {
        Self::DuplicateSection { id: id.into() }
    }

    /// Returns `true` if this error is a contract violation.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::ContractViolation { .. })
    }

    /// Returns `true` if this error is an out-of-range error.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SectionError::out_of_range(7, 3);
        assert_eq!(err.to_string(), "index 7 out of range (length 3)");

        let err = SectionError::unknown_section("comments");
        assert_eq!(err.to_string(), "unknown section 'comments'");
    }

    #[test]
    fn test_error_predicates() {
        let err = SectionError::not_loaded("notify_item_inserted", State::Loading);
        assert!(err.is_contract_violation());
        assert!(!err.is_out_of_range());
        assert!(err.to_string().contains("Loaded"));
    }
}
