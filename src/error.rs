//! Error types for named entity operations.

use thiserror::Error;

/// Result type alias for named entity operations
pub type Result<T> = std::result::Result<T, EntityError>;

/// Error type for named entity operations
///
/// Construction never fails, so the only failure is a name that differs from
/// what the caller expected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntityError {
    /// The entity's name is not the expected one
    #[error("Name mismatch: expected {expected:?}, found {actual:?}")]
    NameMismatch {
        /// Name the caller expected
        expected: String,
        /// Name the entity actually holds
        actual: String,
    },
}
