//! Registry error types

use thiserror::Error;

/// Errors returned by fleet registry operations.
///
/// A structurally invalid input is rejected before any state is touched; a
/// structurally valid request that violates a domain invariant is rejected
/// without partial mutation. Neither is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Caller supplied a structurally invalid input (empty name or id).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Request violates a domain invariant given current stored state.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
