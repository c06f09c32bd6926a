//! Error types for the cache
//!
//! Store operations are total; these variants only cover caller contract
//! violations and setup failures.

use std::time::Duration;

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Cleanup scheduler interval must be positive
    #[error("Invalid cleanup interval: {0:?}")]
    InvalidInterval(Duration),

    /// Cleanup scheduler started outside a tokio runtime
    #[error("No tokio runtime available to run the cleanup scheduler")]
    NoRuntime,

    /// Process-wide default cache was already installed
    #[error("Default cache already initialized")]
    AlreadyInitialized,
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CacheError::InvalidInterval(Duration::ZERO).to_string(),
            "Invalid cleanup interval: 0ns"
        );
        assert_eq!(
            CacheError::AlreadyInitialized.to_string(),
            "Default cache already initialized"
        );
    }
}
