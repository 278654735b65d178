//! Builder methods for creating errors with context

use super::types::PoolError;

impl PoolError {
    /// Create an invalid key error
    #[must_use]
    pub fn invalid_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        PoolError::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a store unavailable error
    #[must_use]
    pub fn unavailable(pool: impl Into<String>, reason: impl Into<String>) -> Self {
        PoolError::StoreUnavailable {
            pool: pool.into(),
            reason: reason.into(),
        }
    }

    /// Create a backend failure without an underlying cause
    #[must_use]
    pub fn backend(operation: &'static str, message: impl Into<String>) -> Self {
        PoolError::Backend {
            operation,
            message: message.into(),
            source: None,
        }
    }

    /// Create a backend failure wrapping the error that caused it
    #[must_use]
    pub fn backend_with_source(
        operation: &'static str,
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        PoolError::Backend {
            operation,
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        PoolError::Configuration {
            message: message.into(),
        }
    }

    /// Create a report export error
    #[must_use]
    pub fn export(format: &'static str, message: impl Into<String>) -> Self {
        PoolError::Export {
            format,
            message: message.into(),
        }
    }
}
