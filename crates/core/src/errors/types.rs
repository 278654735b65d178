//! Core error type definitions

/// Result type alias for cache pool operations
pub type Result<T> = std::result::Result<T, PoolError>;

/// Re-export PoolError as Error for convenience
pub use PoolError as Error;

/// Failures raised by a cache pool.
///
/// A `false` return from a pool operation is not an error: it means the
/// operation did not take effect (for example deleting a key that was never
/// stored). Only store-level failures are represented here.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum PoolError {
    /// The key is not acceptable to the pool
    #[error("invalid cache key '{key}': {reason}")]
    #[diagnostic(
        code(poolprof::invalid_key),
        help("keys must be non-empty, at most 1024 bytes, and free of {{}}()/\\@: and NUL")
    )]
    InvalidKey { key: String, reason: String },

    /// The backing store cannot serve requests right now
    #[error("cache pool '{pool}' is unavailable: {reason}")]
    #[diagnostic(code(poolprof::store_unavailable), help("retry once the store is reachable"))]
    StoreUnavailable { pool: String, reason: String },

    /// The backing store failed while executing an operation
    #[error("cache pool operation '{operation}' failed: {message}")]
    #[diagnostic(code(poolprof::backend))]
    Backend {
        operation: &'static str,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid profiler or pool configuration
    #[error("configuration error: {message}")]
    #[diagnostic(code(poolprof::configuration))]
    Configuration { message: String },

    /// A report could not be rendered in the requested format
    #[error("failed to export {format} report: {message}")]
    #[diagnostic(code(poolprof::export))]
    Export {
        format: &'static str,
        message: String,
    },
}
