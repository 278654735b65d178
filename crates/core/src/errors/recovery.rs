//! Recovery classification for pool errors

use super::types::PoolError;

impl PoolError {
    /// Check if this error is transient and the operation can be retried
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::StoreUnavailable { .. } | Self::Backend { .. })
    }

    /// Check if this error was caused by the caller's input
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidKey { .. } | Self::Configuration { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(PoolError::unavailable("main", "offline").is_transient());
        assert!(PoolError::backend("get_item", "socket closed").is_transient());
        assert!(!PoolError::invalid_key("", "empty").is_transient());
        assert!(!PoolError::configuration("bad").is_transient());
    }

    #[test]
    fn test_caller_error_classification() {
        assert!(PoolError::invalid_key("a:b", "reserved character").is_caller_error());
        assert!(!PoolError::unavailable("main", "offline").is_caller_error());
    }

    #[test]
    fn test_display_includes_context() {
        let err = PoolError::unavailable("sessions", "connection refused");
        assert_eq!(
            err.to_string(),
            "cache pool 'sessions' is unavailable: connection refused"
        );

        let err = PoolError::invalid_key("a{b", "contains reserved character '{'");
        assert_eq!(
            err.to_string(),
            "invalid cache key 'a{b': contains reserved character '{'"
        );
    }

    #[test]
    fn test_backend_source_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = PoolError::backend_with_source("save", "write failed", io);
        let source = std::error::Error::source(&err);
        assert!(source.is_some());
        assert_eq!(source.map(|s| s.to_string()), Some("pipe closed".to_string()));
    }
}
