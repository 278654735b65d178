//! Cache key validation

use crate::constants::{MAX_KEY_LENGTH, RESERVED_KEY_CHARACTERS};
use crate::errors::{PoolError, Result};

/// Cache key validation
///
/// Validation belongs to the pool that stores the key. Decorators pass keys
/// through untouched and let the wrapped pool decide.
pub trait CacheKey: AsRef<str> {
    /// Validate that this is a valid cache key
    fn validate(&self) -> Result<()> {
        let key = self.as_ref();

        if key.is_empty() {
            return Err(PoolError::invalid_key(key, "key cannot be empty"));
        }

        if key.len() > MAX_KEY_LENGTH {
            let shortened: String = key.chars().take(50).collect();
            return Err(PoolError::invalid_key(
                format!("{shortened}..."),
                format!("key exceeds maximum length of {MAX_KEY_LENGTH} bytes"),
            ));
        }

        if key.contains('\0') {
            return Err(PoolError::invalid_key(key, "key contains null bytes"));
        }

        if let Some(reserved) = key.chars().find(|c| RESERVED_KEY_CHARACTERS.contains(*c)) {
            return Err(PoolError::invalid_key(
                key,
                format!("key contains reserved character '{reserved}'"),
            ));
        }

        Ok(())
    }
}

impl CacheKey for String {}
impl CacheKey for &str {}
impl CacheKey for str {}
impl CacheKey for std::borrow::Cow<'_, str> {}
