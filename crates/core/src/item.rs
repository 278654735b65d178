//! Cache items handed out by and given to a cache pool

use serde::{Deserialize, Serialize};

/// A keyed value as seen by a cache pool.
///
/// Items returned from a lookup carry a hit flag telling the caller whether
/// the pool actually held a value for the key. Items built by the caller for
/// a save are never hits until a pool returns them from a later lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheItem<V> {
    key: String,
    value: Option<V>,
    hit: bool,
}

impl<V> CacheItem<V> {
    /// Create a fresh item for `key` with no value
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
            hit: false,
        }
    }

    /// Create an item representing a successful lookup
    pub fn hit(key: impl Into<String>, value: V) -> Self {
        Self {
            key: key.into(),
            value: Some(value),
            hit: true,
        }
    }

    /// Create an item representing a failed lookup
    pub fn miss(key: impl Into<String>) -> Self {
        Self::new(key)
    }

    /// Set the value to be stored, keeping the key
    #[must_use]
    pub fn set(mut self, value: V) -> Self {
        self.value = Some(value);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value, if the item holds one
    pub fn get(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Whether the lookup that produced this item found a stored value
    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub fn into_value(self) -> Option<V> {
        self.value
    }

    /// Split the item into its key and value
    pub fn into_parts(self) -> (String, Option<V>) {
        (self.key, self.value)
    }
}
