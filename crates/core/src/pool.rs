//! The cache pool contract
//!
//! This module defines the interface every instrumented store implements.
//! The profiling decorator consumes it and also implements it, so a decorated
//! pool can be used anywhere an undecorated one can.

use crate::errors::Result;
use crate::item::CacheItem;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::Arc;

/// Core trait for cache pool operations
///
/// Boolean results report whether the operation took effect. `Ok(false)` is a
/// normal outcome (deleting an unknown key, a full pool refusing a save) and
/// is distinct from `Err`, which signals a store-level failure.
#[async_trait]
pub trait CachePool: Send + Sync {
    /// Type of the values held by the pool
    type Value: Send + Sync + 'static;

    /// Fetch the item for `key`
    ///
    /// A missing key yields an item whose `is_hit()` is false rather than an
    /// error.
    async fn get_item(&self, key: &str) -> Result<CacheItem<Self::Value>>;

    /// Fetch items for several keys, keyed and ordered as requested
    async fn get_items(&self, keys: &[String]) -> Result<IndexMap<String, CacheItem<Self::Value>>>;

    /// Check whether the pool holds a value for `key`
    async fn has_item(&self, key: &str) -> Result<bool>;

    /// Remove `key`
    ///
    /// Returns `Ok(true)` if the value was removed.
    async fn delete_item(&self, key: &str) -> Result<bool>;

    /// Remove several keys, reporting success per key
    async fn delete_items(&self, keys: &[String]) -> Result<IndexMap<String, bool>>;

    /// Persist an item immediately
    async fn save(&self, item: CacheItem<Self::Value>) -> Result<bool>;

    /// Queue an item to be persisted by a later `commit`
    async fn save_deferred(&self, item: CacheItem<Self::Value>) -> Result<bool>;

    /// Persist every queued item
    async fn commit(&self) -> Result<bool>;

    /// Remove every item from the pool
    ///
    /// This operation should be used with caution in production.
    async fn clear(&self) -> Result<bool>;
}

#[async_trait]
impl<P: CachePool> CachePool for Arc<P> {
    type Value = P::Value;

    async fn get_item(&self, key: &str) -> Result<CacheItem<Self::Value>> {
        (**self).get_item(key).await
    }

    async fn get_items(&self, keys: &[String]) -> Result<IndexMap<String, CacheItem<Self::Value>>> {
        (**self).get_items(keys).await
    }

    async fn has_item(&self, key: &str) -> Result<bool> {
        (**self).has_item(key).await
    }

    async fn delete_item(&self, key: &str) -> Result<bool> {
        (**self).delete_item(key).await
    }

    async fn delete_items(&self, keys: &[String]) -> Result<IndexMap<String, bool>> {
        (**self).delete_items(keys).await
    }

    async fn save(&self, item: CacheItem<Self::Value>) -> Result<bool> {
        (**self).save(item).await
    }

    async fn save_deferred(&self, item: CacheItem<Self::Value>) -> Result<bool> {
        (**self).save_deferred(item).await
    }

    async fn commit(&self) -> Result<bool> {
        (**self).commit().await
    }

    async fn clear(&self) -> Result<bool> {
        (**self).clear().await
    }
}
