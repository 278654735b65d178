//! In-memory reference pool
//!
//! `MemoryPool` is a small, complete [`CachePool`] used by the command line
//! simulator and by tests. It keeps committed items in a map guarded by a
//! `parking_lot` lock and deferred items in an insertion-ordered queue.
//! It has no expiry and no eviction: when a capacity is configured, saves of
//! new keys beyond it are refused with `Ok(false)`.

use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::{Mutex, RwLock};
use poolprof_core::{CacheItem, CacheKey, CachePool, PoolError, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory cache pool
#[derive(Debug)]
pub struct MemoryPool<V> {
    /// Committed items
    items: RwLock<HashMap<String, V>>,
    /// Items accepted by `save_deferred`, awaiting `commit`
    deferred: Mutex<IndexMap<String, V>>,
    /// Maximum number of committed plus queued items (`None` = unlimited)
    capacity: Option<usize>,
    /// Fault injection switch
    available: AtomicBool,
}

impl<V: Clone + Send + Sync + 'static> MemoryPool<V> {
    /// Create an unbounded pool
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
            deferred: Mutex::new(IndexMap::new()),
            capacity: None,
            available: AtomicBool::new(true),
        }
    }

    /// Create a pool holding at most `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::new()
        }
    }

    /// Make every subsequent call succeed (`true`) or fail with
    /// `PoolError::StoreUnavailable` (`false`)
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Relaxed);
    }

    /// Number of committed items
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of items waiting for `commit`
    pub fn deferred_len(&self) -> usize {
        self.deferred.lock().len()
    }

    fn ensure_available(&self) -> Result<()> {
        if self.available.load(Ordering::Relaxed) {
            Ok(())
        } else {
            Err(PoolError::unavailable("memory", "pool marked unavailable"))
        }
    }

    fn lookup(&self, key: &str) -> Option<V> {
        if let Some(value) = self.deferred.lock().get(key) {
            return Some(value.clone());
        }
        self.items.read().get(key).cloned()
    }

    fn fetch(&self, key: &str) -> Result<CacheItem<V>> {
        key.validate()?;
        Ok(match self.lookup(key) {
            Some(value) => CacheItem::hit(key, value),
            None => CacheItem::miss(key),
        })
    }

    fn remove(&self, key: &str) -> Result<bool> {
        key.validate()?;
        let queued = self.deferred.lock().shift_remove(key).is_some();
        let committed = self.items.write().remove(key).is_some();
        Ok(queued || committed)
    }

    fn has_room_for(&self, items: &HashMap<String, V>, key: &str, queued: usize) -> bool {
        match self.capacity {
            Some(capacity) => items.contains_key(key) || items.len() + queued < capacity,
            None => true,
        }
    }
}

impl<V: Clone + Send + Sync + 'static> Default for MemoryPool<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<V: Clone + Send + Sync + 'static> CachePool for MemoryPool<V> {
    type Value = V;

    async fn get_item(&self, key: &str) -> Result<CacheItem<V>> {
        self.ensure_available()?;
        self.fetch(key)
    }

    async fn get_items(&self, keys: &[String]) -> Result<IndexMap<String, CacheItem<V>>> {
        self.ensure_available()?;
        let mut items = IndexMap::with_capacity(keys.len());
        for key in keys {
            let item = self.fetch(key)?;
            items.insert(key.clone(), item);
        }
        Ok(items)
    }

    async fn has_item(&self, key: &str) -> Result<bool> {
        self.ensure_available()?;
        key.validate()?;
        Ok(self.lookup(key).is_some())
    }

    async fn delete_item(&self, key: &str) -> Result<bool> {
        self.ensure_available()?;
        self.remove(key)
    }

    async fn delete_items(&self, keys: &[String]) -> Result<IndexMap<String, bool>> {
        self.ensure_available()?;
        for key in keys {
            key.validate()?;
        }
        let mut results = IndexMap::with_capacity(keys.len());
        for key in keys {
            let removed = self.remove(key)?;
            // A repeated key reports whether any of its passes removed it
            *results.entry(key.clone()).or_insert(false) |= removed;
        }
        Ok(results)
    }

    async fn save(&self, item: CacheItem<V>) -> Result<bool> {
        self.ensure_available()?;
        item.key().validate()?;
        let (key, value) = item.into_parts();
        let Some(value) = value else {
            return Ok(false);
        };

        let mut items = self.items.write();
        if !self.has_room_for(&items, &key, 0) {
            return Ok(false);
        }
        self.deferred.lock().shift_remove(&key);
        items.insert(key, value);
        Ok(true)
    }

    async fn save_deferred(&self, item: CacheItem<V>) -> Result<bool> {
        self.ensure_available()?;
        item.key().validate()?;
        let (key, value) = item.into_parts();
        let Some(value) = value else {
            return Ok(false);
        };

        let items = self.items.read();
        let mut deferred = self.deferred.lock();
        let queued = if deferred.contains_key(&key) {
            deferred.len() - 1
        } else {
            deferred.len()
        };
        if !self.has_room_for(&items, &key, queued) {
            return Ok(false);
        }
        deferred.insert(key, value);
        Ok(true)
    }

    async fn commit(&self) -> Result<bool> {
        self.ensure_available()?;
        let mut items = self.items.write();
        let queued: Vec<(String, V)> = self.deferred.lock().drain(..).collect();

        let mut all_stored = true;
        for (key, value) in queued {
            if self.has_room_for(&items, &key, 0) {
                items.insert(key, value);
            } else {
                all_stored = false;
            }
        }
        Ok(all_stored)
    }

    async fn clear(&self) -> Result<bool> {
        self.ensure_available()?;
        self.items.write().clear();
        self.deferred.lock().clear();
        Ok(true)
    }
}
