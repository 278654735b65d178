//! Profiled pool implementation
//!
//! `ProfiledPool` wraps any [`CachePool`] and counts how it is used: accesses,
//! misses, deletions, saves and full clears. Every call is delegated to the
//! wrapped pool exactly once and its result is returned unchanged. Counting
//! happens only after the wrapped pool answers, so a call that fails with an
//! error is never counted.

use crate::config::{ConfigSource, ProfilerConfig};
use crate::metrics::{ProfileCounters, ProfileEvent, ProfileSummary};
use crate::report;
use async_trait::async_trait;
use indexmap::IndexMap;
use poolprof_core::{CacheItem, CachePool, PoolError, Result};
use std::fmt;
use tracing::{debug, info, warn, Instrument, Span};

/// Cache pool wrapper that records usage statistics
pub struct ProfiledPool<P: CachePool> {
    /// Underlying pool implementation
    pool: P,
    /// Live event counters
    counters: ProfileCounters,
    /// Profiler configuration
    config: ProfilerConfig,
}

impl<P: CachePool> ProfiledPool<P> {
    /// Wrap `pool` with the given configuration
    pub fn new(pool: P, config: ProfilerConfig) -> Self {
        Self {
            pool,
            counters: ProfileCounters::new(),
            config,
        }
    }

    /// Wrap `pool` using configuration loaded from the environment
    pub fn from_env(pool: P) -> Result<Self> {
        let config = ProfilerConfig::load()?;
        Ok(Self::new(pool, config))
    }

    /// Name of the pool as it appears in logs and reports
    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &ProfilerConfig {
        &self.config
    }

    /// The wrapped pool
    pub fn inner(&self) -> &P {
        &self.pool
    }

    /// Unwrap, discarding the counters
    pub fn into_inner(self) -> P {
        self.pool
    }

    /// Handle to the live counters
    pub fn counters(&self) -> &ProfileCounters {
        &self.counters
    }

    /// Copy of the current counts
    pub fn summary(&self) -> ProfileSummary {
        self.counters.snapshot()
    }

    /// Set every count back to zero
    ///
    /// The wrapped pool is not touched.
    pub fn reset_summary(&self) {
        self.counters.reset();
        debug!(pool = %self.config.name, "Profile summary reset");
    }

    /// Return the current counts and reset them in one step
    pub fn take_summary(&self) -> ProfileSummary {
        let summary = self.counters.take();
        debug!(pool = %self.config.name, %summary, "Profile summary taken");
        summary
    }

    /// Render this pool's counts as an HTML fragment
    pub fn report_html(&self) -> String {
        report::pool_html(&self.config.name, &self.summary())
    }

    /// Render this pool's counts as a single line of text
    pub fn report_text(&self) -> String {
        format!("{}: {}", self.config.name, self.summary())
    }

    fn operation_span(&self, operation: &'static str, key: &str) -> Span {
        if self.config.trace_operations {
            tracing::info_span!(
                "cache_operation",
                pool = %self.config.name,
                operation = operation,
                key = key
            )
        } else {
            Span::none()
        }
    }

    fn record_access(&self, item: &CacheItem<P::Value>) {
        self.counters.record(ProfileEvent::Accessed);
        if !item.is_hit() {
            self.counters.record(ProfileEvent::Missed);
            debug!(pool = %self.config.name, key = item.key(), "Cache miss");
        }
    }

    fn record_outcome(&self, operation: &'static str, event: ProfileEvent, took_effect: bool) {
        if took_effect {
            self.counters.record(event);
        } else {
            debug!(
                pool = %self.config.name,
                operation,
                "Operation did not take effect; not counted"
            );
        }
    }

    fn record_failure(&self, operation: &'static str, error: &PoolError) {
        warn!(
            pool = %self.config.name,
            operation,
            error = %error,
            "Cache pool operation failed; not counted"
        );
    }
}

impl<P: CachePool> fmt::Debug for ProfiledPool<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfiledPool")
            .field("name", &self.config.name)
            .field("summary", &self.summary())
            .finish()
    }
}

#[async_trait]
impl<P: CachePool> CachePool for ProfiledPool<P> {
    type Value = P::Value;

    /// Counts one access, plus one miss if the returned item is not a hit
    async fn get_item(&self, key: &str) -> Result<CacheItem<Self::Value>> {
        let span = self.operation_span("get_item", key);
        async {
            match self.pool.get_item(key).await {
                Ok(item) => {
                    self.record_access(&item);
                    Ok(item)
                }
                Err(e) => {
                    self.record_failure("get_item", &e);
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Counts every returned item as `get_item` would
    async fn get_items(&self, keys: &[String]) -> Result<IndexMap<String, CacheItem<Self::Value>>> {
        let span = self.operation_span("get_items", "*");
        async {
            match self.pool.get_items(keys).await {
                Ok(items) => {
                    for item in items.values() {
                        self.record_access(item);
                    }
                    Ok(items)
                }
                Err(e) => {
                    self.record_failure("get_items", &e);
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Existence probes are not accesses and are never counted
    async fn has_item(&self, key: &str) -> Result<bool> {
        let span = self.operation_span("has_item", key);
        self.pool.has_item(key).instrument(span).await
    }

    /// Counts a deletion when the wrapped pool reports success
    async fn delete_item(&self, key: &str) -> Result<bool> {
        let span = self.operation_span("delete_item", key);
        async {
            match self.pool.delete_item(key).await {
                Ok(deleted) => {
                    self.record_outcome("delete_item", ProfileEvent::Deleted, deleted);
                    Ok(deleted)
                }
                Err(e) => {
                    self.record_failure("delete_item", &e);
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Counts one deletion per key the wrapped pool reports as deleted
    async fn delete_items(&self, keys: &[String]) -> Result<IndexMap<String, bool>> {
        let span = self.operation_span("delete_items", "*");
        async {
            match self.pool.delete_items(keys).await {
                Ok(results) => {
                    let deleted = results.values().filter(|deleted| **deleted).count();
                    self.counters.record_n(ProfileEvent::Deleted, deleted as u64);
                    Ok(results)
                }
                Err(e) => {
                    self.record_failure("delete_items", &e);
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Counts a save when the wrapped pool reports success
    async fn save(&self, item: CacheItem<Self::Value>) -> Result<bool> {
        let span = self.operation_span("save", item.key());
        async {
            match self.pool.save(item).await {
                Ok(saved) => {
                    self.record_outcome("save", ProfileEvent::Saved, saved);
                    Ok(saved)
                }
                Err(e) => {
                    self.record_failure("save", &e);
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Counts a save as soon as the wrapped pool accepts the deferral.
    ///
    /// The count means "accepted", not "durable": if a later `commit` fails
    /// to persist the item, the save stays counted.
    async fn save_deferred(&self, item: CacheItem<Self::Value>) -> Result<bool> {
        let span = self.operation_span("save_deferred", item.key());
        async {
            match self.pool.save_deferred(item).await {
                Ok(accepted) => {
                    self.record_outcome("save_deferred", ProfileEvent::Saved, accepted);
                    Ok(accepted)
                }
                Err(e) => {
                    self.record_failure("save_deferred", &e);
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Deferred saves were counted on acceptance, so commits are not counted
    async fn commit(&self) -> Result<bool> {
        let span = self.operation_span("commit", "*");
        self.pool.commit().instrument(span).await
    }

    /// Counts a clean when the wrapped pool reports success.
    ///
    /// The wrapped pool's `clear` is invoked exactly once per call.
    async fn clear(&self) -> Result<bool> {
        let span = self.operation_span("clear", "*");
        async {
            match self.pool.clear().await {
                Ok(cleared) => {
                    if cleared {
                        info!(pool = %self.config.name, "Cache pool cleared");
                    }
                    self.record_outcome("clear", ProfileEvent::Cleaned, cleared);
                    Ok(cleared)
                }
                Err(e) => {
                    self.record_failure("clear", &e);
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }
}

/// Builder for [`ProfiledPool`]
pub struct ProfiledPoolBuilder<P: CachePool> {
    pool: P,
    config: ProfilerConfig,
}

impl<P: CachePool> ProfiledPoolBuilder<P> {
    /// Create a new builder with default configuration
    pub fn new(pool: P) -> Self {
        Self {
            pool,
            config: ProfilerConfig::default(),
        }
    }

    /// Set the pool name used in logs and reports
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self.config.source = ConfigSource::Programmatic;
        self
    }

    /// Enable or disable per-operation tracing spans
    pub fn with_operation_tracing(mut self, enabled: bool) -> Self {
        self.config.trace_operations = enabled;
        self.config.source = ConfigSource::Programmatic;
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: ProfilerConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the profiled pool
    pub fn build(self) -> ProfiledPool<P> {
        ProfiledPool::new(self.pool, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryPool;
    use std::sync::Arc;

    fn profiled(pool: MemoryPool<String>) -> ProfiledPool<MemoryPool<String>> {
        ProfiledPoolBuilder::new(pool).with_name("test-pool").build()
    }

    #[tokio::test]
    async fn test_scenario_counts_each_kind_once() -> Result<()> {
        let pool = profiled(MemoryPool::new());

        let item = pool.get_item("k").await?;
        assert!(!item.is_hit());
        assert_eq!(pool.summary().accessed, 1);
        assert_eq!(pool.summary().missed, 1);

        assert!(pool.save(CacheItem::new("k").set("v".to_string())).await?);
        assert_eq!(pool.summary().saved, 1);

        assert!(pool.delete_item("k").await?);
        assert_eq!(pool.summary().deleted, 1);

        assert!(pool.clear().await?);

        assert_eq!(
            pool.summary(),
            ProfileSummary {
                accessed: 1,
                missed: 1,
                deleted: 1,
                cleaned: 1,
                saved: 1,
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_hits_count_access_without_miss() -> Result<()> {
        let pool = profiled(MemoryPool::new());
        pool.save(CacheItem::new("k").set("v".to_string())).await?;

        let item = pool.get_item("k").await?;
        assert!(item.is_hit());
        assert_eq!(item.get().map(String::as_str), Some("v"));

        let summary = pool.summary();
        assert_eq!(summary.accessed, 1);
        assert_eq!(summary.missed, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_has_item_and_commit_are_not_counted() -> Result<()> {
        let pool = profiled(MemoryPool::new());
        pool.has_item("k").await?;
        pool.commit().await?;
        assert!(pool.summary().is_zero());
        Ok(())
    }

    #[tokio::test]
    async fn test_batch_operations() -> Result<()> {
        let pool = profiled(MemoryPool::new());
        pool.save(CacheItem::new("a").set("1".to_string())).await?;
        pool.save(CacheItem::new("b").set("2".to_string())).await?;

        let keys = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let items = pool.get_items(&keys).await?;
        assert_eq!(items.len(), 3);
        assert_eq!(pool.summary().accessed, 3);
        assert_eq!(pool.summary().missed, 1);

        let results = pool.delete_items(&keys).await?;
        assert_eq!(results.get("a"), Some(&true));
        assert_eq!(results.get("c"), Some(&false));
        assert_eq!(pool.summary().deleted, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_deferred_save_counts_on_acceptance() -> Result<()> {
        let pool = profiled(MemoryPool::new());
        assert!(pool.save_deferred(CacheItem::new("k").set("v".to_string())).await?);
        assert_eq!(pool.summary().saved, 1);

        assert!(pool.commit().await?);
        assert_eq!(pool.summary().saved, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_false_results_are_not_counted() -> Result<()> {
        let pool = profiled(MemoryPool::with_capacity(1));
        assert!(pool.save(CacheItem::new("a").set("1".to_string())).await?);
        assert!(!pool.save(CacheItem::new("b").set("2".to_string())).await?);
        assert!(!pool.save(CacheItem::new("c")).await?);
        assert!(!pool.delete_item("missing").await?);

        let summary = pool.summary();
        assert_eq!(summary.saved, 1);
        assert_eq!(summary.deleted, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_errors_propagate_uncounted() {
        let pool = profiled(MemoryPool::new());
        pool.inner().set_available(false);

        assert!(pool.get_item("k").await.is_err());
        assert!(pool.save(CacheItem::new("k").set("v".to_string())).await.is_err());
        assert!(pool.delete_item("k").await.is_err());
        assert!(pool.clear().await.is_err());
        assert!(pool.summary().is_zero());
    }

    #[tokio::test]
    async fn test_reset_keeps_pool_contents() -> Result<()> {
        let pool = profiled(MemoryPool::new());
        pool.save(CacheItem::new("k").set("v".to_string())).await?;
        pool.get_item("k").await?;

        pool.reset_summary();
        assert!(pool.summary().is_zero());
        assert!(pool.has_item("k").await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_take_summary_drains_counts() -> Result<()> {
        let pool = profiled(MemoryPool::new());
        pool.get_item("k").await?;

        let taken = pool.take_summary();
        assert_eq!(taken.accessed, 1);
        assert!(pool.summary().is_zero());
        Ok(())
    }

    #[tokio::test]
    async fn test_wraps_shared_pool() -> Result<()> {
        let shared = Arc::new(MemoryPool::new());
        let first = ProfiledPoolBuilder::new(Arc::clone(&shared))
            .with_name("first")
            .build();
        let second = ProfiledPoolBuilder::new(Arc::clone(&shared))
            .with_name("second")
            .build();

        first.save(CacheItem::new("k").set("v".to_string())).await?;
        assert!(second.get_item("k").await?.is_hit());

        assert_eq!(first.summary().saved, 1);
        assert_eq!(first.summary().accessed, 0);
        assert_eq!(second.summary().accessed, 1);
        assert_eq!(second.summary().saved, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_operation_tracing_does_not_change_counts() -> Result<()> {
        let pool = ProfiledPoolBuilder::new(MemoryPool::<String>::new())
            .with_operation_tracing(true)
            .build();
        assert!(pool.config().trace_operations);

        pool.get_item("k").await?;
        pool.has_item("k").await?;
        assert_eq!(pool.summary().accessed, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_reports_include_name_and_counts() -> Result<()> {
        let pool = profiled(MemoryPool::new());
        pool.get_item("k").await?;

        assert_eq!(
            pool.report_text(),
            "test-pool: accessed=1 missed=1 deleted=0 cleaned=0 saved=0"
        );
        let html = pool.report_html();
        assert!(html.contains("test-pool"));
        assert!(html.contains("accessed=1"));
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_batches_count_nothing() -> Result<()> {
        let pool = profiled(MemoryPool::new());
        assert!(pool.get_items(&[]).await?.is_empty());
        assert!(pool.delete_items(&[]).await?.is_empty());
        assert!(pool.summary().is_zero());
        Ok(())
    }

    #[tokio::test]
    async fn test_repeated_key_batch_delete_counts_one_deletion() -> Result<()> {
        let pool = profiled(MemoryPool::new());
        pool.save(CacheItem::new("a").set("1".to_string())).await?;

        let keys = vec!["a".to_string(), "a".to_string()];
        let results = pool.delete_items(&keys).await?;

        assert_eq!(results.get("a"), Some(&true));
        assert_eq!(pool.summary().deleted, 1);
        assert!(!pool.has_item("a").await?);
        Ok(())
    }
}
