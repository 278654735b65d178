//! Summary aggregation across several profiled pools
//!
//! Applications that run several named pools can merge their counts into one
//! combined summary, or collect a per-pool breakdown with a grand total.
//! Both only read snapshots; nothing here mutates a pool or its counters.
//!
//! Snapshots are taken one pool at a time. If a pool is reset while a merge is
//! in progress, the merge reflects that pool either before or after the reset.
//! Callers that need a consistent cut should pause traffic or use
//! [`ProfiledPool::take_summary`] per pool and add the results themselves.

use crate::metrics::ProfileSummary;
use crate::profiled::ProfiledPool;
use chrono::{DateTime, Utc};
use poolprof_core::CachePool;
use serde::{Deserialize, Serialize};

/// Anything that holds a profile summary under a pool name
pub trait Profiled {
    /// Name of the pool as it appears in reports
    fn pool_name(&self) -> &str;

    /// Copy of the current counts
    fn summary(&self) -> ProfileSummary;
}

impl<P: CachePool> Profiled for ProfiledPool<P> {
    fn pool_name(&self) -> &str {
        self.name()
    }

    fn summary(&self) -> ProfileSummary {
        ProfiledPool::summary(self)
    }
}

/// Sum the summaries of every given pool
///
/// An empty input yields an all-zero summary.
pub fn merge_summaries<'a, I, T>(instances: I) -> ProfileSummary
where
    I: IntoIterator<Item = &'a T>,
    T: Profiled + ?Sized + 'a,
{
    instances.into_iter().map(|instance| instance.summary()).sum()
}

/// Counts for one named pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSummary {
    pub name: String,
    #[serde(flatten)]
    pub summary: ProfileSummary,
}

/// Per-pool counts plus their merged total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub generated_at: DateTime<Utc>,
    pub pools: Vec<PoolSummary>,
    pub total: ProfileSummary,
}

impl SummaryReport {
    /// Snapshot every given pool, in order, and total the results
    pub fn collect<'a, I, T>(instances: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: Profiled + ?Sized + 'a,
    {
        let pools: Vec<PoolSummary> = instances
            .into_iter()
            .map(|instance| PoolSummary {
                name: instance.pool_name().to_string(),
                summary: instance.summary(),
            })
            .collect();
        Self::from_pools(pools)
    }

    /// Build a report from already captured summaries
    pub fn from_pools(pools: Vec<PoolSummary>) -> Self {
        let total: ProfileSummary = pools.iter().map(|pool| &pool.summary).sum();
        Self {
            generated_at: Utc::now(),
            pools,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryPool;
    use crate::profiled::ProfiledPoolBuilder;
    use poolprof_core::{CacheItem, Result};

    fn named(name: &str) -> ProfiledPool<MemoryPool<String>> {
        ProfiledPoolBuilder::new(MemoryPool::new()).with_name(name).build()
    }

    #[test]
    fn test_merge_of_nothing_is_zero() {
        let empty: Vec<ProfiledPool<MemoryPool<String>>> = Vec::new();
        assert!(merge_summaries(&empty).is_zero());
    }

    #[tokio::test]
    async fn test_merge_sums_element_wise() -> Result<()> {
        let a = named("a");
        let b = named("b");
        a.get_item("x").await?;
        a.save(CacheItem::new("x").set("1".to_string())).await?;
        b.get_item("x").await?;
        b.get_item("y").await?;
        b.clear().await?;

        let merged = merge_summaries([&a, &b]);
        assert_eq!(merged, a.summary() + b.summary());
        assert_eq!(merged.accessed, 3);
        assert_eq!(merged.missed, 3);
        assert_eq!(merged.saved, 1);
        assert_eq!(merged.cleaned, 1);

        // Inputs are left untouched
        assert_eq!(a.summary().accessed, 1);
        assert_eq!(b.summary().accessed, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_merge_accepts_heterogeneous_pools() -> Result<()> {
        let strings = named("strings");
        let numbers = ProfiledPoolBuilder::new(MemoryPool::<u64>::new())
            .with_name("numbers")
            .build();
        strings.get_item("k").await?;
        numbers.get_item("k").await?;

        let pools: [&dyn Profiled; 2] = [&strings, &numbers];
        let merged = merge_summaries(pools);
        assert_eq!(merged.accessed, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_report_keeps_order_and_totals() -> Result<()> {
        let first = named("first");
        let second = named("second");
        first.get_item("k").await?;
        second.delete_item("k").await?;

        let report = SummaryReport::collect([&first, &second]);
        let names: Vec<&str> = report.pools.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
        assert_eq!(report.total, merge_summaries([&first, &second]));
        Ok(())
    }

    #[test]
    fn test_pool_summary_serializes_flat() {
        let row = PoolSummary {
            name: "main".to_string(),
            summary: ProfileSummary {
                accessed: 2,
                ..ProfileSummary::zero()
            },
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["name"], "main");
        assert_eq!(json["accessed"], 2);
        assert_eq!(json["saved"], 0);
    }
}
