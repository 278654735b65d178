//! Usage profiling for cache pools
//!
//! This crate provides a decorator that wraps any [`CachePool`] and records
//! how it is used, without changing what the pool does:
//! - Accesses and misses on every fetch
//! - Deletions, saves and full clears that took effect
//! - Merged summaries across several named pools
//! - Text, HTML, JSON and Prometheus reports
//!
//! ```no_run
//! use poolprof_cache::{CacheItem, CachePool, MemoryPool, ProfiledPoolBuilder};
//!
//! # async fn demo() -> poolprof_cache::Result<()> {
//! let pool = ProfiledPoolBuilder::new(MemoryPool::<String>::new())
//!     .with_name("sessions")
//!     .build();
//!
//! pool.save(CacheItem::new("user.42").set("alice".to_string())).await?;
//! let item = pool.get_item("user.42").await?;
//! assert!(item.is_hit());
//! println!("{}", pool.report_text());
//! # Ok(())
//! # }
//! ```
//!
//! Existence checks (`has_item`) and commits are not counted. A deferred save
//! is counted when the pool accepts it.

pub mod aggregate;
pub mod config;
pub mod memory;
pub mod metrics;
pub mod profiled;
pub mod report;

pub use aggregate::{merge_summaries, PoolSummary, Profiled, SummaryReport};
pub use config::{ConfigSource, ProfilerConfig};
pub use memory::MemoryPool;
pub use metrics::{ProfileCounters, ProfileEvent, ProfileSummary};
pub use profiled::{ProfiledPool, ProfiledPoolBuilder};

// Re-export the pool contract so callers need a single dependency
pub use poolprof_core::{CacheItem, CacheKey, CachePool, Error, PoolError, Result};
