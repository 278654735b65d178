//! Core profile counter structures
//!
//! This module defines the atomic counter set owned by each profiled pool.

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

/// Live event counters for one profiled pool
///
/// Clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct ProfileCounters {
    pub(crate) inner: Arc<CountersInner>,
}

#[derive(Debug, Default)]
pub(crate) struct CountersInner {
    pub(crate) accessed: AtomicU64,
    pub(crate) missed: AtomicU64,
    pub(crate) deleted: AtomicU64,
    pub(crate) cleaned: AtomicU64,
    pub(crate) saved: AtomicU64,
}

impl ProfileCounters {
    /// Create a counter set with every count at zero
    pub fn new() -> Self {
        Self::default()
    }
}
