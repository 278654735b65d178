//! Profile counters and summaries
//!
//! Counters are plain atomics updated with relaxed ordering: each increment
//! is indivisible, so concurrent callers of one profiled pool never lose
//! updates, and no lock is taken on the hot path.

mod collection;
mod core;
mod snapshot;

pub use self::core::ProfileCounters;
pub use snapshot::{ProfileEvent, ProfileSummary};
