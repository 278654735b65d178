//! Point-in-time profile summaries
//!
//! A `ProfileSummary` is a plain value copied out of the live counters. It is
//! never shared with the decorator that produced it, so callers can keep,
//! add up or serialize summaries without affecting further counting.

use super::core::ProfileCounters;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::sync::atomic::Ordering;

/// The kinds of events a profiled pool counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileEvent {
    /// An item was fetched for use, hit or miss
    Accessed,
    /// A fetched item was not a hit
    Missed,
    /// A delete took effect
    Deleted,
    /// A full clear took effect
    Cleaned,
    /// A save (immediate or deferred) was accepted
    Saved,
}

impl ProfileEvent {
    /// Every event kind, in report order
    pub const ALL: [ProfileEvent; 5] = [
        ProfileEvent::Accessed,
        ProfileEvent::Missed,
        ProfileEvent::Deleted,
        ProfileEvent::Cleaned,
        ProfileEvent::Saved,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ProfileEvent::Accessed => "accessed",
            ProfileEvent::Missed => "missed",
            ProfileEvent::Deleted => "deleted",
            ProfileEvent::Cleaned => "cleaned",
            ProfileEvent::Saved => "saved",
        }
    }
}

impl fmt::Display for ProfileEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts of every profiled event kind at a point in time
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub accessed: u64,
    pub missed: u64,
    pub deleted: u64,
    pub cleaned: u64,
    pub saved: u64,
}

impl ProfileSummary {
    /// An all-zero summary
    pub const fn zero() -> Self {
        Self {
            accessed: 0,
            missed: 0,
            deleted: 0,
            cleaned: 0,
            saved: 0,
        }
    }

    /// Count recorded for a single event kind
    pub const fn get(&self, event: ProfileEvent) -> u64 {
        match event {
            ProfileEvent::Accessed => self.accessed,
            ProfileEvent::Missed => self.missed,
            ProfileEvent::Deleted => self.deleted,
            ProfileEvent::Cleaned => self.cleaned,
            ProfileEvent::Saved => self.saved,
        }
    }

    /// Iterate over `(event, count)` pairs in report order
    pub fn iter(&self) -> impl Iterator<Item = (ProfileEvent, u64)> + '_ {
        ProfileEvent::ALL
            .into_iter()
            .map(move |event| (event, self.get(event)))
    }

    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, count)| count == 0)
    }

    /// Hits divided by accesses, or `None` if nothing was accessed
    pub fn hit_ratio(&self) -> Option<f64> {
        if self.accessed == 0 {
            return None;
        }
        let hits = self.accessed.saturating_sub(self.missed);
        Some(hits as f64 / self.accessed as f64)
    }
}

impl Add for ProfileSummary {
    type Output = ProfileSummary;

    fn add(self, other: ProfileSummary) -> ProfileSummary {
        ProfileSummary {
            accessed: self.accessed.saturating_add(other.accessed),
            missed: self.missed.saturating_add(other.missed),
            deleted: self.deleted.saturating_add(other.deleted),
            cleaned: self.cleaned.saturating_add(other.cleaned),
            saved: self.saved.saturating_add(other.saved),
        }
    }
}

impl AddAssign for ProfileSummary {
    fn add_assign(&mut self, other: ProfileSummary) {
        *self = *self + other;
    }
}

impl Sum for ProfileSummary {
    fn sum<I: Iterator<Item = ProfileSummary>>(iter: I) -> Self {
        iter.fold(ProfileSummary::zero(), Add::add)
    }
}

impl<'a> Sum<&'a ProfileSummary> for ProfileSummary {
    fn sum<I: Iterator<Item = &'a ProfileSummary>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for ProfileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (event, count) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{event}={count}")?;
            first = false;
        }
        Ok(())
    }
}

impl ProfileCounters {
    /// Take a snapshot of the current counts
    ///
    /// Each counter is read independently. While other threads are recording,
    /// every individual count is exact but the five are not an atomic cut.
    pub fn snapshot(&self) -> ProfileSummary {
        ProfileSummary {
            accessed: self.inner.accessed.load(Ordering::Relaxed),
            missed: self.inner.missed.load(Ordering::Relaxed),
            deleted: self.inner.deleted.load(Ordering::Relaxed),
            cleaned: self.inner.cleaned.load(Ordering::Relaxed),
            saved: self.inner.saved.load(Ordering::Relaxed),
        }
    }
}
