//! Counter recording, reset and drain operations

use super::core::{CountersInner, ProfileCounters};
use super::snapshot::{ProfileEvent, ProfileSummary};
use std::sync::atomic::{AtomicU64, Ordering};

impl CountersInner {
    fn counter(&self, event: ProfileEvent) -> &AtomicU64 {
        match event {
            ProfileEvent::Accessed => &self.accessed,
            ProfileEvent::Missed => &self.missed,
            ProfileEvent::Deleted => &self.deleted,
            ProfileEvent::Cleaned => &self.cleaned,
            ProfileEvent::Saved => &self.saved,
        }
    }
}

impl ProfileCounters {
    /// Record a single occurrence of `event`
    pub fn record(&self, event: ProfileEvent) {
        self.inner.counter(event).fetch_add(1, Ordering::Relaxed);
    }

    /// Record `count` occurrences of `event`
    pub fn record_n(&self, event: ProfileEvent, count: u64) {
        if count > 0 {
            self.inner.counter(event).fetch_add(count, Ordering::Relaxed);
        }
    }

    /// Current count for a single event kind
    pub fn get(&self, event: ProfileEvent) -> u64 {
        self.inner.counter(event).load(Ordering::Relaxed)
    }

    /// Reset every counter to zero
    pub fn reset(&self) {
        for event in ProfileEvent::ALL {
            self.inner.counter(event).store(0, Ordering::Relaxed);
        }
    }

    /// Reset every counter to zero, returning the counts it held
    ///
    /// Events recorded concurrently land either in the returned summary or in
    /// the fresh counts, never in both and never in neither.
    pub fn take(&self) -> ProfileSummary {
        ProfileSummary {
            accessed: self.inner.accessed.swap(0, Ordering::Relaxed),
            missed: self.inner.missed.swap(0, Ordering::Relaxed),
            deleted: self.inner.deleted.swap(0, Ordering::Relaxed),
            cleaned: self.inner.cleaned.swap(0, Ordering::Relaxed),
            saved: self.inner.saved.swap(0, Ordering::Relaxed),
        }
    }
}
