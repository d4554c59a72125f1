//! Probe statistics tracking.
//!
//! This module provides thread-safe counters for classifications and failure kinds
//! shared by all workers of a run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::FailureKind;
use crate::probe::Classification;

/// Thread-safe probe statistics tracker.
///
/// Every `Classification` and `FailureKind` is initialized to zero on creation, so
/// increments never allocate and the maps are never written after construction.
///
/// # Thread Safety
///
/// This struct is thread-safe and can be shared across multiple tasks using `Arc`.
pub struct ProbeStats {
    classifications: HashMap<Classification, AtomicUsize>,
    failures: HashMap<FailureKind, AtomicUsize>,
}

impl Default for ProbeStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let classifications = Classification::iter()
            .map(|c| (c, AtomicUsize::new(0)))
            .collect();
        let failures = FailureKind::iter()
            .map(|k| (k, AtomicUsize::new(0)))
            .collect();
        ProbeStats {
            classifications,
            failures,
        }
    }

    /// Counts one result handed to the sink.
    pub fn record(&self, classification: Classification) {
        if let Some(counter) = self.classifications.get(&classification) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Classification {:?} missing from stats map; ProbeStats::new() is out of date",
                classification
            );
        }
    }

    /// Counts why one target was unreachable.
    pub fn record_failure(&self, kind: FailureKind) {
        if let Some(counter) = self.failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Failure kind {:?} missing from stats map; ProbeStats::new() is out of date",
                kind
            );
        }
    }

    /// Results recorded for `classification`.
    pub fn count(&self, classification: Classification) -> usize {
        self.classifications
            .get(&classification)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Unreachable targets recorded for `kind`.
    pub fn failure_count(&self, kind: FailureKind) -> usize {
        self.failures
            .get(&kind)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Total number of results recorded.
    pub fn total(&self) -> usize {
        self.classifications
            .values()
            .map(|c| c.load(Ordering::Relaxed))
            .sum()
    }

    /// Snapshot of all classification counts in declaration order.
    pub fn snapshot(&self) -> Vec<(Classification, usize)> {
        Classification::iter().map(|c| (c, self.count(c))).collect()
    }
}
