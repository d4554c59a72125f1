//! Error handling and probe statistics.
//!
//! This module provides:
//! - Fatal error types (`InputError`, `ConfigError`, `InitializationError`)
//! - The internal `FailureKind` taxonomy and reqwest error categorization
//! - Per-run statistics (`ProbeStats`)
//!
//! Only `InputError` (and misconfiguration) stops a run. Per-target network
//! failures are converted into `Unreachable` results by the prober and counted
//! here by kind.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::ProbeStats;
pub use types::{ConfigError, FailureKind, InitializationError, InputError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::Classification;
    use strum::IntoEnumIterator;

    #[test]
    fn test_probe_stats_initialization() {
        let stats = ProbeStats::new();
        for classification in Classification::iter() {
            assert_eq!(stats.count(classification), 0);
        }
        for kind in FailureKind::iter() {
            assert_eq!(stats.failure_count(kind), 0);
        }
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_probe_stats_record() {
        let stats = ProbeStats::new();
        stats.record(Classification::Success);
        stats.record(Classification::Success);
        stats.record(Classification::Unreachable);
        stats.record_failure(FailureKind::Timeout);

        assert_eq!(stats.count(Classification::Success), 2);
        assert_eq!(stats.count(Classification::Unreachable), 1);
        assert_eq!(stats.count(Classification::Redirect), 0);
        assert_eq!(stats.failure_count(FailureKind::Timeout), 1);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_probe_stats_snapshot_covers_every_classification() {
        let stats = ProbeStats::new();
        stats.record(Classification::ServerError);
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.len(), Classification::iter().count());
        assert!(snapshot.contains(&(Classification::ServerError, 1)));
    }

    #[test]
    fn test_probe_stats_concurrent_increments() {
        use std::sync::Arc;

        let stats = Arc::new(ProbeStats::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let stats = Arc::clone(&stats);
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        stats.record(Classification::ClientError);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread panicked");
        }
        assert_eq!(stats.count(Classification::ClientError), 8000);
    }
}
