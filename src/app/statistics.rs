//! End-of-run statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{FailureKind, ProbeStats};

/// Logs per-classification counts and, when present, why targets were unreachable.
pub fn log_statistics(stats: &ProbeStats, elapsed_seconds: f64) {
    info!(
        "Probed {} targets in {:.1}s",
        stats.total(),
        elapsed_seconds
    );

    let classes: Vec<String> = stats
        .snapshot()
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(class, count)| format!("{class}={count}"))
        .collect();
    if !classes.is_empty() {
        info!("Classifications: {}", classes.join(", "));
    }

    let failures: Vec<String> = FailureKind::iter()
        .map(|kind| (kind, stats.failure_count(kind)))
        .filter(|(_, count)| *count > 0)
        .map(|(kind, count)| format!("{kind}={count}"))
        .collect();
    if !failures.is_empty() {
        info!("Unreachable by cause: {}", failures.join(", "));
    }
}
