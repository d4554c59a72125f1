//! Progress logging utilities.

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::info;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error_handling::ProbeStats;

/// Logs progress information about probing.
///
/// # Arguments
///
/// * `start_time` - The start time of the run
/// * `stats` - Counters shared with the workers
pub fn log_progress(start_time: Instant, stats: &ProbeStats) {
    let completed = stats.total();
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Probed {} targets in {:.2} seconds (~{:.2} targets/sec)",
        completed, elapsed_secs, rate
    );
}

/// Spawns a task that calls `log_progress` every `interval` until `cancel` fires.
///
/// The first report happens one interval after start, so short runs stay quiet.
pub fn spawn_progress_logger(
    start_time: Instant,
    stats: Arc<ProbeStats>,
    interval: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + interval, interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => log_progress(start_time, &stats),
                _ = cancel.cancelled() => break,
            }
        }
    })
}
