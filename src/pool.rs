//! Worker pool.
//!
//! Exactly `worker_count` tasks pull targets from the shared queue, probe them and
//! forward each result to the sink channel. The pool returns only after every
//! worker has exited, which happens when the queue is closed and drained, the sink
//! goes away, or the run is cancelled.

use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{debug, trace, warn};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::error_handling::{ConfigError, ProbeStats};
use crate::probe::{Probe, ProbeResult};
use crate::target::TargetQueue;

/// What the pool did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolReport {
    /// Workers spawned
    pub workers: usize,
    /// Results handed to the sink channel
    pub probed: usize,
    /// Workers that died from a panic (their in-flight target has no result)
    pub panicked: usize,
    /// The run was cancelled before the queue drained
    pub cancelled: bool,
}

/// Runs the pool to completion.
///
/// Results are not ordered across workers. Cancelling `cancel` makes idle workers
/// exit and busy workers abandon their in-flight probe without a result.
///
/// # Errors
///
/// Returns `ConfigError::ZeroConcurrency` if `worker_count` is zero.
pub async fn run_pool<P>(
    queue: TargetQueue,
    worker_count: usize,
    prober: Arc<P>,
    results: mpsc::Sender<ProbeResult>,
    stats: Arc<ProbeStats>,
    cancel: CancellationToken,
) -> Result<PoolReport, ConfigError>
where
    P: Probe + ?Sized + 'static,
{
    if worker_count == 0 {
        return Err(ConfigError::ZeroConcurrency);
    }

    let mut workers = FuturesUnordered::new();
    for id in 0..worker_count {
        workers.push(tokio::spawn(worker(
            id,
            queue.clone(),
            Arc::clone(&prober),
            results.clone(),
            Arc::clone(&stats),
            cancel.clone(),
        )));
    }
    // Workers hold the only remaining handles
    drop(queue);
    drop(results);
    debug!("Started {worker_count} workers");

    let mut report = PoolReport {
        workers: worker_count,
        ..Default::default()
    };
    while let Some(joined) = workers.next().await {
        match joined {
            Ok(probed) => report.probed += probed,
            Err(join_error) => {
                report.panicked += 1;
                warn!("Worker panicked: {:?}", join_error);
            }
        }
    }
    report.cancelled = cancel.is_cancelled();
    Ok(report)
}

async fn worker<P>(
    id: usize,
    queue: TargetQueue,
    prober: Arc<P>,
    results: mpsc::Sender<ProbeResult>,
    stats: Arc<ProbeStats>,
    cancel: CancellationToken,
) -> usize
where
    P: Probe + ?Sized,
{
    let mut probed = 0;
    loop {
        let target = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            next = queue.recv() => match next {
                Ok(target) => target,
                // Closed and empty
                Err(_) => break,
            },
        };

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Worker {id} abandoning in-flight probe");
                break;
            }
            result = prober.probe(target) => result,
        };

        let classification = result.classification();
        if results.send(result).await.is_err() {
            warn!("Result sink closed, worker {id} stopping");
            break;
        }
        stats.record(classification);
        probed += 1;
    }
    trace!("Worker {id} exiting after {probed} probes");
    probed
}
