//! host_status library: concurrent HTTP status probing of hostnames
//!
//! Reads hostnames line by line, probes each with a single HEAD request from a
//! bounded pool of workers, and hands every classified result to a sink.
//!
//! # Example
//!
//! ```no_run
//! use host_status::{run_probe, CollectingSink, Config};
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("hosts.txt"),
//!     concurrency: 50,
//!     ..Default::default()
//! };
//!
//! let sink = CollectingSink::new();
//! let report = run_probe(config, sink.clone(), CancellationToken::new()).await?;
//! println!("Probed {} hosts", report.total);
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! TLS certificate verification is OFF by default (see [`ProbeConfig`]).
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod pool;
pub mod probe;
pub mod sink;
pub mod target;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt, OutputFormat, ProbeConfig};
pub use error_handling::{ConfigError, FailureKind, InitializationError, InputError, ProbeStats};
pub use pool::{run_pool, PoolReport};
pub use probe::{Classification, HttpProber, Outcome, Probe, ProbeResult};
pub use run::{run_probe, run_probe_with, ProbeReport};
pub use sink::{format_result, CollectingSink, ConsoleSink, ResultSink};
pub use target::{SourceReport, Target, TargetQueue, TargetSource};

// Internal run module (wires source, pool and sink together)
mod run {
    use std::sync::Arc;
    use std::time::Duration;

    use anyhow::{Context, Result};
    use log::{info, warn};
    use tokio::sync::mpsc;
    use tokio_util::sync::CancellationToken;

    use crate::app::{log_statistics, shutdown_gracefully, spawn_progress_logger};
    use crate::config::{Config, LOGGING_INTERVAL, QUEUE_CAPACITY_PER_WORKER, RESULT_CHANNEL_CAPACITY};
    use crate::error_handling::ProbeStats;
    use crate::pool::run_pool;
    use crate::probe::{Classification, HttpProber, Probe};
    use crate::sink::{spawn_sink, ResultSink};
    use crate::target::TargetSource;

    /// Results of a probing run.
    #[derive(Debug, Clone)]
    pub struct ProbeReport {
        /// Number of results produced
        pub total: usize,
        /// Targets read from the input
        pub targets: usize,
        /// Result count per classification, in declaration order
        pub classifications: Vec<(Classification, usize)>,
        /// A read error ended the input early
        pub input_truncated: bool,
        /// The run was cancelled before finishing
        pub cancelled: bool,
        /// Workers lost to panics
        pub panicked_workers: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    impl ProbeReport {
        /// Number of results with the given classification.
        pub fn count(&self, classification: Classification) -> usize {
            self.classifications
                .iter()
                .find(|(c, _)| *c == classification)
                .map(|(_, n)| *n)
                .unwrap_or(0)
        }
    }

    /// Runs a probe over every target in `config.file`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the input cannot be opened
    /// (`InputError`), or the HTTP client cannot be built. Nothing has been probed
    /// in any of those cases. Per-target failures never surface here.
    pub async fn run_probe<S: ResultSink>(
        config: Config,
        sink: S,
        cancel: CancellationToken,
    ) -> Result<ProbeReport> {
        config
            .validate()
            .context("Configuration validation failed")?;

        let stats = Arc::new(ProbeStats::new());
        let prober = HttpProber::new(config.probe.clone())
            .context("Failed to initialize HTTP client")?
            .with_stats(Arc::clone(&stats));
        if config.probe.skip_tls_verification {
            warn!("TLS certificate verification is disabled");
        }

        run_probe_with(&config, Arc::new(prober), stats, sink, cancel).await
    }

    /// Runs a probe with a caller-supplied prober.
    ///
    /// `stats` receives one count per result; pass the same instance the prober
    /// records failure kinds into, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the input cannot be
    /// opened.
    pub async fn run_probe_with<P, S>(
        config: &Config,
        prober: Arc<P>,
        stats: Arc<ProbeStats>,
        sink: S,
        cancel: CancellationToken,
    ) -> Result<ProbeReport>
    where
        P: Probe + ?Sized + 'static,
        S: ResultSink,
    {
        config
            .validate()
            .context("Configuration validation failed")?;

        // Fails before any queue or worker exists
        let source = TargetSource::open(&config.file).await?;

        let start_time = std::time::Instant::now();
        info!(
            "Probing with {} workers, timeout {:?}",
            config.concurrency, config.probe.timeout
        );

        let (queue, producer) = source.spawn(
            config.concurrency.saturating_mul(QUEUE_CAPACITY_PER_WORKER),
            cancel.clone(),
        );
        let (results_tx, results_rx) = mpsc::channel(RESULT_CHANNEL_CAPACITY);
        let sink_task = spawn_sink(sink, results_rx);

        let background = CancellationToken::new();
        let logging_task = spawn_progress_logger(
            start_time,
            Arc::clone(&stats),
            Duration::from_secs(LOGGING_INTERVAL),
            background.clone(),
        );

        let pool_report = run_pool(
            queue,
            config.concurrency,
            prober,
            results_tx,
            Arc::clone(&stats),
            cancel.clone(),
        )
        .await?;

        let source_report = producer.await.context("Target producer panicked")?;
        let reported = sink_task.await.context("Result sink panicked")?;
        shutdown_gracefully(background, Some(logging_task)).await;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        log_statistics(&stats, elapsed_seconds);
        if reported < pool_report.probed {
            warn!(
                "Sink reported {} of {} results",
                reported, pool_report.probed
            );
        }

        Ok(ProbeReport {
            total: pool_report.probed,
            targets: source_report.produced,
            classifications: stats.snapshot(),
            input_truncated: source_report.truncated,
            cancelled: pool_report.cancelled || source_report.cancelled,
            panicked_workers: pool_report.panicked,
            elapsed_seconds,
        })
    }
}
