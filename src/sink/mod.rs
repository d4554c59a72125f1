//! Result sinks.
//!
//! A sink receives every `ProbeResult` of a run, one at a time, from a single
//! drain task. Workers never call a sink directly, so sinks need no locking of
//! their own.

mod format;

pub use format::format_result;

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use log::{error, trace};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::OutputFormat;
use crate::probe::ProbeResult;

/// Consumer of probe results.
pub trait ResultSink: Send + 'static {
    /// Handles one result.
    ///
    /// An error stops the drain task; workers notice the closed channel and stop.
    fn report(&mut self, result: ProbeResult) -> io::Result<()>;

    /// Called once after the last result.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes one formatted line per result.
pub struct ConsoleSink<W: Write + Send + 'static> {
    writer: W,
    format: OutputFormat,
    color: bool,
}

impl ConsoleSink<io::Stdout> {
    /// Sink writing to the process's stdout.
    pub fn stdout(format: OutputFormat, color: bool) -> Self {
        Self::new(io::stdout(), format, color)
    }
}

impl<W: Write + Send + 'static> ConsoleSink<W> {
    /// Sink writing to `writer`.
    pub fn new(writer: W, format: OutputFormat, color: bool) -> Self {
        Self {
            writer,
            format,
            color,
        }
    }

    /// Gives back the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + 'static> ResultSink for ConsoleSink<W> {
    fn report(&mut self, result: ProbeResult) -> io::Result<()> {
        let line = format_result(&result, self.format, self.color);
        writeln!(self.writer, "{line}")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Keeps results in memory for callers that want them after the run.
#[derive(Clone, Default)]
pub struct CollectingSink {
    results: Arc<Mutex<Vec<ProbeResult>>>,
}

impl CollectingSink {
    /// Empty sink. Clones share the same storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything collected so far.
    pub fn results(&self) -> Vec<ProbeResult> {
        match self.results.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ResultSink for CollectingSink {
    fn report(&mut self, result: ProbeResult) -> io::Result<()> {
        match self.results.lock() {
            Ok(mut guard) => guard.push(result),
            Err(poisoned) => poisoned.into_inner().push(result),
        }
        Ok(())
    }
}

/// Starts the task that moves results from the channel into `sink`.
///
/// The handle resolves to the number of results reported once every sender is
/// dropped, or early if the sink fails.
pub fn spawn_sink<S: ResultSink>(
    mut sink: S,
    mut results: mpsc::Receiver<ProbeResult>,
) -> JoinHandle<usize> {
    tokio::spawn(async move {
        let mut reported = 0;
        while let Some(result) = results.recv().await {
            trace!("Reporting {}", result.target);
            if let Err(e) = sink.report(result) {
                error!("Result sink failed, stopping output: {e}");
                return reported;
            }
            reported += 1;
        }
        if let Err(e) = sink.finish() {
            error!("Result sink failed to finish: {e}");
        }
        reported
    })
}
