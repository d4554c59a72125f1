//! Target source and work queue.
//!
//! The source reads its input line by line and pushes targets into a bounded
//! `async_channel`. The producer task owns the only `Sender`; dropping it when the
//! input is exhausted (or unreadable, or the run is cancelled) is the one and only
//! close of the queue. Workers see `recv()` fail only once the queue is closed AND
//! empty, which is their termination signal.

use std::borrow::Cow;
use std::path::Path;

use async_channel::Sender;
use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::Target;
use crate::error_handling::InputError;

/// Receiving end of the work queue. Clone it once per worker.
///
/// Each target is delivered to exactly one receiver.
pub type TargetQueue = async_channel::Receiver<Target>;

/// Summary of what the producer enqueued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceReport {
    /// Targets enqueued
    pub produced: usize,
    /// A read error ended the input early
    pub truncated: bool,
    /// Production stopped because the run was cancelled
    pub cancelled: bool,
}

/// Single-pass reader of newline-delimited hostnames.
pub struct TargetSource {
    reader: Box<dyn AsyncBufRead + Unpin + Send>,
    line: Vec<u8>,
    line_number: usize,
    origin: String,
}

impl TargetSource {
    /// Opens a file, or stdin when `path` is `-`.
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the file cannot be opened. Nothing has been read
    /// and no queue exists at that point.
    pub async fn open(path: &Path) -> Result<Self, InputError> {
        if path.as_os_str() == "-" {
            info!("Reading targets from stdin");
            return Ok(Self::from_reader(BufReader::new(tokio::io::stdin()), "stdin"));
        }
        let file = tokio::fs::File::open(path)
            .await
            .map_err(|source| InputError {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_reader(
            BufReader::new(file),
            path.display().to_string(),
        ))
    }

    /// Wraps any buffered reader.
    pub fn from_reader<R>(reader: R, origin: impl Into<String>) -> Self
    where
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        Self {
            reader: Box::new(reader),
            line: Vec::new(),
            line_number: 0,
            origin: origin.into(),
        }
    }

    /// Reads up to the next line that yields a target.
    ///
    /// `Ok(None)` at end of input. Lines that are not valid UTF-8 are decoded
    /// lossily and still become targets; only I/O failures are errors.
    pub async fn next_target(&mut self) -> std::io::Result<Option<Target>> {
        loop {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line).await? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let line = String::from_utf8_lossy(&self.line);
            if matches!(line, Cow::Owned(_)) {
                warn!(
                    "{} line {} is not valid UTF-8, probing it as {:?}",
                    self.origin,
                    self.line_number,
                    line.trim()
                );
            }
            if let Some(target) = Target::parse(&line) {
                return Ok(Some(target));
            }
        }
    }

    /// Starts the producer task and returns the queue it fills.
    ///
    /// Targets are enqueued strictly in input order. The returned handle resolves
    /// once the queue has been closed.
    pub fn spawn(
        self,
        capacity: usize,
        cancel: CancellationToken,
    ) -> (TargetQueue, JoinHandle<SourceReport>) {
        let (tx, rx) = async_channel::bounded(capacity.max(1));
        let handle = tokio::spawn(self.produce(tx, cancel));
        (rx, handle)
    }

    async fn produce(mut self, tx: Sender<Target>, cancel: CancellationToken) -> SourceReport {
        let mut report = SourceReport::default();

        loop {
            let next = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    report.cancelled = true;
                    break;
                }
                next = self.next_target() => next,
            };

            let target = match next {
                Ok(Some(target)) => target,
                Ok(None) => break,
                Err(e) => {
                    warn!(
                        "Failed to read from {}: {e}; input truncated after {} targets",
                        self.origin, report.produced
                    );
                    report.truncated = true;
                    break;
                }
            };

            let sent = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    report.cancelled = true;
                    break;
                }
                sent = tx.send(target) => sent,
            };
            if sent.is_err() {
                debug!("Work queue has no receivers left, stopping producer");
                break;
            }
            report.produced += 1;
        }

        // Sole sender: dropping it closes the queue
        drop(tx);
        debug!(
            "Target source {} closed after {} targets",
            self.origin, report.produced
        );
        report
    }
}
