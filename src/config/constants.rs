//! Configuration constants.
//!
//! This module defines the defaults and operational limits used throughout the
//! application.

/// Default number of concurrent workers.
pub const DEFAULT_CONCURRENCY: usize = 25;

/// Default per-request timeout in milliseconds.
///
/// Applies to both the TCP connect phase and the request as a whole.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Scheme prefix prepended to every target.
pub const DEFAULT_SCHEME: &str = "https://";

/// Default User-Agent string for probe requests.
pub const DEFAULT_USER_AGENT: &str = concat!("host_status/", env!("CARGO_PKG_VERSION"));

/// Progress logging interval in seconds
pub const LOGGING_INTERVAL: u64 = 5;

/// Work queue slots per worker.
///
/// The producer can run this far ahead of the slowest worker before it blocks.
pub const QUEUE_CAPACITY_PER_WORKER: usize = 2;

/// Capacity of the channel carrying results from workers to the sink.
pub const RESULT_CHANNEL_CAPACITY: usize = 256;

/// Maximum number of redirect hops when redirect following is enabled.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Maximum accepted target length in bytes.
///
/// Longer input lines are skipped with a warning. 253 is the DNS name limit; the
/// extra room covers an optional `:port` suffix.
pub const MAX_TARGET_LENGTH: usize = 260;
