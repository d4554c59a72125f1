//! Run support.
//!
//! Progress logging, shutdown of background tasks and end-of-run statistics used
//! by the coordinator.

pub mod logging;
pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use logging::spawn_progress_logger;
pub use shutdown::shutdown_gracefully;
pub use statistics::log_statistics;
