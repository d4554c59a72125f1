//! Graceful shutdown handling.

use log::warn;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Stops background tasks once the pool has joined.
///
/// `background` is the token the progress logger listens on. It is separate from
/// the run's cancellation token, which only the caller fires.
pub async fn shutdown_gracefully(
    background: CancellationToken,
    logging_task: Option<JoinHandle<()>>,
) {
    background.cancel();
    if let Some(logging_task) = logging_task {
        if let Err(e) = logging_task.await {
            warn!("Progress logger ended abnormally: {e}");
        }
    }
}
