//! Probe execution.
//!
//! A probe is one HEAD request against one target. Every failure (DNS, connect,
//! TLS, timeout, malformed URL or response) is caught here and turned into an
//! `Unreachable` result, so nothing a single target does can reach the pool.

mod classify;

pub use classify::{Classification, Outcome, ProbeResult};

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, trace};
use reqwest::header::{CONNECTION, LOCATION};

use crate::config::ProbeConfig;
use crate::error_handling::{categorize_reqwest_error, InitializationError, ProbeStats};
use crate::initialization::init_client;
use crate::target::Target;

/// Something that can classify a target.
///
/// Implementations must not panic and must not return errors: every failure is a
/// `ProbeResult` with `Outcome::Unreachable`.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Probes one target.
    async fn probe(&self, target: Target) -> ProbeResult;
}

/// HTTP prober backed by a shared `reqwest::Client`.
///
/// The client is built once from `ProbeConfig` with connection pooling disabled,
/// and every request asks the server to close the connection, so a long-running
/// worker never accumulates sockets.
pub struct HttpProber {
    client: Arc<reqwest::Client>,
    config: Arc<ProbeConfig>,
    stats: Option<Arc<ProbeStats>>,
}

impl HttpProber {
    /// Builds the prober and its HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the TLS backend cannot be
    /// initialized.
    pub fn new(config: ProbeConfig) -> Result<Self, InitializationError> {
        let client = init_client(&config)?;
        Ok(Self {
            client,
            config: Arc::new(config),
            stats: None,
        })
    }

    /// Records failure kinds of unreachable targets into `stats`.
    pub fn with_stats(mut self, stats: Arc<ProbeStats>) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Settings every probe uses.
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }
}

#[async_trait]
impl Probe for HttpProber {
    async fn probe(&self, target: Target) -> ProbeResult {
        let url = self.config.url_for(target.as_str());
        trace!("HEAD {url}");

        let response = self
            .client
            .head(&url)
            .header(CONNECTION, "close")
            .send()
            .await;

        match response {
            Ok(response) => {
                let status = response.status().as_u16();
                let location = response
                    .headers()
                    .get(LOCATION)
                    .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());
                debug!("{url} -> {status}");
                ProbeResult::new(target, Outcome::from_status(status, location))
            }
            Err(e) => {
                let kind = categorize_reqwest_error(&e);
                debug!("{url} unreachable ({kind}): {e}");
                if let Some(stats) = &self.stats {
                    stats.record_failure(kind);
                }
                ProbeResult::unreachable(target)
            }
        }
    }
}
