//! HTTP client initialization.

use std::sync::Arc;

use reqwest::redirect::Policy;
use reqwest::ClientBuilder;

use crate::config::{ProbeConfig, MAX_REDIRECT_HOPS};
use crate::error_handling::InitializationError;

/// Initializes the probe HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - Connect timeout and overall timeout both set to `config.timeout`
/// - Certificate verification per `config.skip_tls_verification`
/// - Redirects disabled unless `config.follow_redirects` (then up to `MAX_REDIRECT_HOPS`)
/// - No idle connection pooling, HTTP/1.1 only
/// - User-Agent from `config`
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &ProbeConfig) -> Result<Arc<reqwest::Client>, InitializationError> {
    let redirect = if config.follow_redirects {
        Policy::limited(MAX_REDIRECT_HOPS)
    } else {
        Policy::none()
    };

    let client = ClientBuilder::new()
        .timeout(config.timeout)
        .connect_timeout(config.timeout)
        .danger_accept_invalid_certs(config.skip_tls_verification)
        .redirect(redirect)
        .pool_max_idle_per_host(0)
        .http1_only()
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_default_config() {
        assert!(init_client(&ProbeConfig::default()).is_ok());
    }

    #[test]
    fn test_init_client_strict_tls_and_redirects() {
        let config = ProbeConfig {
            skip_tls_verification: false,
            follow_redirects: true,
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }
}
