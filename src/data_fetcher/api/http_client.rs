//! HTTP client creation and configuration utilities

use crate::config::Config;
use crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST;
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

/// Creates the HTTP client used for all API requests.
///
/// # Features
/// * Request timeout from `config.http_timeout_seconds`
/// * Connection pooling with a bounded idle pool per host
/// * TLS certificate verification unless `config.accept_invalid_certs` is set
pub fn create_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    if config.accept_invalid_certs {
        warn!("TLS certificate verification is disabled for {}", config.server);
    }

    Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}
