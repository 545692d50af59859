use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use super::fetch_utils::fetch;
use super::http_client::create_http_client;
use super::urls::{QueryParams, build_season_url, build_url};
use crate::config::Config;
use crate::error::AppError;

/// Client for the FTC Events API.
///
/// Owns its configuration; there is no process-wide state. Accessors take
/// `&self`, so one client can serve concurrent callers, while changing the
/// server needs `&mut self` and therefore cannot overlap a request.
///
/// # Example
/// ```no_run
/// use ftc_events::{Config, FtcClient, TeamQuery};
///
/// # async fn example() -> Result<(), ftc_events::AppError> {
/// let client = FtcClient::new(Config::new(
///     "https://ftc-api.firstinspires.org/v2.0",
///     "username",
///     "authorization-key",
/// ))?;
/// let teams = client.teams(2024, &TeamQuery::default()).await?;
/// println!("{} teams", teams.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FtcClient {
    http: Client,
    config: Config,
}

impl FtcClient {
    /// Validates the configuration and builds an HTTP client from it.
    pub fn new(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        let http = create_http_client(&config).map_err(AppError::HttpClient)?;
        Ok(Self { http, config })
    }

    /// Loads configuration from the config file and `FTC_*` environment
    /// variables, then builds the client.
    pub async fn from_env() -> Result<Self, AppError> {
        Self::new(Config::load().await?)
    }

    /// Uses a caller-supplied HTTP client as is. The timeout and certificate
    /// settings in `config` are not applied to it.
    pub fn with_http_client(config: Config, http: Client) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Base URL every request is built on.
    pub fn server(&self) -> &str {
        &self.config.server
    }

    /// Points subsequent requests at a different server.
    pub fn set_server(&mut self, server: impl Into<String>) {
        self.config.server = server.into();
    }

    pub(super) fn url(&self, segments: &[&str], query: &QueryParams) -> Result<Url, AppError> {
        build_url(&self.config.server, segments, query)
    }

    pub(super) fn season_url(
        &self,
        season: i32,
        segments: &[&str],
        query: &QueryParams,
    ) -> Result<Url, AppError> {
        build_season_url(&self.config.server, season, segments, query)
    }

    pub(super) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        fetch(&self.http, &self.config, &url).await
    }
}
