//! Crate-wide constants and configuration defaults

/// Production endpoint of the FTC Events API, version 2.0
pub const DEFAULT_SERVER: &str = "https://ftc-api.firstinspires.org/v2.0";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections kept per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 8;

/// Number of response body characters written to debug logs
pub const RESPONSE_PREVIEW_CHARS: usize = 1024;

/// Directory name used under the platform config dir
pub const APP_DIR_NAME: &str = "ftc_events";

/// Default log file name
pub const LOG_FILE_NAME: &str = "ftc_events.log";

/// Environment variable names
pub mod env_vars {
    /// Overrides the API server base URL
    pub const SERVER: &str = "FTC_API_SERVER";

    /// Basic-auth username
    pub const USERNAME: &str = "FTC_API_USERNAME";

    /// Basic-auth authorization key
    pub const AUTHORIZATION_KEY: &str = "FTC_API_KEY";

    /// Overrides the log file path
    pub const LOG_FILE: &str = "FTC_LOG_FILE";

    /// Overrides the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "FTC_HTTP_TIMEOUT";

    /// Set to `1`/`true` to skip TLS certificate verification
    pub const ACCEPT_INVALID_CERTS: &str = "FTC_ACCEPT_INVALID_CERTS";
}
