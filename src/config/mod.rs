use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_SERVER, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Client configuration: where the API lives, how to authenticate and how
/// the HTTP client behaves.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Base server URL including the API version path, e.g.
    /// `https://ftc-api.firstinspires.org/v2.0`.
    pub server: String,
    /// Basic-auth username issued with the API token.
    pub username: String,
    /// Basic-auth authorization key (the API token).
    pub authorization_key: String,
    /// Path to the log file. If not specified, logs go to the default location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests.
    pub http_timeout_seconds: u64,
    /// Skip TLS certificate verification. Off unless explicitly enabled.
    pub accept_invalid_certs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: DEFAULT_SERVER.to_string(),
            username: String::new(),
            authorization_key: String::new(),
            log_file_path: None,
            http_timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECONDS,
            accept_invalid_certs: false,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("server", &self.server)
            .field("username", &self.username)
            .field("authorization_key", &redact(&self.authorization_key))
            .field("log_file_path", &self.log_file_path)
            .field("http_timeout_seconds", &self.http_timeout_seconds)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "<unset>" } else { "<redacted>" }
}

fn parse_bool_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Normalizes a server URL for storage: adds https:// when no scheme is
/// given and strips trailing slashes.
pub fn normalize_server(server: &str) -> String {
    let trimmed = server.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

impl Config {
    /// Creates a configuration for the given server and credentials with
    /// default timeout and certificate verification enabled.
    pub fn new(
        server: impl Into<String>,
        username: impl Into<String>,
        authorization_key: impl Into<String>,
    ) -> Self {
        Config {
            server: server.into(),
            username: username.into(),
            authorization_key: authorization_key.into(),
            ..Config::default()
        }
    }

    /// Loads configuration from the default config file location, then
    /// applies environment overrides and validates the result.
    ///
    /// # Environment Variables
    /// - `FTC_API_SERVER` - Override server URL
    /// - `FTC_API_USERNAME` - Override username
    /// - `FTC_API_KEY` - Override authorization key
    /// - `FTC_LOG_FILE` - Override log file path
    /// - `FTC_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    /// - `FTC_ACCEPT_INVALID_CERTS` - Disable certificate verification
    ///
    /// A missing config file is not an error; defaults plus environment
    /// are used instead.
    pub async fn load() -> Result<Self, AppError> {
        let config = Self::load_unvalidated().await?;
        config.validate()?;
        Ok(config)
    }

    /// Same as [`Config::load`] without the validation step. Used by the
    /// CLI when editing a config that is still incomplete.
    pub async fn load_unvalidated() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            debug!("Loading config from {config_path}");
            Self::load_from_path(&config_path).await?
        } else {
            debug!("No config file at {config_path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Applies `FTC_*` environment variables on top of the current values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(server) = std::env::var(env_vars::SERVER) {
            self.server = server;
        }

        if let Ok(username) = std::env::var(env_vars::USERNAME) {
            self.username = username;
        }

        if let Ok(key) = std::env::var(env_vars::AUTHORIZATION_KEY) {
            self.authorization_key = key;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Some(flag) = std::env::var(env_vars::ACCEPT_INVALID_CERTS)
            .ok()
            .and_then(|s| parse_bool_flag(&s))
        {
            self.accept_invalid_certs = flag;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout. The authorization
    /// key is never printed.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        let config = Config::load_unvalidated().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Server:");
        println!("{}", config.server);
        println!("────────────────────────────────────");
        println!("Username:");
        println!("{}", if config.username.is_empty() { "<unset>" } else { config.username.as_str() });
        println!("Authorization Key:");
        println!("{}", redact(&config.authorization_key));
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("Certificate Verification:");
        println!("{}", if config.accept_invalid_certs { "DISABLED" } else { "enabled" });
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", crate::constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and normalizes the
    /// server URL before writing.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            server: normalize_server(&self.server),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        unsafe {
            for var in [
                env_vars::SERVER,
                env_vars::USERNAME,
                env_vars::AUTHORIZATION_KEY,
                env_vars::LOG_FILE,
                env_vars::HTTP_TIMEOUT,
                env_vars::ACCEPT_INVALID_CERTS,
            ] {
                std::env::remove_var(var);
            }
        }
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
server = "https://ftc-api.example.com/v2.0"
username = "alice"
authorization_key = "0000-1111"
log_file_path = "/custom/log/path"
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.server, "https://ftc-api.example.com/v2.0");
        assert_eq!(config.username, "alice");
        assert_eq!(config.authorization_key, "0000-1111");
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.http_timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECONDS);
        assert!(!config.accept_invalid_certs);
    }

    #[tokio::test]
    async fn test_config_missing_fields_use_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "username = \"bob\"\n").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config.server, DEFAULT_SERVER);
        assert_eq!(config.username, "bob");
        assert!(config.authorization_key.is_empty());
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let mut original = Config::new("https://ftc-api.example.com/v2.0", "alice", "secret");
        original.log_file_path = Some("/custom/log/path".to_string());
        original.http_timeout_seconds = 12;
        original.accept_invalid_certs = true;

        original.save_to_path(&config_path_str).await.unwrap();
        assert!(config_path.exists());

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(original, loaded);
    }

    #[tokio::test]
    async fn test_config_save_normalizes_server() {
        let cases = vec![
            ("ftc-api.example.com/v2.0", "https://ftc-api.example.com/v2.0"),
            ("https://ftc-api.example.com/v2.0/", "https://ftc-api.example.com/v2.0"),
            ("http://localhost:8080", "http://localhost:8080"),
        ];

        for (input, expected) in cases {
            let temp_dir = tempdir().unwrap();
            let config_path = temp_dir.path().join("config.toml");
            let config_path_str = config_path.to_string_lossy();

            Config::new(input, "u", "k")
                .save_to_path(&config_path_str)
                .await
                .unwrap();

            let loaded = Config::load_from_path(&config_path_str).await.unwrap();
            assert_eq!(loaded.server, expected, "input '{input}'");
        }
    }

    #[test]
    fn test_log_file_path_skipped_when_none() {
        let config = Config::new("https://ftc-api.example.com", "u", "k");
        let toml_string = toml::to_string(&config).unwrap();
        assert!(!toml_string.contains("log_file_path"));
        assert!(toml_string.contains("server = \"https://ftc-api.example.com\""));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::new("https://ftc-api.example.com", "alice", "super-secret");
        let debug = format!("{config:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[tokio::test]
    async fn test_config_malformed_toml_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("malformed_config.toml");

        tokio::fs::write(&config_path, "server = \"https://x\"\n[invalid_section\n")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[tokio::test]
    async fn test_config_load_from_nonexistent_path() {
        let result = Config::load_from_path("/nonexistent/path/config.toml").await;
        assert!(matches!(result.unwrap_err(), AppError::Io(_)));
    }

    #[test]
    fn test_get_config_and_log_paths() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("ftc_events"));
        assert!(config_path.ends_with("config.toml"));

        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains("ftc_events"));
        assert!(log_dir_path.ends_with("logs"));
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::SERVER, "https://env.example.com/v2.0");
            std::env::set_var(env_vars::USERNAME, "env-user");
            std::env::set_var(env_vars::AUTHORIZATION_KEY, "env-key");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "7");
            std::env::set_var(env_vars::ACCEPT_INVALID_CERTS, "TRUE");
        }

        let mut config = Config::new("https://file.example.com", "file-user", "file-key");
        config.apply_env_overrides();

        assert_eq!(config.server, "https://env.example.com/v2.0");
        assert_eq!(config.username, "env-user");
        assert_eq!(config.authorization_key, "env-key");
        assert_eq!(config.http_timeout_seconds, 7);
        assert!(config.accept_invalid_certs);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_env_values_ignored() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::HTTP_TIMEOUT, "soon");
            std::env::set_var(env_vars::ACCEPT_INVALID_CERTS, "maybe");
        }

        let mut config = Config::new("https://file.example.com", "u", "k");
        config.apply_env_overrides();
        assert_eq!(config.http_timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECONDS);
        assert!(!config.accept_invalid_certs);

        clear_env();
    }

    #[test]
    fn test_parse_bool_flag() {
        assert_eq!(parse_bool_flag("1"), Some(true));
        assert_eq!(parse_bool_flag(" Yes "), Some(true));
        assert_eq!(parse_bool_flag("off"), Some(false));
        assert_eq!(parse_bool_flag(""), None);
    }
}
