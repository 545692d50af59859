use super::Config;
use crate::error::AppError;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Server cannot be empty and must be an http:// or https:// URL
/// - Username and authorization key cannot be empty
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty
///
/// Validation only inspects the values; it never touches the filesystem.
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    let server = config.server.trim();
    if server.is_empty() {
        return Err(AppError::config_error("Server URL cannot be empty"));
    }

    if !server.starts_with("http://") && !server.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "Server URL must start with http:// or https://, got '{server}'"
        )));
    }

    if reqwest::Url::parse(server).is_err() {
        return Err(AppError::config_error(format!(
            "Server URL '{server}' is not a valid URL"
        )));
    }

    if config.username.trim().is_empty() {
        return Err(AppError::config_error(format!(
            "API username is missing; set it in the config file or {}",
            crate::constants::env_vars::USERNAME
        )));
    }

    if config.authorization_key.trim().is_empty() {
        return Err(AppError::config_error(format!(
            "API authorization key is missing; set it in the config file or {}",
            crate::constants::env_vars::AUTHORIZATION_KEY
        )));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be at least 1 second"));
    }

    if let Some(log_path) = &config.log_file_path
        && log_path.trim().is_empty()
    {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config::new("https://ftc-api.example.com/v2.0", "user", "key")
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());

        let mut local = valid_config();
        local.server = "http://localhost:8080".to_string();
        assert!(validate_config(&local).is_ok());
    }

    #[test]
    fn test_server_rules() {
        for server in ["", "   ", "ftc-api.example.com", "ftp://example.com", "http://"] {
            let mut config = valid_config();
            config.server = server.to_string();
            assert!(
                validate_config(&config).is_err(),
                "server '{server}' should be rejected"
            );
        }
    }

    #[test]
    fn test_missing_credentials_rejected() {
        let mut config = valid_config();
        config.username = String::new();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("FTC_API_USERNAME"));

        let mut config = valid_config();
        config.authorization_key = " ".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("FTC_API_KEY"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = valid_config();
        config.http_timeout_seconds = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_log_file_path_rules() {
        let mut config = valid_config();
        config.log_file_path = Some(String::new());
        assert!(validate_config(&config).is_err());

        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("ftc.log");
        config.log_file_path = Some(nested.to_string_lossy().to_string());
        assert!(validate_config(&config).is_ok());
        assert!(!temp_dir.path().join("a").exists());
    }
}
