use serde_json::error::Category;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Transport errors: the request could not be built or sent
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid request URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    // Non-2xx responses
    #[error("API returned HTTP {status} {reason} (URL: {url})")]
    HttpStatus {
        status: u16,
        reason: String,
        url: String,
    },

    // Response body did not decode into the expected structure
    #[error("Failed to decode API response: {source} (URL: {url})")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a transport error for a request that could not be sent
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// Create an invalid URL error
    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error for a response outside 200..300
    pub fn http_status(status: u16, reason: impl Into<String>, url: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            reason: reason.into(),
            url: url.into(),
        }
    }

    /// Create a decode error wrapping the JSON failure
    pub fn decode(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            url: url.into(),
            source,
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// HTTP status code carried by the error, if it came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::HttpStatus { status, .. } => Some(*status),
            AppError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for request construction and network failures
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::Transport { .. } | AppError::InvalidUrl { .. } | AppError::HttpClient(_)
        )
    }

    /// True when the request timed out before a response arrived
    pub fn is_timeout(&self) -> bool {
        matches!(self, AppError::Transport { source, .. } if source.is_timeout())
    }

    /// True when the server answered 404
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// True when the server rejected the credentials (401 or 403)
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// True when the body was not syntactically valid JSON, as opposed to
    /// valid JSON with an unexpected shape
    pub fn is_malformed_json(&self) -> bool {
        matches!(
            self,
            AppError::Decode { source, .. }
                if matches!(source.classify(), Category::Syntax | Category::Eof)
        )
    }
}
