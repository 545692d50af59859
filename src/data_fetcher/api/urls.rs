//! URL building utilities for API endpoints

use crate::error::AppError;
use reqwest::Url;

/// Ordered list of query entries. Every entry pushed is emitted, in the
/// order it was pushed; keys may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.entries.push((key.into(), value.to_string()));
        self
    }

    /// Appends an entry only when a value is present.
    pub fn push_opt<T: ToString>(&mut self, key: impl Into<String>, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Builder-style variant of [`QueryParams::push`].
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        QueryParams {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Builds an endpoint URL from the server base, path segments and query.
///
/// Segments are appended after the server's own path and percent-encoded;
/// a trailing `/` on the server is ignored. Query entries are form-encoded
/// in order, and no `?` is added when there are none.
///
/// # Example
/// ```
/// use ftc_events::data_fetcher::api::{QueryParams, build_url};
///
/// let query = QueryParams::new().with("teamNumber", 8393);
/// let url = build_url("https://api.example.com/v2.0/", &["2024", "awards", "USCAFFFAQ"], &query).unwrap();
/// assert_eq!(url.as_str(), "https://api.example.com/v2.0/2024/awards/USCAFFFAQ?teamNumber=8393");
/// ```
pub fn build_url(server: &str, segments: &[&str], query: &QueryParams) -> Result<Url, AppError> {
    let mut url =
        Url::parse(server.trim()).map_err(|e| AppError::invalid_url(server, e.to_string()))?;

    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| AppError::invalid_url(server, "server URL cannot be used as a base"))?;
        path.pop_if_empty();
        path.extend(segments);
    }

    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query.iter());
    }

    Ok(url)
}

/// Builds `{server}/{season}/{segments...}[?query]`.
///
/// # Example
/// ```
/// use ftc_events::data_fetcher::api::{QueryParams, build_season_url};
///
/// let url = build_season_url("https://api.example.com/v2.0", 2024, &["teams"], &QueryParams::new()).unwrap();
/// assert_eq!(url.as_str(), "https://api.example.com/v2.0/2024/teams");
/// ```
pub fn build_season_url(
    server: &str,
    season: i32,
    segments: &[&str],
    query: &QueryParams,
) -> Result<Url, AppError> {
    let season = season.to_string();
    let mut all = Vec::with_capacity(segments.len() + 1);
    all.push(season.as_str());
    all.extend_from_slice(segments);
    build_url(server, &all, query)
}
