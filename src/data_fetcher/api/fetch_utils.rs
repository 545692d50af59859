//! Authenticated GET and JSON decoding shared by every accessor

use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::config::Config;
use crate::constants::RESPONSE_PREVIEW_CHARS;
use crate::error::AppError;

/// Performs one authenticated GET and returns the raw body.
///
/// # Errors
/// * `AppError::Transport` - the request could not be sent or the body not read
/// * `AppError::HttpStatus` - the response status is outside 200..300
#[instrument(skip(client, config), fields(url = %url))]
pub(super) async fn fetch_body(client: &Client, config: &Config, url: &Url) -> Result<String, AppError> {
    info!("Fetching data from URL: {url}");

    let response = client
        .get(url.clone())
        .basic_auth(&config.username, Some(&config.authorization_key))
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| {
            error!("Request failed for URL {}: {}", url, e);
            AppError::transport(url.as_str(), e)
        })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        error!("HTTP {} - {} (URL: {})", status_code, reason, url);
        return Err(AppError::http_status(status_code, reason, url.as_str()));
    }

    let body = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::transport(url.as_str(), e)
    })?;

    debug!("Response length: {} bytes", body.len());
    let preview: String = body.chars().take(RESPONSE_PREVIEW_CHARS).collect();
    debug!("Response text (first {RESPONSE_PREVIEW_CHARS} chars): {preview}");

    Ok(body)
}

/// Decodes a response body, wrapping failures with the originating URL.
pub(super) fn decode<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, AppError> {
    serde_json::from_str::<T>(body).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        error!(
            "Response text (first 200 chars): {}",
            body.chars().take(200).collect::<String>()
        );
        AppError::decode(url, e)
    })
}

/// GET + decode.
pub(super) async fn fetch<T: DeserializeOwned>(
    client: &Client,
    config: &Config,
    url: &Url,
) -> Result<T, AppError> {
    let body = fetch_body(client, config, url).await?;
    decode(&body, url.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::TeamListing;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(server: &str) -> Config {
        Config::new(server, "user", "key")
    }

    fn url_for(server: &MockServer, route: &str) -> Url {
        Url::parse(&format!("{}{}", server.uri(), route)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_sends_basic_auth_and_decodes() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/2024/teams"))
            .and(header("authorization", "Basic dXNlcjprZXk="))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"teams":[{"teamNumber":12345,"nameShort":"X"}],"pageTotal":1}"#,
            ))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = test_config(&mock_server.uri());
        let listing: TeamListing = fetch(
            &Client::new(),
            &config,
            &url_for(&mock_server, "/2024/teams"),
        )
        .await
        .unwrap();

        assert_eq!(listing.teams.len(), 1);
        assert_eq!(listing.teams[0].team_number, 12345);
        assert_eq!(listing.teams[0].name_short.as_deref(), Some("X"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_status_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not here"))
            .mount(&mock_server)
            .await;

        let config = test_config(&mock_server.uri());
        let url = url_for(&mock_server, "/2024/events");
        let err = fetch_body(&Client::new(), &config, &url).await.unwrap_err();

        match err {
            AppError::HttpStatus { status, reason, url: failed_url } => {
                assert_eq!(status, 404);
                assert_eq!(reason, "Not Found");
                assert_eq!(failed_url, url.as_str());
            }
            other => panic!("Expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_not_modified_status_is_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(304))
            .mount(&mock_server)
            .await;

        let config = test_config(&mock_server.uri());
        let err = fetch_body(&Client::new(), &config, &url_for(&mock_server, "/2024"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(304));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"teams\": [}"))
            .mount(&mock_server)
            .await;

        let config = test_config(&mock_server.uri());
        let result: Result<TeamListing, AppError> =
            fetch(&Client::new(), &config, &url_for(&mock_server, "/2024/teams")).await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Decode { .. }));
        assert!(err.is_malformed_json());
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind then drop a listener so nothing is accepting on the port
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let server = format!("http://{addr}");
        let config = test_config(&server);
        let url = Url::parse(&format!("{server}/2024")).unwrap();

        let err = fetch_body(&Client::new(), &config, &url).await.unwrap_err();
        assert!(err.is_transport(), "expected transport error, got {err:?}");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_decode_wraps_url() {
        let err = decode::<TeamListing>("42", "https://api.example.com/2024/teams").unwrap_err();
        match err {
            AppError::Decode { url, .. } => assert_eq!(url, "https://api.example.com/2024/teams"),
            other => panic!("Expected Decode, got {other:?}"),
        }
    }
}
