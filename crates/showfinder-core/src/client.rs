//! HTTP client for the TVMaze API
//!
//! Thin JSON-over-GET wrapper around `reqwest`. Every call is a single
//! attempt: failures go straight back to the caller.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::error::{Result, ShowfinderError};
use crate::types::DEFAULT_PLACEHOLDER_POSTER;
use crate::url::{DEFAULT_BASE_URL, is_valid_base_url};

const USER_AGENT: &str = concat!("showfinder/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root (default: "https://api.tvmaze.com")
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Poster path substituted for shows without an image
    pub placeholder_poster: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: USER_AGENT.to_string(),
            placeholder_poster: DEFAULT_PLACEHOLDER_POSTER.to_string(),
        }
    }
}

/// HTTP client wrapper for TVMaze
#[derive(Debug)]
pub struct TvMazeClient {
    client: reqwest::Client,
    base_url: String,
}

impl TvMazeClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns `HttpError` if the underlying client cannot be built
    pub fn new() -> Result<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `InvalidUrl` if `base_url` is not an absolute http(s) URL
    /// - `HttpError` if the underlying client cannot be built
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        if !is_valid_base_url(&config.base_url) {
            return Err(ShowfinderError::InvalidUrl(config.base_url.clone()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(ShowfinderError::HttpError)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// API root this client talks to, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch `url` and decode the JSON body
    ///
    /// # Errors
    /// - `HttpError` - transport failure or unreadable body
    /// - `Status` - the server answered with a non-2xx status
    /// - `ParseError` - the body is not the expected JSON shape
    #[instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(%url, "TVMaze API request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ShowfinderError::HttpError)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "TVMaze API error status");
            return Err(ShowfinderError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(ShowfinderError::HttpError)?;
        serde_json::from_str(&body).map_err(|e| ShowfinderError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> ClientConfig {
        ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        }
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.tvmaze.com");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("showfinder/"));
        assert_eq!(config.placeholder_poster, "../imgs/missing.png");
    }

    #[test]
    fn test_client_creation() {
        let client = TvMazeClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_invalid_base_url() {
        let config = ClientConfig {
            base_url: "api.tvmaze.com".to_string(),
            ..ClientConfig::default()
        };
        match TvMazeClient::with_config(&config) {
            Err(ShowfinderError::InvalidUrl(url)) => assert_eq!(url, "api.tvmaze.com"),
            other => panic!("Expected InvalidUrl error, got {:?}", other),
        }
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let config = ClientConfig {
            base_url: "http://localhost:9000/".to_string(),
            ..ClientConfig::default()
        };
        let client = TvMazeClient::with_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
    }

    #[tokio::test]
    async fn test_get_json_decodes_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/numbers"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[1, 2, 3]"))
            .mount(&server)
            .await;

        let client = TvMazeClient::with_config(&config_for(&server)).unwrap();
        let numbers: Vec<u32> = client
            .get_json(&format!("{}/numbers", server.uri()))
            .await
            .unwrap();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_get_json_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ua"))
            .and(header("user-agent", "showfinder-test/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig {
            user_agent: "showfinder-test/1.0".to_string(),
            ..config_for(&server)
        };
        let client = TvMazeClient::with_config(&config).unwrap();
        let empty: Vec<u32> = client.get_json(&format!("{}/ua", server.uri())).await.unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn test_get_json_reports_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = TvMazeClient::with_config(&config_for(&server)).unwrap();
        let url = format!("{}/broken", server.uri());
        let result: Result<Vec<u32>> = client.get_json(&url).await;
        match result {
            Err(ShowfinderError::Status { status, url: failed }) => {
                assert_eq!(status, 500);
                assert_eq!(failed, url);
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_json_reports_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = TvMazeClient::with_config(&config_for(&server)).unwrap();
        let result: Result<Vec<u32>> = client.get_json(&format!("{}/x", server.uri())).await;
        assert!(matches!(result, Err(ShowfinderError::ParseError(_))));
    }
}
