//! HTTP client for downloading snapshot files.

use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Configuration for the download client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Maximum concurrent downloads.
    pub concurrency: usize,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            concurrency: 4, // raw.githubusercontent.com throttles aggressive clients
            timeout: Duration::from_secs(60),
            user_agent: format!("vaxrisk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while retrieving a snapshot.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote file does not exist (not published yet, or a bad date).
    #[error("Remote file not found: {url}")]
    NotFound {
        /// The requested URL.
        url: String,
    },

    /// Server returned an error status.
    #[error("Server error {status} for {url}")]
    ServerError {
        /// HTTP status code.
        status: u16,
        /// The requested URL.
        url: String,
    },
}

/// HTTP client for the daily report and vaccination feeds.
///
/// Failures are returned immediately; a failed session is retried by running
/// again, at which point already cached days are not requested a second time.
#[derive(Debug, Clone)]
pub struct DownloadClient {
    client: Client,
    config: ClientConfig,
}

impl DownloadClient {
    /// Creates a new download client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .pool_max_idle_per_host(config.concurrency)
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Downloads a single file, returning its bytes.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotFound`] on a 404, [`FetchError::ServerError`] on any
    /// other non-success status and [`FetchError::Http`] on transport failures.
    pub async fn download(&self, url: &str) -> Result<Bytes, FetchError> {
        info!(url, "downloading snapshot");
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(FetchError::ServerError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!(url, bytes = body.len(), "snapshot downloaded");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.user_agent.starts_with("vaxrisk/"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = DownloadClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_not_found_message() {
        let err = FetchError::NotFound {
            url: "https://example.com/01-01-2022.csv".into(),
        };
        assert_eq!(
            err.to_string(),
            "Remote file not found: https://example.com/01-01-2022.csv"
        );
    }
}
