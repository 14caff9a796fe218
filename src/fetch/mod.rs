//! Ratings payload sources.
//!
//! The scraper's DOM walking lives outside this service; what arrives
//! here is its JSON output, either over HTTP from the scrape host or
//! from a local file. Both are abstracted behind [`RatingsSource`] so
//! the ingest path and the CLI don't care which one they're holding.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

/// Errors that can occur while fetching a payload.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A source of raw scraped JSON payloads.
#[async_trait]
pub trait RatingsSource: Send + Sync {
    /// Fetch one payload: a JSON array of scraped player objects.
    async fn fetch_payload(&self) -> Result<String, FetchError>;

    /// Where the payload comes from, for logging.
    fn describe(&self) -> String;
}

/// Configuration for the HTTP source.
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Endpoint serving the scraper's latest payload
    pub payload_url: String,

    /// Request timeout
    pub timeout: Duration,

    /// User agent string
    pub user_agent: String,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            payload_url: "http://localhost:9090/latest.json".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("courtside/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Fetches payloads from the scrape host over HTTP.
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    /// Build an HTTP source, validating the configured URL up front.
    pub fn new(config: HttpSourceConfig) -> Result<Self, FetchError> {
        let url = Url::parse(&config.payload_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", config.payload_url, e)))?;

        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&config.user_agent) {
            headers.insert(USER_AGENT, value);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, url })
    }
}

#[async_trait]
impl RatingsSource for HttpSource {
    async fn fetch_payload(&self) -> Result<String, FetchError> {
        debug!("Fetching payload from {}", self.url);
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let body = response.text().await?;
        info!("Fetched {} bytes from {}", body.len(), self.url);
        Ok(body)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Reads payloads from a local file, for offline ingest and tests.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl RatingsSource for FileSource {
    async fn fetch_payload(&self) -> Result<String, FetchError> {
        debug!("Reading payload from {:?}", self.path);
        let body = tokio::fs::read_to_string(&self.path).await?;
        Ok(body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
