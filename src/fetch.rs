//! Retrieval of shared conversation pages.
//!
//! [`PageSource`] is the seam between the batch runner and the network.
//! [`ShareClient`] is the HTTP implementation used by the CLI.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{StatusCode, Url};
use tracing::debug;

/// Browser-like user agent; share pages are served to browsers.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur while retrieving a page.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid conversation URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Error fetching the page {url}: status code {status}")]
    Status { url: String, status: u16 },
}

/// Anything that can produce the markup of a shared conversation page.
pub trait PageSource {
    /// Fetch the page at `url` and return its body.
    fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}

/// Blocking HTTP client for share pages.
///
/// Holds a cookie store so that redirects which set cookies behave like a
/// browser session.
#[derive(Debug, Clone)]
pub struct ShareClient {
    client: Client,
}

impl ShareClient {
    /// Create a client with the default user agent and timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_options(DEFAULT_USER_AGENT, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom user agent and timeout.
    pub fn with_options(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("text/html,application/xhtml+xml"));

        let client = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }
}

impl PageSource for ShareClient {
    fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "requesting page");

        let request_error = |source| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().map_err(request_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(request_error)
    }
}

/// Conversation id of a share URL: its last non-empty path segment.
///
/// `https://chat.openai.com/share/4ad82157-c4b9` yields `4ad82157-c4b9`.
pub fn conversation_id(url: &str) -> Result<String, FetchError> {
    let invalid = |reason: &str| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    };

    let parsed = Url::parse(url).map_err(|e| invalid(&e.to_string()))?;
    parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(str::to_string)
        .ok_or_else(|| invalid("URL has no path segment to use as conversation id"))
}
