//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the harvester, including:
//! - Building HTTP clients with a browser-like header set
//! - GET requests with a bounded per-request timeout
//! - Error classification into timeout, status and network failures
//! - Retrying timeouts and network failures a configured number of times

use crate::config::HarvestSettings;
use crate::{FetchError, FetchErrorKind};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL};
use reqwest::Client;
use std::time::Duration;

/// Desktop browser identification
///
/// The target sites serve reduced content to clients they do not recognize.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

const BROWSER_ACCEPT_LANGUAGE: &str = "zh-CN,zh;q=0.9,en;q=0.8";

/// Request behavior of a [`Fetcher`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Per-request timeout
    pub timeout: Duration,

    /// Extra attempts after a timeout or network failure
    pub retry_times: u32,

    /// Pause between attempts
    pub retry_delay: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            retry_times: 0,
            retry_delay: Duration::from_millis(500),
        }
    }
}

impl From<&HarvestSettings> for FetchOptions {
    fn from(settings: &HarvestSettings) -> Self {
        Self {
            timeout: Duration::from_secs(settings.timeout),
            retry_times: settings.retry_times,
            retry_delay: Duration::from_millis(settings.retry_delay_ms),
        }
    }
}

/// Builds an HTTP client that presents itself as a desktop browser
///
/// # Arguments
///
/// * `timeout` - Upper bound for one whole request, body included
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE),
    );
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));

    Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .default_headers(headers)
        .timeout(timeout)
        .connect_timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL once and returns the document body
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx | `Ok(body)` |
/// | Other status | `HttpStatus(code)` |
/// | Timeout (connect, headers or body) | `Timeout` |
/// | Anything else | `Network(message)` |
pub async fn fetch_url(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::new(
            url,
            FetchErrorKind::HttpStatus(status.as_u16()),
        ));
    }

    response.text().await.map_err(|e| classify_error(url, e))
}

/// Maps a transport error onto the fetch error taxonomy
fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    let kind = if error.is_timeout() {
        FetchErrorKind::Timeout
    } else if let Some(status) = error.status() {
        FetchErrorKind::HttpStatus(status.as_u16())
    } else {
        FetchErrorKind::Network(error.to_string())
    };

    FetchError::new(url, kind)
}

/// Page fetcher with a shared client and retry policy
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    options: FetchOptions,
}

impl Fetcher {
    /// Creates a fetcher with its own HTTP client
    pub fn new(options: FetchOptions) -> Result<Self, reqwest::Error> {
        let client = build_http_client(options.timeout)?;
        Ok(Self { client, options })
    }

    /// Fetches a document, retrying timeouts and network failures
    ///
    /// Status errors are returned immediately. After `retry_times` extra
    /// attempts the last error is returned.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let mut attempt = 0;

        loop {
            match fetch_url(&self.client, url).await {
                Ok(body) => {
                    tracing::debug!("Fetched {} ({} bytes)", url, body.len());
                    return Ok(body);
                }
                Err(e) if e.is_retryable() && attempt < self.options.retry_times => {
                    attempt += 1;
                    tracing::warn!(
                        "Fetch of {} failed ({}), retry {}/{}",
                        url,
                        e.kind,
                        attempt,
                        self.options.retry_times
                    );
                    tokio::time::sleep(self.options.retry_delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
