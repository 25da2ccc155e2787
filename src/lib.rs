//! Article-Harvest: structured article extraction for blog-hosting sites
//!
//! This crate walks paginated listing pages (or a single detail page) of a
//! blog-hosting site, extracts article fields through ordered selector
//! chains, normalizes them into one canonical record shape and optionally
//! down-samples the result to a requested size.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod record;
pub mod site;

use thiserror::Error;

/// Main error type for a whole harvest operation
///
/// Any of these aborts the operation; no partial results are returned.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("{0}")]
    Fetch(#[from] FetchError),

    #[error("Unsupported site {url}: {reason}")]
    UnsupportedSite { url: String, reason: String },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// A single page fetch that did not produce a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to fetch {url}: {kind}")]
pub struct FetchError {
    /// The URL that was requested
    pub url: String,

    /// What went wrong
    pub kind: FetchErrorKind,
}

/// Classification of fetch failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchErrorKind {
    /// The request did not complete within the configured timeout
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-2xx status
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// Connection, TLS or body-read failure
    #[error("network error: {0}")]
    Network(String),
}

impl FetchError {
    pub fn new(url: impl Into<String>, kind: FetchErrorKind) -> Self {
        Self {
            url: url.into(),
            kind,
        }
    }

    /// Returns true if another attempt may succeed
    ///
    /// Status errors are answers from the server and are never retried.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            FetchErrorKind::Timeout | FetchErrorKind::Network(_)
        )
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Unknown site: {0}")]
    UnknownSite(String),
}

/// Result type alias for harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{harvest, sample, Fetcher, Walker};
pub use extract::{extract, Field};
pub use record::{normalize, ArticleRecord, RawFields};
pub use site::{classify, PageKind, SiteProfile};
