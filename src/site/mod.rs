//! Site handling module for Article-Harvest
//!
//! This module provides site profile detection, page classification,
//! pagination URL building and link resolution.
//!
//! A [`SiteProfile`] is chosen once per operation and bundles everything
//! that differs between supported sites: selector tables, listing item
//! containers, the category label and the URL rules.

mod classify;
mod paginate;
mod resolve;

use crate::extract::selectors::{
    CNBLOGS_DETAIL, CNBLOGS_ITEMS, CNBLOGS_LISTING, GENERIC_DETAIL, GENERIC_ITEMS,
    GENERIC_LISTING,
};
use crate::extract::SelectorTable;
use crate::HarvestError;
use url::Url;

// Re-export main functions
pub use classify::{classify, PageKind};
pub use paginate::page_url;
pub use resolve::{absolutize, site_origin};

/// Host suffix served by the cnblogs profile
const CNBLOGS_HOST: &str = "cnblogs.com";

/// Supported site layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteProfile {
    /// cnblogs.com and its subdomains
    Cnblogs,
    /// Any other blog using conventional `article`/`.post` markup
    Generic,
}

impl SiteProfile {
    /// Picks the profile for a start URL
    ///
    /// # Returns
    ///
    /// * `Ok(SiteProfile)` - The profile that handles this URL
    /// * `Err(HarvestError::UnsupportedSite)` - The URL is malformed, is not
    ///   HTTP(S), or has no host
    ///
    /// # Examples
    ///
    /// ```
    /// use article_harvest::site::SiteProfile;
    ///
    /// assert_eq!(SiteProfile::detect("https://www.cnblogs.com/").unwrap(), SiteProfile::Cnblogs);
    /// assert_eq!(SiteProfile::detect("https://blog.example.com/").unwrap(), SiteProfile::Generic);
    /// assert!(SiteProfile::detect("ftp://example.com/").is_err());
    /// ```
    pub fn detect(url: &str) -> Result<Self, HarvestError> {
        let unsupported = |reason: String| HarvestError::UnsupportedSite {
            url: url.to_string(),
            reason,
        };

        let parsed = Url::parse(url).map_err(|e| unsupported(e.to_string()))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(unsupported(format!(
                "only HTTP and HTTPS are supported, got {}",
                parsed.scheme()
            )));
        }

        let host = parsed
            .host_str()
            .map(|h| h.to_lowercase())
            .ok_or_else(|| unsupported("missing host".to_string()))?;

        if host == CNBLOGS_HOST || host.ends_with(&format!(".{}", CNBLOGS_HOST)) {
            Ok(Self::Cnblogs)
        } else {
            Ok(Self::Generic)
        }
    }

    /// Category label stamped on every record from this profile
    pub fn category(&self) -> &'static str {
        match self {
            Self::Cnblogs => "博客园",
            Self::Generic => "博客",
        }
    }

    /// Classifies a start URL for this profile
    pub fn classify(&self, url: &str) -> PageKind {
        classify(url)
    }

    /// Builds the URL of the given listing page
    pub fn page_url(&self, base: &str, page: u32) -> String {
        page_url(base, page)
    }

    /// Container selectors that split a listing page into items
    pub fn item_containers(&self) -> &'static [&'static str] {
        match self {
            Self::Cnblogs => CNBLOGS_ITEMS,
            Self::Generic => GENERIC_ITEMS,
        }
    }

    /// Selector table for the given page kind
    pub fn selectors(&self, kind: PageKind) -> &'static SelectorTable {
        match (self, kind) {
            (Self::Cnblogs, PageKind::Listing) => &CNBLOGS_LISTING,
            (Self::Cnblogs, PageKind::Detail) => &CNBLOGS_DETAIL,
            (Self::Generic, PageKind::Listing) => &GENERIC_LISTING,
            (Self::Generic, PageKind::Detail) => &GENERIC_DETAIL,
        }
    }
}
