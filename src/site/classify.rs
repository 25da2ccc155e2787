use url::Url;

/// Path segment marking an individual post
const DETAIL_SEGMENT: &str = "p";

/// Kind of page a start URL points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// A single full article
    Detail,
    /// Multiple article summaries, possibly paginated
    Listing,
}

impl PageKind {
    /// Returns true if the page kind can be paginated
    pub fn is_paginated(&self) -> bool {
        matches!(self, Self::Listing)
    }
}

/// Classifies a URL as a detail or listing page from its shape alone
///
/// A URL whose path contains a `p` segment followed by at least one more
/// segment (e.g. `/alice/p/123.html`) is a detail page. Anything else,
/// including strings that are not URLs, is a listing.
///
/// # Examples
///
/// ```
/// use article_harvest::site::{classify, PageKind};
///
/// assert_eq!(classify("https://site/p/123"), PageKind::Detail);
/// assert_eq!(classify("https://site/"), PageKind::Listing);
/// ```
pub fn classify(url: &str) -> PageKind {
    let Ok(parsed) = Url::parse(url) else {
        return PageKind::Listing;
    };

    let Some(segments) = parsed.path_segments() else {
        return PageKind::Listing;
    };

    let segments: Vec<&str> = segments.collect();
    let is_detail = segments
        .windows(2)
        .any(|pair| pair[0] == DETAIL_SEGMENT && !pair[1].is_empty());

    if is_detail {
        PageKind::Detail
    } else {
        PageKind::Listing
    }
}
