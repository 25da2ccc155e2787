//! Raw field normalization
//!
//! Turns a [`RawFields`] mapping into an [`ArticleRecord`]:
//! - counters keep digits only
//! - links and author links become absolute against the site origin
//! - the summary is derived from the content
//! - constant fields are filled in
//!
//! Normalization never fails; anything that cannot be normalized is passed
//! through or replaced by the field default.

use crate::extract::Field;
use crate::record::{ArticleRecord, RawFields, ZERO_COUNT};
use crate::site::absolutize;

/// Maximum number of characters kept in a summary
pub const SUMMARY_LIMIT: usize = 200;

/// Marker appended to a truncated summary
const ELLIPSIS: &str = "...";

/// Where a set of raw fields came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceKind<'a> {
    /// Origin used to resolve relative links
    pub origin: &'a str,

    /// Category label of the site profile
    pub category: &'a str,

    /// True for listing items, whose content is only a summary blurb
    pub listing: bool,
}

/// Builds the canonical record for one extracted item
pub fn normalize(raw: &RawFields, source: &SourceKind<'_>) -> ArticleRecord {
    let content = raw.value_or_default(Field::Content).trim();
    let summary = summarize(content);

    // Listing items only carry the blurb; keep content in step with it
    let content = if source.listing {
        summary.clone()
    } else {
        content.to_string()
    };

    let author_link = raw
        .get(Field::AuthorLink)
        .map(|link| absolutize(link, source.origin))
        .filter(|link| !link.is_empty());

    ArticleRecord {
        title: raw.value_or_default(Field::Title).to_string(),
        publish_date: raw.value_or_default(Field::PublishDate).to_string(),
        link: absolutize(raw.value_or_default(Field::Link), source.origin),
        author: raw.value_or_default(Field::Author).to_string(),
        author_link,
        category: source.category.to_string(),
        summary,
        content,
        read_count: digits_only(raw.value_or_default(Field::ReadCount)),
        comment_count: digits_only(raw.value_or_default(Field::CommentCount)),
        retweet_count: ZERO_COUNT.to_string(),
        like_count: ZERO_COUNT.to_string(),
    }
}

/// Truncates content to a summary of at most [`SUMMARY_LIMIT`] characters
///
/// # Examples
///
/// ```
/// use article_harvest::record::summarize;
///
/// assert_eq!(summarize("short"), "short");
/// let long = "字".repeat(250);
/// assert_eq!(summarize(&long), format!("{}...", "字".repeat(200)));
/// ```
pub fn summarize(content: &str) -> String {
    match content.char_indices().nth(SUMMARY_LIMIT) {
        Some((cut, _)) => format!("{}{}", &content[..cut], ELLIPSIS),
        None => content.to_string(),
    }
}

/// Strips label text from a counter, keeping ASCII digits only
///
/// A counter without any digits becomes `"0"`.
///
/// # Examples
///
/// ```
/// use article_harvest::record::digits_only;
///
/// assert_eq!(digits_only("阅读(1024)"), "1024");
/// assert_eq!(digits_only("12 views"), "12");
/// assert_eq!(digits_only("评论"), "0");
/// ```
pub fn digits_only(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        ZERO_COUNT.to_string()
    } else {
        digits
    }
}
