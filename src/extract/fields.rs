//! Field extraction through ordered selector chains
//!
//! Every field of an article is described by a [`SelectorChain`]: a fixed,
//! priority-ordered list of CSS selectors. The first candidate that matches
//! a node carrying a non-empty value wins. When nothing matches the field
//! resolves to its documented default, so extraction never fails.

use crate::record::RawFields;
use scraper::{ElementRef, Html, Selector};
use std::fmt;

/// Placeholder used when no title candidate matches
pub const MISSING_TITLE: &str = "未找到标题";

/// Placeholder used when no publish date candidate matches
pub const MISSING_DATE: &str = "未找到发布时间";

/// Fields pulled out of a page fragment before normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Title,
    PublishDate,
    Link,
    Author,
    AuthorLink,
    /// Full body on detail pages, the summary blurb on listing items
    Content,
    ReadCount,
    CommentCount,
}

impl Field {
    /// Value returned when no candidate of the chain matches
    pub fn default_value(&self) -> &'static str {
        match self {
            Self::Title => MISSING_TITLE,
            Self::PublishDate => MISSING_DATE,
            Self::ReadCount | Self::CommentCount => "0",
            Self::Link | Self::Author | Self::AuthorLink | Self::Content => "",
        }
    }

    /// Field name as it appears in logs and output headers
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::PublishDate => "publish_date",
            Self::Link => "link",
            Self::Author => "author",
            Self::AuthorLink => "author_link",
            Self::Content => "content",
            Self::ReadCount => "read_count",
            Self::CommentCount => "comment_count",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the value of a matched node comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// Trimmed text content of the node
    Text,
    /// Trimmed value of the named attribute
    Attr(&'static str),
}

/// Ordered candidate selectors for one field
#[derive(Debug, Clone, Copy)]
pub struct SelectorChain {
    /// CSS selectors in priority order
    pub candidates: &'static [&'static str],

    /// How a matched node is turned into a value
    pub source: ValueSource,
}

impl SelectorChain {
    pub const fn text(candidates: &'static [&'static str]) -> Self {
        Self {
            candidates,
            source: ValueSource::Text,
        }
    }

    pub const fn attr(candidates: &'static [&'static str], attr: &'static str) -> Self {
        Self {
            candidates,
            source: ValueSource::Attr(attr),
        }
    }

    /// Evaluates the chain against a fragment
    ///
    /// Returns the first non-empty value in candidate priority order, or
    /// `None` when no candidate yields one. Candidates that fail to parse
    /// as CSS are skipped.
    pub fn evaluate(&self, fragment: ElementRef<'_>) -> Option<String> {
        for candidate in self.candidates {
            let selector = match Selector::parse(candidate) {
                Ok(selector) => selector,
                Err(e) => {
                    tracing::warn!("Skipping invalid selector '{}': {:?}", candidate, e);
                    continue;
                }
            };

            for element in fragment.select(&selector) {
                let value = match self.source {
                    ValueSource::Text => element.text().collect::<String>(),
                    ValueSource::Attr(name) => match element.value().attr(name) {
                        Some(value) => value.to_string(),
                        None => continue,
                    },
                };

                let value = value.trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }

        None
    }
}

/// Static field → selector chain mapping for one page template
#[derive(Debug, Clone, Copy)]
pub struct SelectorTable {
    pub entries: &'static [(Field, SelectorChain)],
}

impl SelectorTable {
    /// Returns the chain configured for a field, if any
    pub fn chain(&self, field: Field) -> Option<&SelectorChain> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, chain)| chain)
    }
}

/// Extracts one field from a fragment
///
/// Never fails: a field with no configured chain, or whose chain matches
/// nothing, resolves to [`Field::default_value`].
///
/// # Example
///
/// ```
/// use article_harvest::extract::{extract, Field, SelectorChain, SelectorTable};
/// use scraper::Html;
///
/// static TABLE: SelectorTable = SelectorTable {
///     entries: &[(Field::Title, SelectorChain::text(&["#main-title", "h2", ".title"]))],
/// };
///
/// let html = Html::parse_fragment(r#"<div><span class="title"> Hello </span></div>"#);
/// assert_eq!(extract(html.root_element(), Field::Title, &TABLE), "Hello");
/// assert_eq!(extract(html.root_element(), Field::PublishDate, &TABLE), "未找到发布时间");
/// ```
pub fn extract(fragment: ElementRef<'_>, field: Field, table: &SelectorTable) -> String {
    table
        .chain(field)
        .and_then(|chain| chain.evaluate(fragment))
        .unwrap_or_else(|| field.default_value().to_string())
}

/// Extracts every field of a table from one fragment
///
/// Only fields that actually matched are stored; absent fields are
/// defaulted later by the normalizer.
pub fn extract_fields(fragment: ElementRef<'_>, table: &SelectorTable) -> RawFields {
    let mut raw = RawFields::new();

    for (field, chain) in table.entries {
        if let Some(value) = chain.evaluate(fragment) {
            raw.insert(*field, value);
        }
    }

    raw
}

/// Splits a listing document into per-article fragments
///
/// Container selectors are tried in order; the first selector matching at
/// least one element defines the item set.
pub fn item_fragments<'a>(document: &'a Html, containers: &[&str]) -> Vec<ElementRef<'a>> {
    for container in containers {
        let selector = match Selector::parse(container) {
            Ok(selector) => selector,
            Err(e) => {
                tracing::warn!("Skipping invalid container selector '{}': {:?}", container, e);
                continue;
            }
        };

        let items: Vec<ElementRef<'a>> = document.select(&selector).collect();
        if !items.is_empty() {
            tracing::debug!("Container '{}' matched {} items", container, items.len());
            return items;
        }
    }

    Vec::new()
}
