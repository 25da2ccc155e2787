//! Article records and their normalization
//!
//! This module defines the canonical [`ArticleRecord`] and the raw field
//! mapping produced by extraction, plus the normalizer that turns one into
//! the other and a keyword filter over finished records.

mod filter;
mod normalize;

pub use filter::filter_records;
pub use normalize::{digits_only, normalize, summarize, SourceKind, SUMMARY_LIMIT};

use crate::extract::Field;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Counter value for sources that do not expose retweets or likes
pub const ZERO_COUNT: &str = "0";

/// Canonical, source-agnostic article representation
///
/// Field order is the column order of CSV output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    /// Site-native date text, not parsed
    pub publish_date: String,
    /// Absolute URL of the article
    pub link: String,
    pub author: String,
    pub author_link: Option<String>,
    pub category: String,
    /// At most 200 characters, ellipsis-terminated when truncated
    pub summary: String,
    pub content: String,
    pub read_count: String,
    pub comment_count: String,
    pub retweet_count: String,
    pub like_count: String,
}

/// Field values extracted from one fragment, before normalization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    values: HashMap<Field, String>,
}

impl RawFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Returns the value, or the field's default when it was not extracted
    pub fn value_or_default(&self, field: Field) -> &str {
        self.get(field).unwrap_or_else(|| field.default_value())
    }

    /// Returns true if neither a title nor a link was extracted
    pub fn is_blank(&self) -> bool {
        self.get(Field::Title).is_none() && self.get(Field::Link).is_none()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(Field, String)> for RawFields {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_fields_defaults() {
        let raw = RawFields::new();
        assert!(raw.is_empty());
        assert!(raw.is_blank());
        assert_eq!(raw.value_or_default(Field::Title), "未找到标题");
        assert_eq!(raw.value_or_default(Field::CommentCount), "0");
    }

    #[test]
    fn test_raw_fields_blank() {
        let mut raw = RawFields::new();
        raw.insert(Field::Author, "alice");
        assert!(raw.is_blank());

        raw.insert(Field::Link, "/alice/p/1.html");
        assert!(!raw.is_blank());
        assert_eq!(raw.len(), 2);
    }
}
