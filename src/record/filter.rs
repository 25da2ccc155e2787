use crate::record::ArticleRecord;

/// Filters records by a keyword found in the title or author
///
/// Matching is case-insensitive. A blank keyword keeps every record.
///
/// # Examples
///
/// ```
/// use article_harvest::record::filter_records;
/// use article_harvest::ArticleRecord;
///
/// let records: Vec<ArticleRecord> = Vec::new();
/// assert!(filter_records(&records, "rust").is_empty());
/// ```
pub fn filter_records<'a>(records: &'a [ArticleRecord], keyword: &str) -> Vec<&'a ArticleRecord> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| {
            record.title.to_lowercase().contains(&keyword)
                || record.author.to_lowercase().contains(&keyword)
        })
        .collect()
}
