use url::Url;

/// Query parameter carrying the listing page number
const PAGE_PARAM: &str = "page";

/// Builds the URL of a listing page
///
/// Page 1 is the base URL itself. Later pages set the `page` query
/// parameter: it is appended after any existing query (`&`) or starts a new
/// one (`?`), replaces a `page` pair already present in the base, and goes
/// before the fragment. A malformed query makes the site serve page 1
/// again, which would look like a crawl of identical pages.
///
/// # Examples
///
/// ```
/// use article_harvest::site::page_url;
///
/// assert_eq!(page_url("https://www.cnblogs.com/", 1), "https://www.cnblogs.com/");
/// assert_eq!(page_url("https://www.cnblogs.com/", 2), "https://www.cnblogs.com/?page=2");
/// assert_eq!(page_url("https://site/list?tag=rust", 3), "https://site/list?tag=rust&page=3");
/// assert_eq!(page_url("https://site/list#top", 2), "https://site/list?page=2#top");
/// ```
pub fn page_url(base: &str, page: u32) -> String {
    if page <= 1 {
        return base.to_string();
    }

    let mut url = match Url::parse(base) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!("Appending page to unparsable URL '{}': {}", base, e);
            let separator = if base.contains('?') { '&' } else { '?' };
            return format!("{}{}{}={}", base, separator, PAGE_PARAM, page);
        }
    };

    let has_page = url.query_pairs().any(|(key, _)| key == PAGE_PARAM);
    if has_page {
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != PAGE_PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        url.query_pairs_mut().clear().extend_pairs(kept);
    }

    url.query_pairs_mut()
        .append_pair(PAGE_PARAM, &page.to_string());

    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_is_base() {
        assert_eq!(page_url("https://site/", 1), "https://site/");
        assert_eq!(page_url("https://site/?tag=a", 1), "https://site/?tag=a");
        assert_eq!(page_url("https://site/", 0), "https://site/");
    }

    #[test]
    fn test_question_mark_without_query() {
        assert_eq!(page_url("https://site/", 2), "https://site/?page=2");
        assert_eq!(page_url("https://site/blog", 10), "https://site/blog?page=10");
    }

    #[test]
    fn test_ampersand_with_query() {
        assert_eq!(page_url("https://site/?tag=a", 2), "https://site/?tag=a&page=2");
        assert_eq!(
            page_url("https://site/search?q=rust&sort=new", 4),
            "https://site/search?q=rust&sort=new&page=4"
        );
    }

    #[test]
    fn test_fragment_stays_after_query() {
        let built = page_url("https://www.cnblogs.com/alice/#top", 2);
        assert_eq!(built, "https://www.cnblogs.com/alice/?page=2#top");

        let parsed = Url::parse(&built).unwrap();
        assert_eq!(parsed.query(), Some("page=2"));
        assert_eq!(parsed.fragment(), Some("top"));

        assert_eq!(
            page_url("https://site/list?tag=a#comments", 3),
            "https://site/list?tag=a&page=3#comments"
        );
    }

    #[test]
    fn test_existing_page_is_replaced() {
        assert_eq!(page_url("https://site/?page=3", 2), "https://site/?page=2");
        assert_eq!(
            page_url("https://site/list?page=3&tag=rust", 4),
            "https://site/list?tag=rust&page=4"
        );

        let parsed = Url::parse(&page_url("https://site/?page=3&tag=a", 5)).unwrap();
        let pages: Vec<String> = parsed
            .query_pairs()
            .filter(|(key, _)| key == "page")
            .map(|(_, value)| value.into_owned())
            .collect();
        assert_eq!(pages, vec!["5".to_string()]);
    }

    #[test]
    fn test_unparsable_base_falls_back_to_suffix() {
        assert_eq!(page_url("not a url", 2), "not a url?page=2");
    }
}
