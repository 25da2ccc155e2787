use url::Url;

/// Returns the origin (`scheme://host[:port]`) of a URL
///
/// # Examples
///
/// ```
/// use article_harvest::site::site_origin;
///
/// assert_eq!(
///     site_origin("https://www.cnblogs.com/alice/p/1.html").as_deref(),
///     Some("https://www.cnblogs.com")
/// );
/// assert_eq!(site_origin("not a url"), None);
/// ```
pub fn site_origin(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let origin = parsed.origin();
    if origin.is_tuple() {
        Some(origin.ascii_serialization())
    } else {
        None
    }
}

/// Makes a link absolute against the site origin
///
/// A value that already carries a scheme is returned unchanged, as is an
/// empty value. Root-relative paths are prefixed with the origin. Values
/// that cannot be resolved are passed through as-is.
///
/// # Examples
///
/// ```
/// use article_harvest::site::absolutize;
///
/// let origin = "https://www.cnblogs.com";
/// assert_eq!(absolutize("/u/alice", origin), "https://www.cnblogs.com/u/alice");
/// assert_eq!(absolutize("https://other.com/x", origin), "https://other.com/x");
/// ```
pub fn absolutize(raw: &str, origin: &str) -> String {
    let raw = raw.trim();

    if raw.is_empty() || Url::parse(raw).is_ok() {
        return raw.to_string();
    }

    match Url::parse(origin).and_then(|base| base.join(raw)) {
        Ok(resolved) => resolved.to_string(),
        Err(e) => {
            tracing::debug!("Leaving link '{}' unresolved: {}", raw, e);
            raw.to_string()
        }
    }
}
