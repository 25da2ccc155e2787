use serde::{Deserialize, Serialize};

/// Main configuration structure for Article-Harvest
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: HarvestSettings,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub sites: Vec<SiteEntry>,
}

/// Fetch and pagination behavior
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HarvestSettings {
    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Extra attempts after a timeout or network failure
    #[serde(rename = "retry-times", default = "default_retry_times")]
    pub retry_times: u32,

    /// Delay between attempts (milliseconds)
    #[serde(rename = "retry-delay-ms", default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Number of articles to keep; absent means every article found
    #[serde(
        rename = "max-articles",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub max_articles: Option<usize>,

    /// Upper bound on listing pages fetched in one walk
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: u32,

    /// Name of the site used when none is given explicitly
    #[serde(
        rename = "default-site",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub default_site: Option<String>,
}

/// Persistence configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// File stem shared by the JSON and CSV outputs
    #[serde(rename = "base-name", default = "default_base_name")]
    pub base_name: String,

    /// Directory the outputs are written to
    #[serde(default = "default_directory")]
    pub directory: String,
}

/// A candidate site the user can harvest
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SiteEntry {
    /// Short name used to pick the site
    pub name: String,

    /// Listing or detail URL to start from
    pub url: String,
}

fn default_timeout() -> u64 {
    10
}

fn default_retry_times() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    500
}

fn default_max_pages() -> u32 {
    10_000
}

fn default_base_name() -> String {
    "articles".to_string()
}

fn default_directory() -> String {
    ".".to_string()
}

impl Default for HarvestSettings {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            retry_times: default_retry_times(),
            retry_delay_ms: default_retry_delay_ms(),
            max_articles: None,
            max_pages: default_max_pages(),
            default_site: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_name: default_base_name(),
            directory: default_directory(),
        }
    }
}

impl Config {
    /// Returns the default site selection
    ///
    /// This is the site named by `default-site`, or the first configured
    /// site when no default is named.
    pub fn default_site(&self) -> Option<&SiteEntry> {
        match &self.settings.default_site {
            Some(name) => self.site(name),
            None => self.sites.first(),
        }
    }

    /// Looks up a configured site by name
    pub fn site(&self, name: &str) -> Option<&SiteEntry> {
        self.sites.iter().find(|site| site.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(name: &str, url: &str) -> SiteEntry {
        SiteEntry {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_default_site_is_first_when_unnamed() {
        let config = Config {
            sites: vec![
                site("cnblogs", "https://www.cnblogs.com/"),
                site("blog", "https://blog.example.com/"),
            ],
            ..Config::default()
        };

        assert_eq!(config.default_site().unwrap().name, "cnblogs");
    }

    #[test]
    fn test_default_site_by_name() {
        let mut config = Config {
            sites: vec![
                site("cnblogs", "https://www.cnblogs.com/"),
                site("blog", "https://blog.example.com/"),
            ],
            ..Config::default()
        };
        config.settings.default_site = Some("blog".to_string());

        assert_eq!(config.default_site().unwrap().name, "blog");
    }

    #[test]
    fn test_no_sites() {
        let config = Config::default();
        assert!(config.default_site().is_none());
        assert_eq!(config.settings.timeout, 10);
        assert_eq!(config.settings.max_articles, None);
    }
}
