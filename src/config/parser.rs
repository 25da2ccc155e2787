use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigResult;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use article_harvest::config::load_config;
///
/// let config = load_config(Path::new("harvest.toml")).unwrap();
/// println!("Timeout: {}s", config.settings.timeout);
/// ```
pub fn load_config(path: &Path) -> ConfigResult<Config> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
pub fn parse_config(content: &str) -> ConfigResult<Config> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// This is logged with every run so results can be tied to the
/// configuration revision that produced them.
pub fn compute_config_hash(path: &Path) -> ConfigResult<String> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> ConfigResult<(Config, String)> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

/// Validates a configuration and writes it to the given path
pub fn save_config(config: &Config, path: &Path) -> ConfigResult<()> {
    validate(config)?;
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Rewrites the timeout and retry settings of an existing config file
///
/// Sites and output settings are preserved. Nothing is written if the
/// updated configuration fails validation.
pub fn update_settings(
    path: &Path,
    timeout: Option<u64>,
    retry_times: Option<u32>,
) -> ConfigResult<Config> {
    let mut config = load_config(path)?;

    if let Some(timeout) = timeout {
        config.settings.timeout = timeout;
    }
    if let Some(retry_times) = retry_times {
        config.settings.retry_times = retry_times;
    }

    save_config(&config, path)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const VALID_CONFIG: &str = r#"
[settings]
timeout = 15
retry-times = 2
max-articles = 50
default-site = "personal"

[output]
base-name = "posts"
directory = "./out"

[[sites]]
name = "cnblogs"
url = "https://www.cnblogs.com/"

[[sites]]
name = "personal"
url = "https://kirkzheng.github.io/"
"#;

    #[test]
    fn test_load_valid_config() {
        let file = create_temp_config(VALID_CONFIG);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.settings.timeout, 15);
        assert_eq!(config.settings.retry_times, 2);
        assert_eq!(config.settings.max_articles, Some(50));
        assert_eq!(config.settings.max_pages, 10_000);
        assert_eq!(config.output.base_name, "posts");
        assert_eq!(config.sites.len(), 2);
        assert_eq!(config.default_site().unwrap().name, "personal");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.settings.timeout, 10);
        assert_eq!(config.settings.retry_times, 3);
        assert_eq!(config.output.base_name, "articles");
        assert!(config.sites.is_empty());
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/harvest.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let file = create_temp_config("[settings]\ntimeout = 0\n");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_update_settings_preserves_sites() {
        let file = create_temp_config(VALID_CONFIG);

        let updated = update_settings(file.path(), Some(30), Some(5)).unwrap();
        assert_eq!(updated.settings.timeout, 30);

        let reloaded = load_config(file.path()).unwrap();
        assert_eq!(reloaded.settings.timeout, 30);
        assert_eq!(reloaded.settings.retry_times, 5);
        assert_eq!(reloaded.settings.max_articles, Some(50));
        assert_eq!(reloaded.sites, updated.sites);
        assert_eq!(reloaded.sites[1].url, "https://kirkzheng.github.io/");
    }

    #[test]
    fn test_update_settings_rejects_invalid_values() {
        let file = create_temp_config(VALID_CONFIG);
        let before = compute_config_hash(file.path()).unwrap();

        let result = update_settings(file.path(), Some(0), None);
        assert!(result.is_err());

        // File is left untouched
        let after = compute_config_hash(file.path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_compute_config_hash() {
        let file = create_temp_config("test content");

        let hash1 = compute_config_hash(file.path()).unwrap();
        let hash2 = compute_config_hash(file.path()).unwrap();

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_different_content_different_hash() {
        let file1 = create_temp_config("content 1");
        let file2 = create_temp_config("content 2");

        let hash1 = compute_config_hash(file1.path()).unwrap();
        let hash2 = compute_config_hash(file2.path()).unwrap();

        assert_ne!(hash1, hash2);
    }
}
