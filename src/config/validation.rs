use crate::config::types::{Config, HarvestSettings, OutputConfig, SiteEntry};
use crate::{ConfigError, ConfigResult};
use std::collections::HashSet;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_settings(&config.settings)?;
    validate_output_config(&config.output)?;
    validate_sites(&config.sites)?;
    validate_default_site(config)?;
    Ok(())
}

/// Validates fetch and pagination settings
fn validate_settings(settings: &HarvestSettings) -> ConfigResult<()> {
    if settings.timeout < 1 || settings.timeout > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout must be between 1 and 300 seconds, got {}",
            settings.timeout
        )));
    }

    if settings.retry_times > 10 {
        return Err(ConfigError::Validation(format!(
            "retry_times must be <= 10, got {}",
            settings.retry_times
        )));
    }

    if settings.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            settings.max_pages
        )));
    }

    if settings.max_articles == Some(0) {
        return Err(ConfigError::Validation(
            "max_articles must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> ConfigResult<()> {
    if config.base_name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "base_name cannot be empty".to_string(),
        ));
    }

    if config.base_name.contains(['/', '\\']) {
        return Err(ConfigError::Validation(format!(
            "base_name must be a file stem, got '{}'",
            config.base_name
        )));
    }

    Ok(())
}

/// Validates the candidate site list
fn validate_sites(sites: &[SiteEntry]) -> ConfigResult<()> {
    let mut names = HashSet::new();

    for site in sites {
        if site.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site name cannot be empty".to_string(),
            ));
        }

        if !names.insert(site.name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "site name '{}' is listed more than once",
                site.name
            )));
        }

        let url = Url::parse(&site.url).map_err(|e| {
            ConfigError::InvalidUrl(format!("Invalid site URL '{}': {}", site.url, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidUrl(format!(
                "Site URL '{}' must use HTTP or HTTPS",
                site.url
            )));
        }
    }

    Ok(())
}

/// Validates that the named default site exists
fn validate_default_site(config: &Config) -> ConfigResult<()> {
    if let Some(name) = &config.settings.default_site {
        if config.site(name).is_none() {
            return Err(ConfigError::UnknownSite(name.clone()));
        }
    }
    Ok(())
}
