//! Configuration module for Article-Harvest
//!
//! This module handles loading, parsing, validating and saving the TOML
//! settings store: request timeout and retry count, pagination ceiling,
//! output location and the list of candidate sites.
//!
//! # Example
//!
//! ```no_run
//! use article_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Requests time out after {}s", config.settings.timeout);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HarvestSettings, OutputConfig, SiteEntry};

// Re-export parser functions
pub use parser::{
    compute_config_hash, load_config, load_config_with_hash, parse_config, save_config,
    update_settings,
};
