//! Article-Harvest main entry point
//!
//! This is the command-line interface for the Article-Harvest blog scraper.

use anyhow::{bail, Context};
use article_harvest::config::{load_config_with_hash, update_settings, Config};
use article_harvest::crawler::harvest;
use article_harvest::output::{print_records, save_records};
use article_harvest::record::filter_records;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Article-Harvest: structured article extraction for blog sites
///
/// Article-Harvest walks the listing pages (or a single post page) of a
/// blog-hosting site, extracts title, author, date, link, summary and
/// engagement counters, and saves them as JSON and CSV.
#[derive(Parser, Debug)]
#[command(name = "article-harvest")]
#[command(version = "1.0.0")]
#[command(about = "Harvest article records from blog sites", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG", default_value = "harvest.toml")]
    config: PathBuf,

    /// Listing or post URL to harvest (overrides the configured sites)
    #[arg(long, conflicts_with = "site")]
    url: Option<String>,

    /// Name of a configured site to harvest
    #[arg(long)]
    site: Option<String>,

    /// Number of articles to keep (overrides max-articles)
    #[arg(
        short = 'n',
        long,
        conflicts_with = "all",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    max: Option<u64>,

    /// Keep every article found, ignoring max-articles
    #[arg(long)]
    all: bool,

    /// Only show articles whose title or author contains this keyword
    #[arg(long)]
    search: Option<String>,

    /// Base name of the JSON and CSV output files
    #[arg(long)]
    output: Option<String>,

    /// Do not write JSON and CSV files
    #[arg(long)]
    no_save: bool,

    /// Show the configured settings and sites and exit
    #[arg(long)]
    list_sites: bool,

    /// Save a new request timeout (seconds) to the config file and exit
    #[arg(long, value_name = "SECONDS")]
    set_timeout: Option<u64>,

    /// Save a new retry count to the config file and exit
    #[arg(long, value_name = "COUNT")]
    set_retry: Option<u32>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    if cli.set_timeout.is_some() || cli.set_retry.is_some() {
        return handle_update_settings(&cli.config, cli.set_timeout, cli.set_retry);
    }

    let config = load_or_default(&cli.config)?;

    if cli.list_sites {
        handle_list_sites(&config);
        return Ok(());
    }

    handle_harvest(&cli, config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("article_harvest=info,warn"),
            1 => EnvFilter::new("article_harvest=debug,info"),
            2 => EnvFilter::new("article_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration, falling back to defaults when the file is missing
fn load_or_default(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        tracing::warn!(
            "Config file {} not found, using default settings",
            path.display()
        );
        return Ok(Config::default());
    }

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    Ok(config)
}

/// Handles --set-timeout / --set-retry: rewrites the config file
fn handle_update_settings(
    path: &Path,
    timeout: Option<u64>,
    retry_times: Option<u32>,
) -> anyhow::Result<()> {
    let config = update_settings(path, timeout, retry_times)
        .with_context(|| format!("Failed to save configuration to {}", path.display()))?;

    println!("✓ Configuration saved to {}", path.display());
    println!("  Timeout: {}s", config.settings.timeout);
    println!("  Retry times: {}", config.settings.retry_times);

    Ok(())
}

/// Handles --list-sites: shows what would be harvested
fn handle_list_sites(config: &Config) {
    println!("=== Article-Harvest Settings ===\n");

    println!("Requests:");
    println!("  Timeout: {}s", config.settings.timeout);
    println!("  Retry times: {}", config.settings.retry_times);
    println!("  Retry delay: {}ms", config.settings.retry_delay_ms);
    println!("  Max pages: {}", config.settings.max_pages);
    match config.settings.max_articles {
        Some(max) => println!("  Max articles: {}", max),
        None => println!("  Max articles: all"),
    }

    println!("\nOutput:");
    println!("  Directory: {}", config.output.directory);
    println!("  Base name: {}", config.output.base_name);

    let default_name = config.default_site().map(|site| site.name.as_str());
    println!("\nSites ({}):", config.sites.len());
    for site in &config.sites {
        let marker = if Some(site.name.as_str()) == default_name {
            " (default)"
        } else {
            ""
        };
        println!("  - {}: {}{}", site.name, site.url, marker);
    }
}

/// Picks the start URL from the command line or the configured sites
fn resolve_start_url(cli: &Cli, config: &Config) -> anyhow::Result<String> {
    if let Some(url) = &cli.url {
        return Ok(url.clone());
    }

    if let Some(name) = &cli.site {
        return match config.site(name) {
            Some(site) => Ok(site.url.clone()),
            None => bail!("Unknown site '{}'", name),
        };
    }

    match config.default_site() {
        Some(site) => Ok(site.url.clone()),
        None => bail!("No URL given and no sites configured; pass --url"),
    }
}

/// Handles the main harvest operation
async fn handle_harvest(cli: &Cli, mut config: Config) -> anyhow::Result<()> {
    let start_url = resolve_start_url(cli, &config)?;

    let target = if cli.all {
        None
    } else {
        cli.max
            .map(|max| usize::try_from(max).unwrap_or(usize::MAX))
            .or(config.settings.max_articles)
    };

    if let Some(base_name) = &cli.output {
        config.output.base_name = base_name.clone();
    }

    tracing::info!("Harvesting {} (target: {:?})", start_url, target);

    let records = harvest(&config.settings, &start_url, target)
        .await
        .context("Harvest failed")?;

    let shown = filter_records(&records, cli.search.as_deref().unwrap_or(""));
    print_records(&shown, records.len());

    if cli.no_save {
        return Ok(());
    }

    match save_records(&records, &config.output)? {
        Some(saved) => println!(
            "\n✓ Saved to {} and {}",
            saved.json.display(),
            saved.csv.display()
        ),
        None => println!("\nNo articles found, nothing saved"),
    }

    Ok(())
}
