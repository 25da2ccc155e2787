//! Crawler module for page fetching and record harvesting
//!
//! This module contains the core harvesting logic, including:
//! - HTTP fetching with timeouts and retries
//! - Listing pagination and detail page handling
//! - Down-sampling to the requested record count

mod fetcher;
mod sampler;
mod walker;

pub use fetcher::{build_http_client, fetch_url, FetchOptions, Fetcher, BROWSER_USER_AGENT};
pub use sampler::{sample, sample_with_rng};
pub use walker::{next_step, PageOutcome, StopReason, Walk, Walker};

use crate::config::HarvestSettings;
use crate::record::ArticleRecord;
use crate::Result;

/// Runs a complete harvest operation
///
/// This is the main entry point for harvesting. It will:
/// 1. Pick the site profile for the URL (unsupported URLs fail before any request)
/// 2. Build the HTTP client from the settings
/// 3. Walk the listing or detail page
/// 4. Sample the records down to `target` when more were gathered
///
/// # Arguments
///
/// * `settings` - Timeout, retry and pagination settings
/// * `start_url` - Listing or detail URL
/// * `target` - Requested record count; `None` keeps every record found
///
/// # Returns
///
/// * `Ok(Vec<ArticleRecord>)` - Harvest completed successfully
/// * `Err(HarvestError)` - Harvest failed as a whole; no records are returned
pub async fn harvest(
    settings: &HarvestSettings,
    start_url: &str,
    target: Option<usize>,
) -> Result<Vec<ArticleRecord>> {
    let fetcher = Fetcher::new(FetchOptions::from(settings))?;
    let walker = Walker::new(fetcher, settings.max_pages);

    let walk = walker.walk(start_url, target).await?;

    let records = match target {
        Some(max_count) => sample(walk.records, max_count),
        None => walk.records,
    };

    tracing::info!("Harvested {} records from {}", records.len(), start_url);
    Ok(records)
}
