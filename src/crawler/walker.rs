//! Listing walker - pagination and record accumulation
//!
//! A walk moves through `Fetching(n) → Extracting(n) → Fetching(n + 1)`
//! until one of the stop conditions fires:
//! - the start URL is a detail page (one fetch, one record)
//! - a listing page contributes no new records
//! - the accumulated count reaches the target
//! - the page ceiling is reached
//!
//! A failed fetch aborts the whole walk; records gathered from earlier
//! pages are discarded so that a partial result is never mistaken for an
//! exhausted site. Problems with single listing items are logged and the
//! item is skipped.

use crate::crawler::fetcher::Fetcher;
use crate::extract::{extract_fields, item_fragments, Field};
use crate::record::{normalize, ArticleRecord, SourceKind};
use crate::site::{site_origin, PageKind, SiteProfile};
use crate::{HarvestError, Result};
use scraper::Html;
use std::collections::HashSet;

/// Why a walk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Detail pages have no pagination
    SinglePage,
    /// A listing page yielded no new records
    Exhausted,
    /// The accumulated count reached the target
    TargetReached,
    /// The configured page ceiling was hit
    PageLimit,
}

/// Decision taken after a page has been extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    Continue,
    Stop(StopReason),
}

/// Decides whether to fetch another page
///
/// # Arguments
///
/// * `kind` - Classification of the start URL
/// * `new_records` - Records the current page contributed
/// * `accumulated` - Records gathered so far, current page included
/// * `target` - Requested record count; `None` means no limit
/// * `page` - Number of the page just extracted (1-based)
/// * `max_pages` - Page ceiling
pub fn next_step(
    kind: PageKind,
    new_records: usize,
    accumulated: usize,
    target: Option<usize>,
    page: u32,
    max_pages: u32,
) -> PageOutcome {
    if !kind.is_paginated() {
        return PageOutcome::Stop(StopReason::SinglePage);
    }

    if new_records == 0 {
        return PageOutcome::Stop(StopReason::Exhausted);
    }

    if target.is_some_and(|target| accumulated >= target) {
        return PageOutcome::Stop(StopReason::TargetReached);
    }

    if page >= max_pages {
        return PageOutcome::Stop(StopReason::PageLimit);
    }

    PageOutcome::Continue
}

/// Result of a completed walk
#[derive(Debug, Clone)]
pub struct Walk {
    /// Records in the order they were found
    pub records: Vec<ArticleRecord>,

    /// Classification of the start URL
    pub kind: PageKind,

    /// Number of pages fetched
    pub pages_fetched: u32,

    /// Which condition ended the walk
    pub stop: StopReason,
}

/// Drives fetch → extract → decide, one page at a time
#[derive(Debug, Clone)]
pub struct Walker {
    fetcher: Fetcher,
    max_pages: u32,
}

impl Walker {
    pub fn new(fetcher: Fetcher, max_pages: u32) -> Self {
        Self {
            fetcher,
            max_pages: max_pages.max(1),
        }
    }

    /// Walks a start URL until a stop condition fires
    ///
    /// # Arguments
    ///
    /// * `start_url` - Listing or detail URL
    /// * `target` - Stop once at least this many records are gathered;
    ///   `None` walks until the site runs out of pages
    ///
    /// # Returns
    ///
    /// * `Ok(Walk)` - Every page was fetched successfully
    /// * `Err(HarvestError)` - The URL is unsupported or a fetch failed
    pub async fn walk(&self, start_url: &str, target: Option<usize>) -> Result<Walk> {
        let profile = SiteProfile::detect(start_url)?;
        let origin = site_origin(start_url).ok_or_else(|| HarvestError::UnsupportedSite {
            url: start_url.to_string(),
            reason: "URL has no origin".to_string(),
        })?;
        let kind = profile.classify(start_url);

        tracing::info!(
            "Walking {} ({:?} profile, {:?} page, target {:?})",
            start_url,
            profile,
            kind,
            target
        );

        let source = SourceKind {
            origin: &origin,
            category: profile.category(),
            listing: kind.is_paginated(),
        };

        let mut records: Vec<ArticleRecord> = Vec::new();
        let mut seen_links: HashSet<String> = HashSet::new();
        let mut page: u32 = 1;

        loop {
            let url = profile.page_url(start_url, page);
            let body = self.fetcher.fetch(&url).await.map_err(|e| {
                tracing::warn!(
                    "Aborting walk at page {}: {} ({} records discarded)",
                    page,
                    e,
                    records.len()
                );
                e
            })?;

            let found = match kind {
                PageKind::Detail => vec![extract_detail(&body, &url, profile, &source)],
                PageKind::Listing => extract_listing(&body, profile, &source),
            };

            let found_count = found.len();
            let mut new_records = 0;
            for record in found {
                if !record.link.is_empty() && !seen_links.insert(record.link.clone()) {
                    tracing::debug!("Skipping duplicate {}", record.link);
                    continue;
                }
                records.push(record);
                new_records += 1;
            }

            tracing::info!(
                "Page {}: {} items, {} new, {} total",
                page,
                found_count,
                new_records,
                records.len()
            );

            match next_step(kind, new_records, records.len(), target, page, self.max_pages) {
                PageOutcome::Continue => page += 1,
                PageOutcome::Stop(stop) => {
                    tracing::info!(
                        "Walk finished after {} page(s): {:?}, {} records",
                        page,
                        stop,
                        records.len()
                    );
                    return Ok(Walk {
                        records,
                        kind,
                        pages_fetched: page,
                        stop,
                    });
                }
            }
        }
    }
}

/// Extracts every usable item of a listing page
///
/// Items with neither a title nor a link are skipped.
fn extract_listing(body: &str, profile: SiteProfile, source: &SourceKind<'_>) -> Vec<ArticleRecord> {
    let document = Html::parse_document(body);
    let table = profile.selectors(PageKind::Listing);

    let mut records = Vec::new();
    for (index, item) in item_fragments(&document, profile.item_containers())
        .into_iter()
        .enumerate()
    {
        let raw = extract_fields(item, table);
        if raw.is_blank() {
            tracing::debug!("Skipping item {}: no title or link found", index);
            continue;
        }
        records.push(normalize(&raw, source));
    }

    records
}

/// Extracts the single article of a detail page
///
/// The page URL is the article link.
fn extract_detail(
    body: &str,
    url: &str,
    profile: SiteProfile,
    source: &SourceKind<'_>,
) -> ArticleRecord {
    let document = Html::parse_document(body);
    let mut raw = extract_fields(
        document.root_element(),
        profile.selectors(PageKind::Detail),
    );
    raw.insert(Field::Link, url);
    normalize(&raw, source)
}
