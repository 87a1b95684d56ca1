//! Per-site resolution: fetch, extract, measure, pick the best
//!
//! This is the unit of per-row work in the batch pipeline. Everything that
//! can go wrong below this point is absorbed into the empty "no logo
//! found" result so a batch over thousands of rows keeps moving when some
//! fraction of the target sites is down.

use crate::logo::{extract_candidates, fetch_page, probe_image};
use crate::{SiteError, SiteResult};
use reqwest::Client;
use scraper::Html;
use url::Url;

/// Picks the largest candidate by pixel area
///
/// Probes every candidate in order and keeps the one with the strictly
/// greatest area, so the earliest of equal-area candidates wins. This is a
/// full scan: a later candidate can always be larger, so there is no valid
/// early exit. Candidates that fail to probe are logged and skipped.
///
/// # Returns
///
/// The winning candidate's URL, or the empty string when nothing probes
/// successfully.
pub async fn select_best_logo(client: &Client, candidates: &[Url]) -> String {
    let mut best_url = String::new();
    let mut best_area: u64 = 0;

    for candidate in candidates {
        let (width, height) = match probe_image(client, candidate).await {
            Ok(dimensions) => dimensions,
            Err(e) => {
                tracing::debug!("skipping candidate: {}", e);
                continue;
            }
        };

        tracing::debug!("considering logo {} ({}x{})", candidate, width, height);
        let area = u64::from(width) * u64::from(height);
        if area > best_area {
            best_area = area;
            best_url = candidate.to_string();
        }
    }

    best_url
}

/// Resolves the best logo URL for a website
///
/// Fetches the page, extracts candidates, and selects the largest. All
/// failures, from an unparseable URL to an unreachable host, are reduced
/// to the empty string after a stderr diagnostic; this function never
/// fails the caller.
pub async fn resolve_site(client: &Client, website_url: &str) -> String {
    match try_resolve(client, website_url).await {
        Ok(logo_url) => logo_url,
        Err(e) => {
            tracing::warn!("Error fetching website {}: {}", website_url, e);
            String::new()
        }
    }
}

async fn try_resolve(client: &Client, website_url: &str) -> SiteResult<String> {
    let base_url = Url::parse(website_url).map_err(|source| SiteError::InvalidUrl {
        url: website_url.to_string(),
        source,
    })?;

    let body = fetch_page(client, &base_url).await?;

    // Parse and extract in one scope: the scraper DOM is not Send, so it
    // must not be held across the probing awaits.
    let candidates = {
        let document = Html::parse_document(&body);
        extract_candidates(&document, &base_url)
    };

    Ok(select_best_logo(client, &candidates).await)
}
