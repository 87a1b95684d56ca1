//! Logo discovery for a single website
//!
//! This module contains the per-site resolution pipeline:
//! - HTTP client construction and page fetching
//! - Candidate extraction from parsed HTML
//! - Probing candidates for their pixel dimensions
//! - Picking the best candidate by area

mod extract;
mod fetcher;
mod probe;
mod resolver;

pub use extract::extract_candidates;
pub use fetcher::{build_http_client, fetch_page, BROWSER_USER_AGENT};
pub use probe::probe_image;
pub use resolver::{resolve_site, select_best_logo};
