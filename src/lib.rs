//! Logofinder: best-effort logo discovery for organization websites
//!
//! This crate fetches an organization's website, scans it for logo-image
//! candidates with a couple of fallback heuristics, measures each candidate,
//! and keeps the largest. A batch mode runs the resolver over a CSV of
//! organizations and can resume an interrupted run from its partial output.

pub mod batch;
pub mod logo;

use thiserror::Error;

/// Errors from probing a single logo candidate
///
/// All three kinds are handled identically by the selector (skip the
/// candidate) but stay distinguishable in diagnostics.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("error fetching image from {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("URL does not point to an image: {url} (Content-Type: {content_type:?})")]
    NotAnImage { url: String, content_type: String },

    #[error("error decoding image from {url}: {source}")]
    Decode {
        url: String,
        source: image::ImageError,
    },
}

/// Errors from fetching a site's landing page
///
/// Never escapes the resolver: both variants are absorbed into the empty
/// "no logo found" result after logging.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("invalid website URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("request for {url} failed: {source}")]
    Fetch { url: String, source: reqwest::Error },
}

/// Errors that terminate a batch run
///
/// Only structural input problems are fatal; per-row resolution failures
/// never surface here.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for candidate probing
pub type ProbeResult<T> = std::result::Result<T, ProbeError>;

/// Result type alias for page fetching
pub type SiteResult<T> = std::result::Result<T, SiteError>;

/// Result type alias for batch processing
pub type BatchResult<T> = std::result::Result<T, BatchError>;

// Re-export commonly used entry points
pub use batch::{run_batch, LOGO_URL_COLUMN, WEBSITE_COLUMN};
pub use logo::{build_http_client, resolve_site};
