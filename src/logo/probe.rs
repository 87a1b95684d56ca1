//! Candidate probing: fetch an image URL and measure it
//!
//! Failures are classified so diagnostics can tell a dead URL from a page
//! masquerading as an image from a corrupt payload, but every kind means
//! the same thing to the selector: skip this candidate.

use crate::{ProbeError, ProbeResult};
use image::ImageReader;
use reqwest::Client;
use std::io::Cursor;
use url::Url;

/// Fetches a candidate URL and returns its pixel dimensions
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - Absolute candidate URL
///
/// # Returns
///
/// * `Ok((width, height))` - The candidate decoded as a raster image
/// * `Err(ProbeError)` - Fetch, content-type, or decode failure
pub async fn probe_image(client: &Client, url: &Url) -> ProbeResult<(u32, u32)> {
    let fetch_err = |source| ProbeError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(fetch_err)?
        .error_for_status()
        .map_err(fetch_err)?;

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !content_type.starts_with("image/") {
        return Err(ProbeError::NotAnImage {
            url: url.to_string(),
            content_type,
        });
    }

    let bytes = response.bytes().await.map_err(fetch_err)?;

    // Dimensions come from the image header; no full decode needed.
    let decode_err = |source| ProbeError::Decode {
        url: url.to_string(),
        source,
    };
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?
        .into_dimensions()
        .map_err(decode_err)
}
