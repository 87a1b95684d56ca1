//! HTTP fetching for pages and candidates
//!
//! One client configuration serves both the landing-page fetch and the
//! candidate probes: redirects followed, a bounded timeout, and a
//! browser-like User-Agent (plenty of school-district sites and CDNs
//! reject default client identifiers outright).

use crate::{SiteError, SiteResult};
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// Browser-like User-Agent with a trailing tool token.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) Version/26.1 Safari/605.1.15 LogoFinder/0.1";

/// Per-request timeout, shared by page fetches and image probes.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the HTTP client used for all requests
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body text
///
/// Non-success status codes are errors; the caller decides what a failed
/// page fetch means (the resolver absorbs it into "no logo found").
pub async fn fetch_page(client: &Client, url: &Url) -> SiteResult<String> {
    let fetch_err = |source| SiteError::Fetch {
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

    response.text().await.map_err(fetch_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client();
        assert!(client.is_ok());
    }

    #[test]
    fn test_user_agent_looks_like_a_browser() {
        assert!(BROWSER_USER_AGENT.starts_with("Mozilla/5.0"));
        assert!(BROWSER_USER_AGENT.contains("LogoFinder"));
    }
}
