//! Candidate extraction from a parsed HTML document
//!
//! Two fallback passes, evaluated in fixed priority order:
//! 1. `<img>` elements that look like a logo (URL contains "logo" or
//!    "brand", or the alt text mentions "logo")
//! 2. `<link rel="icon">` / `<link rel="shortcut icon">` favicons
//!
//! Candidates are yielded in document order within each pass, with pass 2
//! strictly after pass 1, so the selector's first-max tie-break is stable.
//! Duplicates are not removed; a duplicate can never beat the first
//! occurrence on a strict area comparison.

use scraper::{Html, Selector};
use url::Url;

/// Extracts logo-image candidate URLs from a document
///
/// # Arguments
///
/// * `document` - The parsed HTML document
/// * `base_url` - The page URL, for resolving relative sources
///
/// # Returns
///
/// Absolute candidate URLs, highest-priority first. Empty when the page
/// has no qualifying elements.
pub fn extract_candidates(document: &Html, base_url: &Url) -> Vec<Url> {
    let mut candidates = Vec::new();

    // Pass 1: <img> tags that look like a logo
    if let Ok(img_selector) = Selector::parse("img") {
        for element in document.select(&img_selector) {
            let Some(resolved) = element
                .value()
                .attr("src")
                .and_then(|src| resolve_source(src, base_url))
            else {
                continue;
            };

            let url_lower = resolved.as_str().to_lowercase();
            let alt_lower = element
                .value()
                .attr("alt")
                .map(str::to_lowercase)
                .unwrap_or_default();

            if url_lower.contains("logo") || url_lower.contains("brand") || alt_lower.contains("logo")
            {
                candidates.push(resolved);
            }
        }
    }

    // Pass 2: favicon links, after all pass-1 results
    if let Ok(link_selector) = Selector::parse("link[rel][href]") {
        for element in document.select(&link_selector) {
            let rel = element.value().attr("rel").unwrap_or("").trim();
            if !rel.eq_ignore_ascii_case("icon") && !rel.eq_ignore_ascii_case("shortcut icon") {
                continue;
            }

            if let Some(resolved) = element
                .value()
                .attr("href")
                .and_then(|href| resolve_source(href, base_url))
            {
                candidates.push(resolved);
            }
        }
    }

    candidates
}

/// Resolves a source attribute to an absolute URL
///
/// Returns None for empty attributes and for hrefs the base URL cannot
/// absorb; such elements are silently skipped.
fn resolve_source(source: &str, base_url: &Url) -> Option<Url> {
    let source = source.trim();
    if source.is_empty() {
        return None;
    }
    base_url.join(source).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com/about").unwrap()
    }

    fn candidates(html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        extract_candidates(&document, &base_url())
            .into_iter()
            .map(|u| u.to_string())
            .collect()
    }

    #[test]
    fn test_img_src_containing_logo() {
        let found = candidates(r#"<img src="/img/logo-small.png">"#);
        assert_eq!(found, vec!["https://example.com/img/logo-small.png"]);
    }

    #[test]
    fn test_img_src_containing_brand() {
        let found = candidates(r#"<img src="/assets/brand-mark.svg">"#);
        assert_eq!(found, vec!["https://example.com/assets/brand-mark.svg"]);
    }

    #[test]
    fn test_img_alt_containing_logo() {
        let found = candidates(r#"<img src="/header.png" alt="District Logo">"#);
        assert_eq!(found, vec!["https://example.com/header.png"]);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let found = candidates(r#"<img src="/IMG/LOGO.PNG">"#);
        assert_eq!(found, vec!["https://example.com/IMG/LOGO.PNG"]);
    }

    #[test]
    fn test_unrelated_img_skipped() {
        let found = candidates(r#"<img src="/photos/campus.jpg" alt="Our campus">"#);
        assert!(found.is_empty());
    }

    #[test]
    fn test_img_without_src_skipped() {
        let found = candidates(r#"<img alt="logo"><img src="" alt="logo">"#);
        assert!(found.is_empty());
    }

    #[test]
    fn test_icon_link() {
        let found = candidates(r#"<link rel="icon" href="/favicon.ico">"#);
        assert_eq!(found, vec!["https://example.com/favicon.ico"]);
    }

    #[test]
    fn test_shortcut_icon_link() {
        let found = candidates(r#"<link rel="shortcut icon" href="/favicon.png">"#);
        assert_eq!(found, vec!["https://example.com/favicon.png"]);
    }

    #[test]
    fn test_rel_match_is_case_insensitive() {
        let found = candidates(r#"<link rel="Shortcut Icon" href="/favicon.ico">"#);
        assert_eq!(found, vec!["https://example.com/favicon.ico"]);
    }

    #[test]
    fn test_stylesheet_link_skipped() {
        let found = candidates(r#"<link rel="stylesheet" href="/site.css">"#);
        assert!(found.is_empty());
    }

    #[test]
    fn test_icons_come_after_imgs() {
        let html = r#"
            <html><head>
                <link rel="icon" href="/favicon.ico">
            </head><body>
                <img src="/img/logo.png" alt="Logo">
            </body></html>
        "#;
        let found = candidates(html);
        assert_eq!(
            found,
            vec![
                "https://example.com/img/logo.png",
                "https://example.com/favicon.ico",
            ]
        );
    }

    #[test]
    fn test_document_order_within_a_pass() {
        let html = r#"
            <img src="/first-logo.png">
            <img src="/second-logo.png">
        "#;
        let found = candidates(html);
        assert_eq!(
            found,
            vec![
                "https://example.com/first-logo.png",
                "https://example.com/second-logo.png",
            ]
        );
    }

    #[test]
    fn test_absolute_src_kept_as_is() {
        let found = candidates(r#"<img src="https://cdn.example.net/logo.png">"#);
        assert_eq!(found, vec!["https://cdn.example.net/logo.png"]);
    }

    #[test]
    fn test_duplicates_not_removed() {
        let html = r#"<img src="/logo.png"><img src="/logo.png">"#;
        assert_eq!(candidates(html).len(), 2);
    }

    #[test]
    fn test_empty_document() {
        assert!(candidates("<html><body></body></html>").is_empty());
    }
}
