//! Hyperlink extraction and filtering.

use std::collections::HashSet;

use scraper::{Html, Selector};
use url::Url;

/// Elements whose `href` is a navigable hyperlink.
const LINK_SELECTOR: &str = "a[href], area[href]";

/// Extract downloadable links from page markup.
///
/// Every `href` is resolved against `base`. A link is kept when the absolute
/// URL, lower-cased, ends with one of `allowed_extensions` (also lower-cased).
/// The comparison is on the full serialized URL, so a query string or
/// fragment after the extension means no match.
///
/// Results are de-duplicated, keeping first-seen order. Malformed markup
/// never fails; it just yields fewer links.
pub fn extract_links(markup: &str, base: &Url, allowed_extensions: &[String]) -> Vec<String> {
    let document = Html::parse_document(markup);
    let selector = Selector::parse(LINK_SELECTOR).expect("link selector is valid");

    let allowed: Vec<String> = allowed_extensions
        .iter()
        .map(|ext| ext.to_lowercase())
        .collect();

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let absolute = match base.join(href) {
            Ok(url) => url.to_string(),
            Err(e) => {
                tracing::debug!("Skipping unresolvable href '{}': {}", href, e);
                continue;
            }
        };

        if !matches_extension(&absolute, &allowed) {
            continue;
        }

        if seen.insert(absolute.clone()) {
            tracing::debug!("Found link: {}", absolute);
            links.push(absolute);
        }
    }

    links
}

/// Check a URL against lower-cased extension suffixes.
pub fn matches_extension(url: &str, lowercase_extensions: &[String]) -> bool {
    let url = url.to_lowercase();
    lowercase_extensions.iter().any(|ext| url.ends_with(ext.as_str()))
}
