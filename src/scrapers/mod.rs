//! Discovery of sample projects on vendor documentation sites.
//!
//! A single [`Discoverer`] drives every platform. What differs between
//! platforms is captured by a [`ScrapeRules`] implementation:
//!
//! | Platform | Module | Listing pages | Seeds | Dedup |
//! |----------|--------|---------------|-------|-------|
//! | Android | [`android`] | Kotlin samples index | before scraped entries | by source URL |
//! | Apple | [`apple`] | ten documentation categories | after scraped entries | none |
//!
//! Discovery always yields the platform's seed catalog. Listing pages are
//! best effort: a page that cannot be fetched is logged, recorded in
//! [`Discovery::failures`], and contributes nothing.

pub mod android;
pub mod apple;

use crate::error::{FetchError, Result};
use crate::models::{CatalogEntry, Platform};
use crate::utils::sanitize_filename;
use reqwest::Client;
use scraper::{ElementRef, Html};
use tracing::{debug, info, instrument, warn};

/// Where the static seed catalog goes relative to scraped entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPlacement {
    Before,
    After,
}

/// Platform-specific matching rules plugged into the [`Discoverer`].
pub trait ScrapeRules {
    type Entry: CatalogEntry;

    fn platform(&self) -> Platform;

    /// Pages scanned for project links, in order.
    fn listing_urls(&self) -> &[String];

    fn seeds(&self) -> &[Self::Entry];

    fn seed_placement(&self) -> SeedPlacement;

    /// Pull entries out of one listing page.
    ///
    /// `found_so_far` is the number of entries accumulated before this page.
    fn extract(&self, document: &Html, page_url: &str, found_so_far: usize) -> Vec<Self::Entry>;

    /// Final pass over the accumulated list.
    fn finish(&self, entries: Vec<Self::Entry>) -> Vec<Self::Entry> {
        entries
    }
}

/// A listing page that could not be fetched.
#[derive(Debug)]
pub struct PageFailure {
    pub url: String,
    pub error: FetchError,
}

/// Candidates found for one platform.
#[derive(Debug)]
pub struct Discovery<E> {
    pub entries: Vec<E>,
    pub failures: Vec<PageFailure>,
}

pub struct Discoverer<'a, R> {
    rules: &'a R,
    client: &'a Client,
}

impl<'a, R: ScrapeRules> Discoverer<'a, R> {
    pub fn new(rules: &'a R, client: &'a Client) -> Self {
        Self { rules, client }
    }

    /// Combine the seed catalog with whatever the listing pages yield.
    #[instrument(level = "info", skip_all, fields(platform = %self.rules.platform()))]
    pub async fn list(&self) -> Discovery<R::Entry> {
        let mut entries = Vec::new();
        let mut failures = Vec::new();

        if self.rules.seed_placement() == SeedPlacement::Before {
            entries.extend(self.rules.seeds().iter().cloned());
        }

        for url in self.rules.listing_urls() {
            match get_html(self.client, url).await {
                Ok(body) => {
                    let found = {
                        let document = Html::parse_document(&body);
                        self.rules.extract(&document, url, entries.len())
                    };
                    info!(count = found.len(), %url, "Scanned listing page");
                    debug!(entries = ?found, "Scraped entries");
                    entries.extend(found);
                }
                Err(error) => {
                    warn!(%url, %error, "Listing page unavailable; continuing with what we have");
                    failures.push(PageFailure {
                        url: url.clone(),
                        error,
                    });
                }
            }
        }

        if self.rules.seed_placement() == SeedPlacement::After {
            entries.extend(self.rules.seeds().iter().cloned());
        }

        let entries = self.rules.finish(entries);
        info!(
            count = entries.len(),
            failed_pages = failures.len(),
            "Discovered projects"
        );
        Discovery { entries, failures }
    }
}

/// GET a page and return its body, treating non-success statuses as errors.
pub(crate) async fn get_html(client: &Client, url: &str) -> Result<String> {
    let body = client.get(url).send().await?.error_for_status()?.text().await?;
    Ok(body)
}

/// Visible text of an element, trimmed.
pub(crate) fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Nearest enclosing `<div>`.
pub(crate) fn closest_div<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == "div")
}

/// Directory name from link text, or `None` when nothing usable is left.
pub(crate) fn scraped_name(text: &str) -> Option<String> {
    let name = sanitize_filename(text.trim());
    if name.trim_matches('.').is_empty() {
        None
    } else {
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    #[test]
    fn test_closest_div_skips_other_ancestors() {
        let html = Html::parse_document(
            r#"<div id="outer"><section><div id="card"><span><a href="x">Link</a></span></div></section></div>"#,
        );
        let anchor = html.select(&Selector::parse("a").unwrap()).next().unwrap();
        let div = closest_div(&anchor).unwrap();
        assert_eq!(div.value().attr("id"), Some("card"));
    }

    #[test]
    fn test_element_text_joins_and_trims() {
        let html = Html::parse_fragment(r#"<a>  Now in <b>Android</b>  </a>"#);
        let anchor = html.select(&Selector::parse("a").unwrap()).next().unwrap();
        assert_eq!(element_text(&anchor), "Now in Android");
    }

    #[test]
    fn test_scraped_name() {
        assert_eq!(scraped_name("  Now in Android "), Some("Now-in-Android".to_string()));
        assert_eq!(scraped_name("   "), None);
        assert_eq!(scraped_name(".."), None);
    }
}
