//! Apple developer documentation scraper.
//!
//! Scans a fixed set of documentation category pages on
//! [developer.apple.com](https://developer.apple.com/documentation) for two
//! kinds of links:
//!
//! - GitHub repositories under the `apple` organisation, matched without
//!   regard to case, which are cloned later
//! - Sample code archives (`.zip`), resolved against the documentation domain
//!
//! The known Apple repositories are appended after all pages were tried.

use super::{ScrapeRules, SeedPlacement, closest_div, element_text, scraped_name};
use crate::catalog::KNOWN_APPLE_REPOS;
use crate::config::Settings;
use crate::models::{AppleProject, Platform};
use crate::utils::resolve_link;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

static GITHUB_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse(r#"a[href*="github.com"]"#).unwrap());
static DOWNLOAD_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"a[href*="download"], a[href*=".zip"]"#).unwrap());
static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h3, h2, h1").unwrap());

const APPLE_ORG_MARKER: &str = "github.com/apple";

#[derive(Debug, Clone)]
pub struct AppleRules {
    listing_urls: Vec<String>,
    docs_domain: Url,
    seeds: Vec<AppleProject>,
}

impl AppleRules {
    pub fn new(listing_urls: Vec<String>, docs_domain: Url, seeds: Vec<AppleProject>) -> Self {
        Self {
            listing_urls,
            docs_domain,
            seeds,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, url::ParseError> {
        Ok(Self::new(
            settings.apple_listing_urls.clone(),
            Url::parse(&settings.apple_docs_domain)?,
            KNOWN_APPLE_REPOS.clone(),
        ))
    }

    fn placeholder(&self, n: usize) -> String {
        format!("{}-{}", Platform::Apple.placeholder_prefix(), n)
    }
}

impl ScrapeRules for AppleRules {
    type Entry = AppleProject;

    fn platform(&self) -> Platform {
        Platform::Apple
    }

    fn listing_urls(&self) -> &[String] {
        &self.listing_urls
    }

    fn seeds(&self) -> &[AppleProject] {
        &self.seeds
    }

    fn seed_placement(&self) -> SeedPlacement {
        SeedPlacement::After
    }

    fn extract(&self, document: &Html, page_url: &str, found_so_far: usize) -> Vec<AppleProject> {
        let mut found = Vec::new();

        for element in document.select(&GITHUB_LINK) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            if !href.to_ascii_lowercase().contains(APPLE_ORG_MARKER) {
                continue;
            }
            let name = scraped_name(&element_text(&element))
                .unwrap_or_else(|| self.placeholder(found_so_far + found.len() + 1));
            found.push(AppleProject {
                name,
                detail_url: href.to_string(),
                download_url: Some(href.to_string()),
            });
        }

        for element in document.select(&DOWNLOAD_LINK) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            if !href.contains(".zip") {
                continue;
            }
            let Some(download_url) = resolve_link(&self.docs_domain, href) else {
                continue;
            };
            let name = scraped_name(&element_text(&element))
                .or_else(|| {
                    closest_div(&element)
                        .and_then(|div| div.select(&HEADING).next())
                        .and_then(|heading| scraped_name(&element_text(&heading)))
                })
                .unwrap_or_else(|| self.placeholder(found_so_far + found.len() + 1));
            found.push(AppleProject {
                name,
                detail_url: page_url.to_string(),
                download_url: Some(download_url),
            });
        }

        found
    }
}
