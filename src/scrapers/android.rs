//! Android developer samples scraper.
//!
//! Starts from the known `github.com/android` repositories and adds any
//! further repositories linked from the
//! [Kotlin samples index](https://developer.android.com/samples?language=kotlin).
//! The index often requires sign-in, in which case the seeds are all we get.

use super::{ScrapeRules, SeedPlacement, closest_div, element_text, scraped_name};
use crate::catalog::KNOWN_ANDROID_REPOS;
use crate::config::Settings;
use crate::models::{AndroidProject, NO_DESCRIPTION, Platform};
use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static GITHUB_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse(r#"a[href*="github.com"]"#).unwrap());
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// Only repositories owned by the Android organisation are kept.
const ANDROID_ORG_MARKER: &str = "github.com/android";

#[derive(Debug, Clone)]
pub struct AndroidRules {
    listing_urls: Vec<String>,
    seeds: Vec<AndroidProject>,
}

impl AndroidRules {
    pub fn new(listing_url: impl Into<String>, seeds: Vec<AndroidProject>) -> Self {
        Self {
            listing_urls: vec![listing_url.into()],
            seeds,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.android_listing_url.clone(), KNOWN_ANDROID_REPOS.clone())
    }
}

impl ScrapeRules for AndroidRules {
    type Entry = AndroidProject;

    fn platform(&self) -> Platform {
        Platform::Android
    }

    fn listing_urls(&self) -> &[String] {
        &self.listing_urls
    }

    fn seeds(&self) -> &[AndroidProject] {
        &self.seeds
    }

    fn seed_placement(&self) -> SeedPlacement {
        SeedPlacement::Before
    }

    fn extract(&self, document: &Html, _page_url: &str, _found_so_far: usize) -> Vec<AndroidProject> {
        document
            .select(&GITHUB_LINK)
            .enumerate()
            .filter_map(|(index, element)| {
                let href = element.value().attr("href")?;
                if !href.contains(ANDROID_ORG_MARKER) {
                    return None;
                }
                let name = scraped_name(&element_text(&element)).unwrap_or_else(|| {
                    format!("{}-{}", Platform::Android.placeholder_prefix(), index + 1)
                });
                let description = closest_div(&element)
                    .and_then(|div| div.select(&PARAGRAPH).next())
                    .map(|p| element_text(&p))
                    .filter(|text| !text.is_empty())
                    .unwrap_or_else(|| NO_DESCRIPTION.to_string());
                Some(AndroidProject {
                    name,
                    source_url: href.to_string(),
                    description,
                })
            })
            .collect()
    }

    /// Keep the first entry for each source URL, so seeds win over scraped duplicates.
    fn finish(&self, entries: Vec<AndroidProject>) -> Vec<AndroidProject> {
        entries
            .into_iter()
            .unique_by(|project| project.source_url.clone())
            .collect()
    }
}
