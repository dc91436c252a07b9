//! Data models for catalog entries and run results.
//!
//! This module defines the core data structures used throughout the application:
//! - [`AndroidProject`]: An Android sample repository
//! - [`AppleProject`]: An Apple sample, reachable through a detail page or a direct archive
//! - [`CatalogEntry`]: The view of either record that the fetcher works with
//! - [`RunSummary`] and [`FetchOutcome`]: What a run and a single fetch produced

use std::fmt;

/// Placeholder stored when a scraped Android sample has no description.
pub const NO_DESCRIPTION: &str = "no description";

/// The two vendor ecosystems a run can harvest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Android,
    Apple,
}

impl Platform {
    /// Prefix for generated names of samples whose link text was empty.
    pub fn placeholder_prefix(self) -> &'static str {
        match self {
            Platform::Android => "Android-Sample",
            Platform::Apple => "Apple-Sample",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Android => f.write_str("Android"),
            Platform::Apple => f.write_str("Apple"),
        }
    }
}

/// An Android sample repository.
///
/// # Fields
///
/// * `name` - Directory name, free of path-illegal characters
/// * `source_url` - Repository URL
/// * `description` - Free text, [`NO_DESCRIPTION`] when nothing was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndroidProject {
    pub name: String,
    pub source_url: String,
    pub description: String,
}

/// An Apple sample project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppleProject {
    /// Directory name, free of path-illegal characters.
    pub name: String,
    /// Page believed to contain the download link (or the repository itself).
    pub detail_url: String,
    /// Direct archive URL, when already known.
    pub download_url: Option<String>,
}

/// What the fetcher needs to know about an entry, independent of platform.
pub trait CatalogEntry: fmt::Debug + Clone {
    /// Name of the directory the project is materialised into.
    fn name(&self) -> &str;

    /// The URL that identifies the project: a repository or a detail page.
    fn primary_url(&self) -> &str;

    /// Explicit archive location, if the entry carries one.
    fn archive_url(&self) -> Option<&str>;

    fn description(&self) -> Option<&str>;
}

impl CatalogEntry for AndroidProject {
    fn name(&self) -> &str {
        &self.name
    }

    fn primary_url(&self) -> &str {
        &self.source_url
    }

    fn archive_url(&self) -> Option<&str> {
        None
    }

    fn description(&self) -> Option<&str> {
        let text = self.description.trim();
        (!text.is_empty()).then_some(text)
    }
}

impl CatalogEntry for AppleProject {
    fn name(&self) -> &str {
        &self.name
    }

    fn primary_url(&self) -> &str {
        &self.detail_url
    }

    fn archive_url(&self) -> Option<&str> {
        self.download_url.as_deref()
    }

    fn description(&self) -> Option<&str> {
        None
    }
}

/// How a single fetch ended when it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The target directory existed before the fetch; nothing was touched.
    AlreadyPresent,
    /// The repository was cloned.
    Cloned,
    /// A single archive file was saved, not extracted.
    Archived {
        url: String,
        filename: String,
        bytes: u64,
    },
}

/// Tally of one platform run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Fetches that ended in a [`FetchOutcome`].
    pub success: usize,
    /// Entries attempted, never more than the per-platform cap.
    pub total: usize,
}

impl RunSummary {
    pub fn failed(&self) -> usize {
        self.total - self.success
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.success, self.total)
    }
}
