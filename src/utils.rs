//! Utility functions for names, URLs, and file system checks.
//!
//! This module provides helper functions used throughout the application:
//! - Filename sanitization for names scraped from link text
//! - URL helpers for archive naming and link resolution
//! - File system validation for output directories

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs as stdfs;
use std::io;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};
use url::Url;

static ILLEGAL_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[<>:"/\\|?*]"#).unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Make scraped text safe to use as a directory name.
///
/// Each of `< > : " / \ | ? *` becomes `-`, then every run of whitespace
/// collapses to a single `-`. Applying it twice gives the same result as once.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(sanitize_filename("Camera X: Basics"), "Camera-X--Basics");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    let replaced = ILLEGAL_CHARS.replace_all(name, "-");
    WHITESPACE_RUN.replace_all(&replaced, "-").into_owned()
}

/// Last path segment of a URL, if it has a non-empty one.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(filename_from_url("https://x.dev/a/b.zip?x=1"), Some("b.zip".into()));
/// assert_eq!(filename_from_url("https://x.dev/"), None);
/// ```
pub fn filename_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .path_segments()?
        .next_back()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// Archive URL a repository host serves for the `main` branch.
pub fn conventional_archive_url(repo_url: &str) -> String {
    let repo = repo_url.trim_end_matches('/');
    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    format!("{}/archive/refs/heads/main.zip", repo)
}

/// Resolve a possibly relative link against `base`, keeping only http(s) results.
pub fn resolve_link(base: &Url, href: &str) -> Option<String> {
    let resolved = base.join(href.trim()).ok()?;
    matches!(resolved.scheme(), "http" | "https").then(|| resolved.to_string())
}

/// Ensure a directory exists and is writable.
///
/// This function creates the directory if it doesn't exist, then performs
/// a write test by creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The directory is not writable (permission denied, read-only filesystem, etc.)
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path).await?;
    // A small sync write has the simplest error surface
    let probe_path = path.join("..__probe_write__");
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!("Output directory is writable");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_illegal_characters() {
        assert_eq!(sanitize_filename(r#"a<b>c:d"e/f\g|h?i*j"#), "a-b-c-d-e-f-g-h-i-j");
    }

    #[test]
    fn test_sanitize_collapses_whitespace() {
        assert_eq!(sanitize_filename("Jetpack   Compose\t\nSamples"), "Jetpack-Compose-Samples");
        assert_eq!(sanitize_filename("Camera X: Basics"), "Camera-X--Basics");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let inputs = [
            "plain",
            "  leading and trailing  ",
            r#"what? "quoted" <tag> a/b\c"#,
            "tabs\t\tand\nnewlines",
            "",
            "***",
        ];
        for input in inputs {
            let once = sanitize_filename(input);
            assert_eq!(sanitize_filename(&once), once, "input: {input:?}");
            assert!(!once.chars().any(|c| r#"<>:"/\|?*"#.contains(c)));
            assert!(!once.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn test_filename_from_url() {
        assert_eq!(
            filename_from_url("https://github.com/apple/swift-crypto/archive/refs/heads/main.zip"),
            Some("main.zip".to_string())
        );
        assert_eq!(
            filename_from_url("https://developer.apple.com/a/Sample.zip?token=1"),
            Some("Sample.zip".to_string())
        );
        assert_eq!(filename_from_url("https://developer.apple.com/"), None);
        assert_eq!(filename_from_url("not a url"), None);
    }

    #[test]
    fn test_conventional_archive_url() {
        assert_eq!(
            conventional_archive_url("https://github.com/android/tv-samples"),
            "https://github.com/android/tv-samples/archive/refs/heads/main.zip"
        );
        assert_eq!(
            conventional_archive_url("https://github.com/android/tv-samples.git/"),
            "https://github.com/android/tv-samples/archive/refs/heads/main.zip"
        );
    }

    #[test]
    fn test_resolve_link() {
        let base = Url::parse("https://developer.apple.com").unwrap();
        assert_eq!(
            resolve_link(&base, "/sample-code/Demo.zip").as_deref(),
            Some("https://developer.apple.com/sample-code/Demo.zip")
        );
        assert_eq!(
            resolve_link(&base, "https://cdn.example.com/x.zip").as_deref(),
            Some("https://cdn.example.com/x.zip")
        );
        assert_eq!(resolve_link(&base, "javascript:download()"), None);
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        ensure_writable_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
        assert_eq!(stdfs::read_dir(&nested).unwrap().count(), 0);
    }
}
