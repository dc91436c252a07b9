//! The `PROJECT_INFO.md` sidecar recording where a project came from.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument};

pub const PROJECT_INFO_FILE: &str = "PROJECT_INFO.md";

/// How the project contents were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acquisition<'a> {
    Clone,
    Archive { url: &'a str, filename: &'a str },
}

/// Provenance of one fetched project.
#[derive(Debug, Clone)]
pub struct ProjectInfo<'a> {
    pub name: &'a str,
    pub source_url: &'a str,
    pub description: Option<&'a str>,
    pub acquisition: Acquisition<'a>,
    pub fetched_at: DateTime<Utc>,
}

impl ProjectInfo<'_> {
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        writeln!(md, "# {}\n", self.name).unwrap();
        writeln!(md, "**Source URL:** {}\n", self.source_url).unwrap();
        if let Some(description) = self.description {
            writeln!(md, "**Description:** {}\n", description).unwrap();
        }
        match self.acquisition {
            Acquisition::Clone => {
                writeln!(md, "**Method:** git clone\n").unwrap();
            }
            Acquisition::Archive { url, filename } => {
                writeln!(md, "**Method:** archive download\n").unwrap();
                writeln!(md, "**Archive URL:** {}\n", url).unwrap();
                writeln!(md, "**File:** {}\n", filename).unwrap();
            }
        }
        writeln!(
            md,
            "**Fetched at:** {}",
            self.fetched_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        )
        .unwrap();
        if matches!(self.acquisition, Acquisition::Archive { .. }) {
            writeln!(md, "\nThe archive was saved as downloaded and has not been extracted.").unwrap();
        }
        md
    }

    /// Write the sidecar into `dir`, returning its path.
    #[instrument(level = "debug", skip_all, fields(name = %self.name))]
    pub async fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(PROJECT_INFO_FILE);
        fs::write(&path, self.to_markdown()).await?;
        debug!(path = %path.display(), "Wrote project info");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 6, 7, 8, 9).unwrap()
    }

    #[test]
    fn test_clone_markdown() {
        let info = ProjectInfo {
            name: "tv-samples",
            source_url: "https://github.com/android/tv-samples",
            description: Some("Android TV and Google TV samples"),
            acquisition: Acquisition::Clone,
            fetched_at: fixed_time(),
        };
        let md = info.to_markdown();
        assert!(md.starts_with("# tv-samples\n"));
        assert!(md.contains("**Source URL:** https://github.com/android/tv-samples"));
        assert!(md.contains("**Description:** Android TV and Google TV samples"));
        assert!(md.contains("**Method:** git clone"));
        assert!(md.contains("**Fetched at:** 2025-05-06T07:08:09.000Z"));
        assert!(!md.contains("**File:**"));
    }

    #[test]
    fn test_archive_markdown() {
        let info = ProjectInfo {
            name: "Capturing-Photos",
            source_url: "https://developer.apple.com/documentation/avfoundation",
            description: None,
            acquisition: Acquisition::Archive {
                url: "https://developer.apple.com/x/CapturingPhotos.zip",
                filename: "CapturingPhotos.zip",
            },
            fetched_at: fixed_time(),
        };
        let md = info.to_markdown();
        assert!(md.contains("**Archive URL:** https://developer.apple.com/x/CapturingPhotos.zip"));
        assert!(md.contains("**File:** CapturingPhotos.zip"));
        assert!(md.contains("not been extracted"));
        assert!(!md.contains("**Description:**"));
    }

    #[tokio::test]
    async fn test_write_to_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let info = ProjectInfo {
            name: "demo",
            source_url: "https://github.com/android/demo",
            description: None,
            acquisition: Acquisition::Clone,
            fetched_at: fixed_time(),
        };
        let path = info.write_to(tmp.path()).await.unwrap();
        assert_eq!(path, tmp.path().join(PROJECT_INFO_FILE));
        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written, info.to_markdown());
    }
}
