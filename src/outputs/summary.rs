//! End-of-run report.

use crate::models::{Platform, RunSummary};
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Result of one platform run together with where it wrote.
#[derive(Debug, Clone)]
pub struct PlatformReport {
    pub platform: Platform,
    pub summary: RunSummary,
    pub dir: PathBuf,
}

impl PlatformReport {
    pub fn new(platform: Platform, summary: RunSummary, dir: &Path) -> Self {
        Self {
            platform,
            summary,
            dir: dir.to_path_buf(),
        }
    }
}

/// Render the banner printed once every requested platform has finished.
pub fn render(reports: &[PlatformReport]) -> String {
    let rule = "=".repeat(50);
    let mut out = String::new();
    writeln!(out, "{}", rule).unwrap();
    writeln!(out, "All download tasks finished").unwrap();
    writeln!(out, "{}", rule).unwrap();
    for report in reports {
        writeln!(
            out,
            "{} projects: {} succeeded",
            report.platform, report.summary
        )
        .unwrap();
    }
    for report in reports {
        writeln!(out, "{} files saved to: {}", report.platform, report.dir.display()).unwrap();
    }
    write!(out, "{}", rule).unwrap();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_both_platforms() {
        let reports = vec![
            PlatformReport {
                platform: Platform::Android,
                summary: RunSummary { success: 9, total: 10 },
                dir: PathBuf::from("out/app_android_0_official"),
            },
            PlatformReport {
                platform: Platform::Apple,
                summary: RunSummary { success: 0, total: 11 },
                dir: PathBuf::from("out/app_ios_0_official"),
            },
        ];
        let text = render(&reports);
        assert!(text.contains("Android projects: 9/10 succeeded"));
        assert!(text.contains("Apple projects: 0/11 succeeded"));
        assert!(text.contains("Apple files saved to: out/app_ios_0_official"));
    }

    #[test]
    fn test_render_single_platform() {
        let reports = vec![PlatformReport {
            platform: Platform::Apple,
            summary: RunSummary { success: 2, total: 2 },
            dir: PathBuf::from("x"),
        }];
        let text = render(&reports);
        assert!(!text.contains("Android"));
        assert!(text.contains("Apple projects: 2/2 succeeded"));
    }
}
