//! Fixed run settings.
//!
//! Every tunable of a harvest run lives here as a constant. [`Settings`]
//! bundles them so the downloaders take their configuration as a value
//! instead of reaching for globals, which keeps them testable against
//! temporary directories and local servers.

use crate::models::Platform;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

/// Root directory that receives both platform trees.
pub const BASE_DIR: &str = "sample_projects";
/// Subdirectory of [`BASE_DIR`] for Android projects.
pub const ANDROID_DIR: &str = "app_android_0_official";
/// Subdirectory of [`BASE_DIR`] for Apple projects.
pub const APPLE_DIR: &str = "app_ios_0_official";
/// Upper bound on projects fetched per platform in one run.
pub const MAX_PROJECTS_PER_TYPE: usize = 50;
/// Pause between two consecutive Android fetches.
pub const ANDROID_DELAY: Duration = Duration::from_millis(800);
/// Pause between two consecutive Apple fetches.
pub const APPLE_DELAY: Duration = Duration::from_millis(1500);
/// Applied to every HTTP request.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const ANDROID_SAMPLES_URL: &str = "https://developer.android.com/samples?language=kotlin";

pub const APPLE_DOCS_DOMAIN: &str = "https://developer.apple.com";

pub const APPLE_LISTING_URLS: [&str; 10] = [
    "https://developer.apple.com/documentation/foundation",
    "https://developer.apple.com/documentation/uikit",
    "https://developer.apple.com/documentation/swiftui",
    "https://developer.apple.com/documentation/coreml",
    "https://developer.apple.com/documentation/vision",
    "https://developer.apple.com/documentation/arkit",
    "https://developer.apple.com/documentation/metal",
    "https://developer.apple.com/documentation/avfoundation",
    "https://developer.apple.com/documentation/mapkit",
    "https://developer.apple.com/documentation/coredata",
];

/// Tried in order against a detail page; the first one yielding a usable link wins.
pub const DOWNLOAD_SELECTORS: [&str; 7] = [
    r#"a[href*="download"]"#,
    r#"a[href*=".zip"]"#,
    r#"a[href*="sample"]"#,
    r#"a[href*="code"]"#,
    r#"button[onclick*="download"]"#,
    ".download-button",
    ".download-link",
];

/// URLs containing one of these are cloned rather than downloaded.
pub const REPOSITORY_HOSTS: [&str; 1] = ["github.com"];

/// Everything a harvest run needs to know, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_dir: PathBuf,
    pub android_dir: String,
    pub apple_dir: String,
    pub max_projects_per_type: usize,
    pub android_delay: Duration,
    pub apple_delay: Duration,
    pub user_agent: String,
    pub timeout: Duration,
    pub android_listing_url: String,
    pub apple_listing_urls: Vec<String>,
    pub apple_docs_domain: String,
    pub download_selectors: Vec<String>,
    pub repository_hosts: Vec<String>,
    /// Program invoked for `clone`.
    pub git_program: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(BASE_DIR),
            android_dir: ANDROID_DIR.to_string(),
            apple_dir: APPLE_DIR.to_string(),
            max_projects_per_type: MAX_PROJECTS_PER_TYPE,
            android_delay: ANDROID_DELAY,
            apple_delay: APPLE_DELAY,
            user_agent: USER_AGENT.to_string(),
            timeout: HTTP_TIMEOUT,
            android_listing_url: ANDROID_SAMPLES_URL.to_string(),
            apple_listing_urls: APPLE_LISTING_URLS.iter().map(|u| u.to_string()).collect(),
            apple_docs_domain: APPLE_DOCS_DOMAIN.to_string(),
            download_selectors: DOWNLOAD_SELECTORS.iter().map(|s| s.to_string()).collect(),
            repository_hosts: REPOSITORY_HOSTS.iter().map(|h| h.to_string()).collect(),
            git_program: "git".to_string(),
        }
    }
}

impl Settings {
    /// Directory holding one platform's projects.
    pub fn platform_root(&self, platform: Platform) -> PathBuf {
        match platform {
            Platform::Android => self.base_dir.join(&self.android_dir),
            Platform::Apple => self.base_dir.join(&self.apple_dir),
        }
    }

    /// Pause enforced between two fetches of the same platform.
    pub fn delay_for(&self, platform: Platform) -> Duration {
        match platform {
            Platform::Android => self.android_delay,
            Platform::Apple => self.apple_delay,
        }
    }

    /// Build the HTTP client shared by discovery and downloads.
    ///
    /// `timeout` bounds connecting and each idle gap between reads, not the
    /// whole transfer, so a large archive that keeps arriving is never cut off.
    pub fn http_client(&self) -> Result<Client, reqwest::Error> {
        Client::builder()
            .user_agent(self.user_agent.clone())
            .connect_timeout(self.timeout)
            .read_timeout(self.timeout)
            .build()
    }
}

/// Footer appended to `--help`, describing the compiled-in settings.
pub fn help_footer() -> String {
    let settings = Settings::default();
    format!(
        "Settings:\n  Max projects per platform: {}\n  Base directory:    {}\n  Android directory: {}\n  Apple directory:   {}",
        settings.max_projects_per_type,
        settings.base_dir.display(),
        settings.platform_root(Platform::Android).display(),
        settings.platform_root(Platform::Apple).display(),
    )
}
