//! # Sample Harvester
//!
//! Collects official sample projects from the Android and Apple developer
//! portals into a local directory tree, one directory per project.
//!
//! ## Usage
//!
//! ```sh
//! sample_harvester                 # both platforms, concurrently
//! sample_harvester --android-only
//! sample_harvester --apple-only
//! ```
//!
//! ## Architecture
//!
//! Each platform runs the same pipeline:
//! 1. **Discovery**: Start from a catalog of known repositories and add links
//!    scraped from the vendor's listing pages
//! 2. **Selection**: Keep at most the configured number of candidates
//! 3. **Fetching**: Clone or download each project in turn, pausing between
//!    projects, and record provenance in `PROJECT_INFO.md`
//!
//! The two platforms share nothing but the HTTP client and run side by side.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod catalog;
mod cli;
mod config;
mod downloader;
mod error;
mod fetcher;
mod models;
mod outputs;
mod scrapers;
mod throttle;
mod utils;

#[cfg(test)]
mod test_support;

use cli::{Cli, Mode};
use config::Settings;
use downloader::PlatformDownloader;
use models::Platform;
use outputs::summary::{self, PlatformReport};
use scrapers::android::AndroidRules;
use scrapers::apple::AppleRules;
use utils::ensure_writable_dir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("sample_harvester starting up");

    let args = Cli::parse();
    let mode = args.mode();
    let settings = Settings::default();
    debug!(?mode, ?settings, "Resolved run settings");

    let reports = run(mode, &settings).await?;
    println!("{}", summary::render(&reports));

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );
    Ok(())
}

/// Run the platforms selected by `mode` and collect their reports.
///
/// Only an unusable output directory is an error; individual project
/// failures show up as shortfalls in the reports.
#[instrument(level = "info", skip(settings))]
async fn run(mode: Mode, settings: &Settings) -> Result<Vec<PlatformReport>, Box<dyn Error>> {
    for dir in std::iter::once(settings.base_dir.clone()).chain(
        [Platform::Android, Platform::Apple]
            .into_iter()
            .filter(|platform| mode.includes(*platform))
            .map(|platform| settings.platform_root(platform)),
    ) {
        if let Err(e) = ensure_writable_dir(&dir).await {
            error!(
                path = %dir.display(),
                error = %e,
                "Output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e.into());
        }
    }

    let client = settings.http_client()?;

    let reports = match mode {
        Mode::All => {
            let android = PlatformDownloader::new(AndroidRules::from_settings(settings), settings, client.clone())?;
            let apple = PlatformDownloader::new(AppleRules::from_settings(settings)?, settings, client)?;
            let (android_summary, apple_summary) = tokio::join!(android.run_all(), apple.run_all());
            vec![
                PlatformReport::new(Platform::Android, android_summary, android.root()),
                PlatformReport::new(Platform::Apple, apple_summary, apple.root()),
            ]
        }
        Mode::AndroidOnly => {
            let android = PlatformDownloader::new(AndroidRules::from_settings(settings), settings, client)?;
            let android_summary = android.run_all().await;
            vec![PlatformReport::new(Platform::Android, android_summary, android.root())]
        }
        Mode::AppleOnly => {
            let apple = PlatformDownloader::new(AppleRules::from_settings(settings)?, settings, client)?;
            let apple_summary = apple.run_all().await;
            vec![PlatformReport::new(Platform::Apple, apple_summary, apple.root())]
        }
    };

    for r in &reports {
        info!(
            platform = %r.platform,
            success = r.summary.success,
            failed = r.summary.failed(),
            total = r.summary.total,
            "Platform results"
        );
    }
    Ok(reports)
}
