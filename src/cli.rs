//! Command-line interface definitions for Sample Harvester.
//!
//! The tool takes no positional arguments. Without flags it harvests both
//! platforms; each `--*-only` flag restricts the run to a single platform.
//! Everything else is fixed in [`crate::config`] and listed under `--help`.

use crate::models::Platform;
use clap::Parser;

/// Command-line arguments for the Sample Harvester application.
///
/// # Examples
///
/// ```sh
/// # Harvest Android and Apple samples concurrently
/// sample_harvester
///
/// # Only Android
/// sample_harvester --android-only
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about, after_help = crate::config::help_footer())]
pub struct Cli {
    /// Download Android projects only
    #[arg(long, conflicts_with = "apple_only")]
    pub android_only: bool,

    /// Download Apple projects only
    #[arg(long)]
    pub apple_only: bool,
}

/// Which platforms a run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Both platforms, concurrently.
    All,
    AndroidOnly,
    AppleOnly,
}

impl Mode {
    pub fn includes(self, platform: Platform) -> bool {
        match self {
            Mode::All => true,
            Mode::AndroidOnly => platform == Platform::Android,
            Mode::AppleOnly => platform == Platform::Apple,
        }
    }
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.android_only {
            Mode::AndroidOnly
        } else if self.apple_only {
            Mode::AppleOnly
        } else {
            Mode::All
        }
    }
}
