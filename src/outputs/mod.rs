//! Output generation for project sidecars and the end-of-run report.
//!
//! # Submodules
//!
//! - [`project_info`]: Writes `PROJECT_INFO.md` next to every fetched project
//! - [`summary`]: Renders the per-platform totals printed when a run ends
//!
//! # Output Structure
//!
//! ```text
//! sample_projects/
//! ├── app_android_0_official/
//! │   └── tv-samples/            # cloned working tree
//! │       └── PROJECT_INFO.md
//! └── app_ios_0_official/
//!     └── Capturing-Photos/
//!         ├── CapturingPhotos.zip  # saved as-is
//!         └── PROJECT_INFO.md
//! ```

pub mod project_info;
pub mod summary;
