//! Materialising one catalog entry into a project directory.
//!
//! The fetcher picks an acquisition strategy per entry:
//!
//! 1. Repository URLs are cloned with `git`. If the clone fails, an archive
//!    is downloaded instead (the entry's own archive URL, or the host's
//!    `main` branch archive).
//! 2. Entries carrying an archive URL have it downloaded directly.
//! 3. Otherwise the entry's detail page is scanned with the configured
//!    download selectors and the first usable link is downloaded.
//!
//! Archives are streamed to disk unextracted. Every successful fetch leaves a
//! `PROJECT_INFO.md` sidecar. The existence of the project directory is the
//! only record that a project is done, so a failed fetch removes the
//! directory it created.

use crate::config::Settings;
use crate::error::{FetchError, Result};
use crate::models::{CatalogEntry, FetchOutcome};
use crate::outputs::project_info::{Acquisition, ProjectInfo};
use crate::scrapers::get_html;
use crate::utils::{conventional_archive_url, filename_from_url, resolve_link};
use chrono::Utc;
use reqwest::Client;
use scraper::{Html, Selector};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// What an acquisition put into the target directory.
#[derive(Debug)]
enum Acquired {
    Cloned,
    Archived {
        url: String,
        filename: String,
        bytes: u64,
    },
}

impl Acquired {
    fn acquisition(&self) -> Acquisition<'_> {
        match self {
            Acquired::Cloned => Acquisition::Clone,
            Acquired::Archived { url, filename, .. } => Acquisition::Archive { url, filename },
        }
    }
}

impl From<Acquired> for FetchOutcome {
    fn from(acquired: Acquired) -> Self {
        match acquired {
            Acquired::Cloned => FetchOutcome::Cloned,
            Acquired::Archived {
                url,
                filename,
                bytes,
            } => FetchOutcome::Archived {
                url,
                filename,
                bytes,
            },
        }
    }
}

#[derive(Debug)]
pub struct Fetcher {
    root: PathBuf,
    client: Client,
    repository_hosts: Vec<String>,
    git_program: String,
    docs_domain: Url,
    selectors: Vec<Selector>,
}

impl Fetcher {
    /// Create a fetcher writing projects under `root`.
    pub fn new(root: PathBuf, client: Client, settings: &Settings) -> std::result::Result<Self, url::ParseError> {
        Ok(Self {
            root,
            client,
            repository_hosts: settings.repository_hosts.clone(),
            git_program: settings.git_program.clone(),
            docs_domain: Url::parse(&settings.apple_docs_domain)?,
            selectors: compile_selectors(&settings.download_selectors),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Fetch `entry` into `<root>/<name>` unless that directory already exists.
    #[instrument(level = "info", skip_all, fields(name = %entry.name()))]
    pub async fn fetch<E: CatalogEntry>(&self, entry: &E) -> Result<FetchOutcome> {
        let target = self.root.join(entry.name());
        if fs::try_exists(&target).await? {
            info!(path = %target.display(), "Project already present; skipping");
            return Ok(FetchOutcome::AlreadyPresent);
        }

        match self.materialize(entry, &target).await {
            Ok(outcome) => Ok(outcome),
            Err(error) => {
                if fs::try_exists(&target).await.unwrap_or(false) {
                    if let Err(cleanup) = fs::remove_dir_all(&target).await {
                        warn!(path = %target.display(), error = %cleanup, "Could not remove partial project directory");
                    }
                }
                Err(error)
            }
        }
    }

    async fn materialize<E: CatalogEntry>(&self, entry: &E, target: &Path) -> Result<FetchOutcome> {
        let acquired = self.acquire(entry, target).await?;
        let info = ProjectInfo {
            name: entry.name(),
            source_url: entry.primary_url(),
            description: entry.description(),
            acquisition: acquired.acquisition(),
            fetched_at: Utc::now(),
        };
        info.write_to(target).await?;
        Ok(acquired.into())
    }

    async fn acquire<E: CatalogEntry>(&self, entry: &E, target: &Path) -> Result<Acquired> {
        let primary = entry.primary_url();

        if self.is_repository(primary) {
            return match self.clone_repository(primary, target).await {
                Ok(()) => Ok(Acquired::Cloned),
                Err(error) => {
                    let archive = entry
                        .archive_url()
                        .filter(|url| *url != primary)
                        .map(str::to_string)
                        .unwrap_or_else(|| conventional_archive_url(primary));
                    warn!(%error, %archive, "Clone failed; falling back to archive download");
                    self.download_archive(entry.name(), &archive, target).await
                }
            };
        }

        if let Some(url) = entry.archive_url() {
            return self.download_archive(entry.name(), url, target).await;
        }

        let url = self.find_download_link(entry).await?;
        self.download_archive(entry.name(), &url, target).await
    }

    fn is_repository(&self, url: &str) -> bool {
        let url = url.to_ascii_lowercase();
        self.repository_hosts.iter().any(|host| url.contains(host.as_str()))
    }

    async fn clone_repository(&self, url: &str, target: &Path) -> Result<()> {
        info!(%url, "Cloning repository");
        let status = Command::new(&self.git_program)
            .arg("clone")
            .arg(url)
            .arg(target)
            .env("GIT_TERMINAL_PROMPT", "0")
            .status()
            .await
            .map_err(|e| FetchError::Clone {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(FetchError::Clone {
                url: url.to_string(),
                reason: format!("{} exited with {}", self.git_program, status),
            });
        }
        Ok(())
    }

    /// Stream `url` into `target`, named after the URL's last path segment.
    async fn download_archive(&self, name: &str, url: &str, target: &Path) -> Result<Acquired> {
        fs::create_dir_all(target).await?;
        info!(%url, "Downloading archive");

        let mut response = self.client.get(url).send().await?.error_for_status()?;
        let filename = filename_from_url(url).unwrap_or_else(|| format!("{}.zip", name));
        let path = target.join(&filename);
        let write_error = |source| FetchError::Download {
            path: path.clone(),
            source,
        };

        let mut file = fs::File::create(&path).await.map_err(write_error)?;
        let mut bytes: u64 = 0;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await.map_err(write_error)?;
            bytes += chunk.len() as u64;
        }
        file.flush().await.map_err(write_error)?;

        info!(bytes, file = %filename, "Archive saved");
        Ok(Acquired::Archived {
            url: url.to_string(),
            filename,
            bytes,
        })
    }

    async fn find_download_link<E: CatalogEntry>(&self, entry: &E) -> Result<String> {
        let body = get_html(&self.client, entry.primary_url()).await?;
        let link = {
            let document = Html::parse_document(&body);
            self.first_download_link(&document)
        };
        match link {
            Some(link) => {
                debug!(%link, "Resolved download link from detail page");
                Ok(link)
            }
            None => Err(FetchError::NotFound {
                name: entry.name().to_string(),
            }),
        }
    }

    /// First usable link, trying selectors in priority order.
    fn first_download_link(&self, document: &Html) -> Option<String> {
        self.selectors.iter().find_map(|selector| {
            let element = document.select(selector).next()?;
            let raw = element
                .value()
                .attr("href")
                .filter(|v| !v.is_empty())
                .or_else(|| element.value().attr("onclick"))?;
            self.absolute_link(raw.trim())
        })
    }

    fn absolute_link(&self, raw: &str) -> Option<String> {
        if raw.starts_with("http") {
            Some(raw.to_string())
        } else if raw.starts_with('/') {
            resolve_link(&self.docs_domain, raw)
        } else {
            None
        }
    }
}

fn compile_selectors(raw: &[String]) -> Vec<Selector> {
    raw.iter()
        .filter_map(|css| match Selector::parse(css) {
            Ok(selector) => Some(selector),
            Err(e) => {
                let error = FetchError::Parse {
                    selector: css.clone(),
                    reason: e.to_string(),
                };
                warn!(%error, "Skipping download selector");
                None
            }
        })
        .collect()
}
