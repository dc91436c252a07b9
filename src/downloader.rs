//! One platform's harvest: discover, cap, then fetch one project at a time.

use crate::config::Settings;
use crate::fetcher::Fetcher;
use crate::models::{FetchOutcome, RunSummary};
use crate::scrapers::{Discoverer, ScrapeRules};
use crate::throttle::Throttle;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::path::Path;
use tracing::{debug, error, info, instrument};

pub struct PlatformDownloader<R> {
    rules: R,
    client: Client,
    fetcher: Fetcher,
    cap: usize,
    throttle: Throttle,
}

impl<R: ScrapeRules> PlatformDownloader<R> {
    pub fn new(rules: R, settings: &Settings, client: Client) -> Result<Self, url::ParseError> {
        let platform = rules.platform();
        let fetcher = Fetcher::new(settings.platform_root(platform), client.clone(), settings)?;
        Ok(Self {
            rules,
            client,
            fetcher,
            cap: settings.max_projects_per_type,
            throttle: Throttle::new(settings.delay_for(platform)),
        })
    }

    /// Directory this platform's projects are written to.
    pub fn root(&self) -> &Path {
        self.fetcher.root()
    }

    /// Fetch at most `cap` discovered projects, strictly in order.
    ///
    /// Fetch N+1 starts only after fetch N and the throttle gap that follows
    /// it have completed. A failed fetch is logged and counted, never fatal.
    #[instrument(level = "info", skip_all, fields(platform = %self.rules.platform()))]
    pub async fn run_all(&self) -> RunSummary {
        info!("Starting platform download");
        let discovery = Discoverer::new(&self.rules, &self.client).list().await;
        for failure in &discovery.failures {
            debug!(url = %failure.url, error = %failure.error, "Listing page contributed nothing");
        }
        let selected: Vec<R::Entry> = discovery.entries.into_iter().take(self.cap).collect();
        let total = selected.len();
        info!(
            total,
            cap = self.cap,
            delay = ?self.throttle.delay(),
            min_duration = ?self.throttle.minimum_elapsed(total),
            "Projects selected"
        );

        let results: Vec<bool> = stream::iter(selected.iter().enumerate())
            .then(|(index, entry)| async move {
                if index > 0 {
                    self.throttle.pause().await;
                }
                match self.fetcher.fetch(entry).await {
                    Ok(FetchOutcome::AlreadyPresent) => true,
                    Ok(FetchOutcome::Cloned) => {
                        info!(index, "Repository cloned");
                        true
                    }
                    Ok(FetchOutcome::Archived {
                        url,
                        filename,
                        bytes,
                    }) => {
                        info!(index, %url, %filename, bytes, "Archive downloaded");
                        true
                    }
                    Err(e) => {
                        error!(index, error = %e, ?entry, "Project fetch failed");
                        false
                    }
                }
            })
            .collect()
            .await;

        let success = results.into_iter().filter(|ok| *ok).count();
        let summary = RunSummary { success, total };
        info!(%summary, "Platform download finished");
        summary
    }
}
