//! Run orchestration: pages, links, downloads, organization and history.

use std::path::PathBuf;

use chrono::Local;
use tokio::time::sleep;

use crate::config::Config;
use crate::download::state::{RunReport, RunStats};
use crate::fetch::{parse_url, Fetcher};
use crate::fs::{ensure_dir, organize_file};
use crate::history::DownloadHistory;
use crate::links::extract_links;

/// What happened to a single discovered link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Already in history and force mode is off. No request was made.
    SkippedInHistory,
    /// The file could not be downloaded.
    FetchFailed,
    /// The file was downloaded but could not be moved into place.
    OrganizeFailed(PathBuf),
    /// The file was downloaded and filed at this path.
    Organized(PathBuf),
}

impl LinkOutcome {
    /// Whether the link reached the download stage and should be followed by a pause.
    pub fn reached_fetch(&self) -> bool {
        !matches!(self, LinkOutcome::SkippedInHistory)
    }
}

/// Sequential download pipeline for one run.
///
/// Pages are processed in configured order and links in the order they were
/// first seen on the page. Nothing runs concurrently.
pub struct Pipeline<'a> {
    config: &'a Config,
    fetcher: Fetcher,
    history: DownloadHistory,
    force_download: bool,
    stats: RunStats,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a Config, fetcher: Fetcher) -> Self {
        Self {
            config,
            fetcher,
            history: DownloadHistory::new(),
            force_download: false,
            stats: RunStats::default(),
        }
    }

    /// Re-download files even if they are in history.
    pub fn force_download(mut self, force: bool) -> Self {
        self.force_download = force;
        self
    }

    /// Run every target page and persist history if it grew.
    pub async fn run(mut self) -> RunReport {
        self.init();

        let config = self.config;
        let targets = &config.target_urls;
        for (index, target) in targets.iter().enumerate() {
            self.process_url(target).await;

            if index + 1 < targets.len() {
                self.pause().await;
            }
        }

        self.finalize()
    }

    fn init(&mut self) {
        let base = &self.config.download_base_folder;
        if let Err(e) = ensure_dir(base) {
            tracing::error!(
                "Could not create download folder '{}': {}",
                base.display(),
                e
            );
        } else {
            tracing::info!("Download folder: {}", base.display());
        }

        self.history = DownloadHistory::load_or_default(&self.config.download_history_file);
        tracing::info!("{} file(s) in download history", self.history.len());

        if self.force_download {
            tracing::info!("Force download enabled: files in history will be downloaded again");
        }
    }

    fn finalize(self) -> RunReport {
        let history_added = self.history.added_count();
        let mut history_saved = false;

        if self.history.has_grown() {
            tracing::info!("Adding {} new file(s) to history", history_added);
            match self.history.save(&self.config.download_history_file) {
                Ok(()) => history_saved = true,
                Err(e) => tracing::error!("Failed to save download history: {}", e),
            }
        } else {
            tracing::info!("No new files to add to history");
        }

        RunReport {
            stats: self.stats,
            history_added,
            history_saved,
        }
    }

    /// Fetch one page and process every qualifying link on it.
    async fn process_url(&mut self, target: &str) {
        tracing::info!("Processing page: {}", target);

        let base = match parse_url(target) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Skipping page: {}", e);
                self.stats.increment_page_failed();
                return;
            }
        };

        let markup = match self.fetcher.fetch_page(target).await {
            Ok(markup) => markup,
            Err(e) => {
                tracing::warn!("Could not fetch page, skipping: {}", e);
                self.stats.increment_page_failed();
                return;
            }
        };
        self.stats.increment_page_fetched();

        let links = extract_links(&markup, &base, &self.config.allowed_extensions);
        if links.is_empty() {
            tracing::info!("No downloadable links found on {}", target);
            return;
        }

        tracing::info!("Found {} downloadable link(s) on {}", links.len(), target);
        self.stats.add_links_found(links.len());

        for link in &links {
            let outcome = self.process_link(link).await;
            if outcome.reached_fetch() {
                self.pause().await;
            }
        }
    }

    /// Download, organize and record a single link.
    async fn process_link(&mut self, link: &str) -> LinkOutcome {
        if !self.force_download && self.history.contains(link) {
            tracing::info!("Already downloaded, skipping: {}", link);
            self.stats.increment_skipped();
            return LinkOutcome::SkippedInHistory;
        }

        let staged = match self
            .fetcher
            .fetch_file(link, &self.config.download_base_folder)
            .await
        {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("Download failed: {}", e);
                self.stats.increment_fetch_failed();
                return LinkOutcome::FetchFailed;
            }
        };

        let today = Local::now().date_naive();
        match organize_file(
            &staged,
            &self.config.download_base_folder,
            &self.config.organization_rule,
            today,
        ) {
            Ok(final_path) => {
                tracing::info!("Organized {} -> {}", link, final_path.display());
                self.history.record(link);
                self.stats.increment_organized();
                LinkOutcome::Organized(final_path)
            }
            Err(e) => {
                tracing::warn!("Could not organize '{}': {}", staged.display(), e);
                self.stats.increment_organize_failed();
                LinkOutcome::OrganizeFailed(staged)
            }
        }
    }

    /// Fixed pause between requests.
    async fn pause(&self) {
        let delay = self.config.request_delay();
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }
}
