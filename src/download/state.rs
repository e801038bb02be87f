//! Per-run statistics.

/// Counters collected while processing a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub pages_fetched: u64,
    pub pages_failed: u64,
    pub links_found: u64,
    pub files_organized: u64,
    pub skipped_in_history: u64,
    pub fetch_failed: u64,
    pub organize_failed: u64,
}

impl RunStats {
    pub fn increment_page_fetched(&mut self) {
        self.pages_fetched += 1;
    }

    pub fn increment_page_failed(&mut self) {
        self.pages_failed += 1;
    }

    pub fn add_links_found(&mut self, count: usize) {
        self.links_found += count as u64;
    }

    pub fn increment_organized(&mut self) {
        self.files_organized += 1;
    }

    pub fn increment_skipped(&mut self) {
        self.skipped_in_history += 1;
    }

    pub fn increment_fetch_failed(&mut self) {
        self.fetch_failed += 1;
    }

    pub fn increment_organize_failed(&mut self) {
        self.organize_failed += 1;
    }

    /// Links that reached the download stage.
    pub fn attempted(&self) -> u64 {
        self.files_organized + self.fetch_failed + self.organize_failed
    }
}

/// Outcome of a full run.
#[derive(Debug, Default, Clone)]
pub struct RunReport {
    pub stats: RunStats,
    /// History entries added by this run.
    pub history_added: usize,
    /// Whether the history file was written successfully.
    pub history_saved: bool,
}
