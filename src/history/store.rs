//! Persistent set of downloaded file URLs.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::HistoryError;

/// Set of absolute file URLs that were downloaded and organized successfully.
#[derive(Debug, Default, Clone)]
pub struct DownloadHistory {
    urls: HashSet<String>,
    /// Number of entries present when the history was loaded.
    baseline: usize,
}

impl DownloadHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load history from a JSON array of URL strings.
    ///
    /// A missing file is an empty history, not an error.
    pub fn load(path: &Path) -> Result<Self, HistoryError> {
        let content = match fs::read(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(source) => {
                return Err(HistoryError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let list: Vec<String> =
            serde_json::from_slice(&content).map_err(|source| HistoryError::Corrupt {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::from_urls(list))
    }

    /// Load history, falling back to an empty one on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(history) => {
                if path.exists() {
                    tracing::info!("Download history loaded from {}", path.display());
                }
                history
            }
            Err(e) => {
                tracing::warn!("{}. Starting with an empty history.", e);
                Self::new()
            }
        }
    }

    /// Build a history from existing URLs; they count as the loaded baseline.
    pub fn from_urls<I: IntoIterator<Item = String>>(urls: I) -> Self {
        let urls: HashSet<String> = urls.into_iter().collect();
        let baseline = urls.len();
        Self { urls, baseline }
    }

    /// Write the history as a pretty-printed JSON array, replacing the file.
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        let mut list: Vec<&str> = self.urls.iter().map(String::as_str).collect();
        list.sort_unstable();

        let content = serde_json::to_string_pretty(&list).map_err(HistoryError::Serialize)?;

        let io_err = |source| HistoryError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, content).map_err(io_err)?;

        tracing::info!("Download history saved to {}", path.display());
        Ok(())
    }

    /// Check whether a URL was downloaded before.
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    /// Record a URL. Returns `true` if it was not already present.
    pub fn record(&mut self, url: &str) -> bool {
        self.urls.insert(url.to_string())
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Entries added since the history was loaded.
    pub fn added_count(&self) -> usize {
        self.urls.len().saturating_sub(self.baseline)
    }

    /// Whether the history grew and needs saving.
    pub fn has_grown(&self) -> bool {
        self.urls.len() > self.baseline
    }
}
