//! Configuration structures and loading logic.

use crate::config::rules::OrganizationRule;
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Pages to scan for downloadable links, in processing order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub target_urls: Vec<String>,

    /// Base directory where files are staged and organized.
    #[serde(default = "default_download_base_folder")]
    pub download_base_folder: PathBuf,

    /// How downloaded files are filed into subfolders.
    #[serde(default, deserialize_with = "null_as_default")]
    pub organization_rule: OrganizationRule,

    /// Extension suffixes to download, e.g. ".pdf". Compared case-insensitively.
    #[serde(default, deserialize_with = "null_as_default")]
    pub allowed_extensions: Vec<String>,

    /// Pause between requests, in seconds.
    #[serde(default = "default_request_delay")]
    pub request_delay_seconds: f64,

    /// JSON file holding the URLs downloaded by earlier runs.
    #[serde(default = "default_history_file")]
    pub download_history_file: PathBuf,

    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_urls: Vec::new(),
            download_base_folder: default_download_base_folder(),
            organization_rule: OrganizationRule::default(),
            allowed_extensions: Vec::new(),
            request_delay_seconds: default_request_delay(),
            download_history_file: default_history_file(),
            user_agent: default_user_agent(),
        }
    }
}

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_download_base_folder() -> PathBuf {
    PathBuf::from("downloads")
}

fn default_request_delay() -> f64 {
    2.0
}

fn default_history_file() -> PathBuf {
    PathBuf::from("downloaded_files_history.json")
}

fn default_user_agent() -> String {
    format!("file-harvester/{}", env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// Load configuration from a JSON file, or TOML when the path ends in `.toml`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.json",
                    path.display()
                ))
            } else {
                Error::Config(format!(
                    "Failed to read configuration file {}: {}",
                    path.display(),
                    e
                ))
            }
        })?;

        let is_toml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("toml"));

        let config: Config = if is_toml {
            toml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        Ok(config)
    }

    /// The inter-request delay as a duration. Negative or non-finite values yield zero.
    pub fn request_delay(&self) -> Duration {
        if self.request_delay_seconds.is_finite() && self.request_delay_seconds > 0.0 {
            Duration::from_secs_f64(self.request_delay_seconds)
        } else {
            Duration::ZERO
        }
    }
}
