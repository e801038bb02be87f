//! File Harvester - download and organize files linked from web pages.
//!
//! This library scans a list of pages for links to files with allowed
//! extensions, downloads the ones not fetched before and files them into
//! folders under a base directory.
//!
//! # Features
//!
//! - Relative link resolution and extension filtering
//! - Download history so files are fetched once across runs
//! - Organization by date, by type, or by type then date
//! - Deterministic `name(1).ext` collision handling
//! - Fixed delay between requests
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use file_harvester::{Config, Fetcher, Pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.json"))?;
//!     let fetcher = Fetcher::new(&config.user_agent)?;
//!
//!     let report = Pipeline::new(&config, fetcher).run().await;
//!     println!("{} file(s) organized", report.stats.files_organized);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fetch;
pub mod fs;
pub mod history;
pub mod links;
pub mod output;

// Re-exports for convenience
pub use config::{Config, OrganizationRule};
pub use download::{LinkOutcome, Pipeline, RunReport, RunStats};
pub use error::{Error, FetchError, HistoryError, OrganizeError, Result};
pub use fetch::Fetcher;
pub use history::DownloadHistory;
pub use links::extract_links;
