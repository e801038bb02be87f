//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// File harvester CLI.
#[derive(Parser, Debug)]
#[command(
    name = "file-harvester",
    version,
    about = "Download and organize files linked from web pages",
    long_about = "Scans the configured pages for links to files with allowed extensions,\n\
                  downloads the ones not fetched by earlier runs and files them into\n\
                  folders by date, by type, or by type then date."
)]
pub struct Args {
    /// Path to the JSON (or .toml) configuration file.
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Download files even if they are already in the history.
    #[arg(short, long)]
    pub force_download: bool,

    /// Hide download progress bars.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}
