//! Download history module.
//!
//! Tracks which file URLs have already been downloaded and organized, so a
//! later run can skip them without touching the network.

pub mod store;

pub use store::DownloadHistory;
