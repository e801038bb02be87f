//! Network retrieval module.
//!
//! Provides:
//! - Page fetching with a short timeout
//! - Streaming file downloads into a staging folder

pub mod client;

pub use client::{parse_url, Fetcher, FILE_TIMEOUT, PAGE_TIMEOUT};
