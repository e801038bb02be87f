//! Link discovery module.
//!
//! Provides:
//! - Hyperlink extraction from page markup
//! - Extension allow-list filtering

pub mod extractor;

pub use extractor::{extract_links, matches_extension};
