//! Filesystem module.
//!
//! Provides:
//! - Filename derivation and collision handling
//! - Destination folder rules
//! - Moving staged files into place

pub mod naming;
pub mod organize;
pub mod paths;

pub use naming::{extension_folder, filename_from_url, sanitize_filename, unique_destination};
pub use organize::organize_file;
pub use paths::{destination_dir, ensure_dir};
