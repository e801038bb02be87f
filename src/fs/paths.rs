//! Destination directory rules.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::config::OrganizationRule;
use crate::error::OrganizeError;
use crate::fs::naming::extension_folder;

/// Date format used for date-based folders.
pub const DATE_FOLDER_FORMAT: &str = "%Y-%m-%d";

/// Compute the folder a file belongs in under `base_dir`.
pub fn destination_dir(
    file: &Path,
    base_dir: &Path,
    rule: &OrganizationRule,
    today: NaiveDate,
) -> Result<PathBuf, OrganizeError> {
    let date_folder = || today.format(DATE_FOLDER_FORMAT).to_string();

    let path = match rule {
        OrganizationRule::Date => base_dir.join(date_folder()),
        OrganizationRule::Type => base_dir.join(extension_folder(file)),
        OrganizationRule::TypeThenDate => base_dir
            .join(extension_folder(file))
            .join(date_folder()),
        OrganizationRule::Unknown(raw) => return Err(OrganizeError::UnknownRule(raw.clone())),
    };

    Ok(path)
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.is_dir() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
