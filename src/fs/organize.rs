//! Relocation of staged files into their organized folders.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::config::OrganizationRule;
use crate::error::OrganizeError;
use crate::fs::naming::unique_destination;
use crate::fs::paths::{destination_dir, ensure_dir};

/// Move a staged file under `base_dir` according to `rule`.
///
/// Returns the final path. On any error the staged file stays where it is;
/// an unknown rule leaves it untouched without creating any folder.
pub fn organize_file(
    staged: &Path,
    base_dir: &Path,
    rule: &OrganizationRule,
    today: NaiveDate,
) -> Result<PathBuf, OrganizeError> {
    if !staged.is_file() {
        return Err(OrganizeError::MissingSource(staged.to_path_buf()));
    }

    let target_dir = destination_dir(staged, base_dir, rule, today)?;

    let file_name = staged
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| OrganizeError::MissingSource(staged.to_path_buf()))?;

    ensure_dir(&target_dir).map_err(|source| OrganizeError::Io {
        from: staged.to_path_buf(),
        to: target_dir.clone(),
        source,
    })?;

    let final_path = unique_destination(&target_dir, file_name);

    tracing::debug!(
        "Organizing '{}' into '{}'",
        file_name,
        target_dir.display()
    );

    move_file(staged, &final_path).map_err(|source| OrganizeError::Io {
        from: staged.to_path_buf(),
        to: final_path.clone(),
        source,
    })?;

    Ok(final_path)
}

/// Rename, falling back to copy + remove when the rename crosses filesystems.
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            tracing::debug!(
                "Rename failed ({}), copying '{}' instead",
                rename_err,
                from.display()
            );

            if let Err(copy_err) = fs::copy(from, to) {
                // Don't leave a partial copy next to the intact source
                let _ = fs::remove_file(to);
                return Err(copy_err);
            }

            if let Err(remove_err) = fs::remove_file(from) {
                let _ = fs::remove_file(to);
                return Err(remove_err);
            }

            Ok(())
        }
    }
}
