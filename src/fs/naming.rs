//! Filename derivation and collision handling.

use std::path::{Path, PathBuf};

use url::Url;

use crate::error::FetchError;

/// Folder used by type-based rules for files without an extension.
pub const NO_EXTENSION_FOLDER: &str = "Otros";

/// Validate and sanitize a filename by removing or replacing invalid characters.
///
/// Returns `None` if the name is empty, a dot segment, or contains separators
/// or null bytes.
pub fn sanitize_filename(name: &str) -> Option<String> {
    if name == "." || name == ".." {
        return None;
    }

    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        return None;
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return None;
    }

    Some(sanitized)
}

/// Derive the local filename for a file URL from its last path segment.
pub fn filename_from_url(file_url: &str) -> Result<String, FetchError> {
    let no_name = || FetchError::NoFilename(file_url.to_string());

    let parsed = Url::parse(file_url).map_err(|_| no_name())?;
    let last_segment = parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .ok_or_else(no_name)?;

    sanitize_filename(last_segment).ok_or_else(no_name)
}

/// Folder name for a file's extension: lower-cased, first letter upper-cased.
///
/// `report.PDF` gives `Pdf`; a file with no extension gives `Otros`.
pub fn extension_folder(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut chars = ext.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => NO_EXTENSION_FOLDER.to_string(),
    }
}

/// Pick a free path for `file_name` inside `dir`.
///
/// Collisions get a counter before the extension: `a.txt`, `a(1).txt`,
/// `a(2).txt`, and so on.
pub fn unique_destination(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let as_path = Path::new(file_name);
    let stem = as_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    let ext = as_path.extension().and_then(|e| e.to_str());

    let mut counter: u64 = 1;
    loop {
        let new_name = match ext {
            Some(ext) => format!("{}({}).{}", stem, counter, ext),
            None => format!("{}({})", stem, counter),
        };

        let new_path = dir.join(&new_name);
        if !new_path.exists() {
            return new_path;
        }

        counter += 1;
    }
}
