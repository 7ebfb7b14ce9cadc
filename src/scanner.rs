//! Recursive listing of the files to sort.

use crate::error::{OrganizeError, OrganizeResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists every regular file below `root`, sorted by path.
///
/// Hidden files and nested directories are included. Symlinks are not
/// followed while walking; a link is listed when it points at a regular file,
/// and dangling links are skipped.
pub fn collect_files(root: &Path) -> OrganizeResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| OrganizeError::Scan {
            path: e.path().unwrap_or(root).to_path_buf(),
            source: e,
        })?;

        let file_type = entry.file_type();
        let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
        if is_file {
            files.push(entry.into_path());
        }
    }

    files.sort();
    tracing::info!(root = %root.display(), count = files.len(), "scanned files");
    Ok(files)
}
