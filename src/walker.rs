/*!
 * Recursive file enumeration relative to a root
 */

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::filter::ExclusionSet;

/// Whether a walked entry should be yielded as a file.
///
/// A symlink is yielded when it points at a regular file or points nowhere;
/// a dangling link then gets a file block with empty content. Symlinked
/// directories are never descended.
fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    if !file_type.is_symlink() {
        return false;
    }
    match fs::metadata(entry.path()) {
        Ok(target) => target.is_file(),
        Err(_) => true,
    }
}

/// Enumerate every non-excluded file under `root`, relative to `root`.
///
/// Directories whose name matches the exclusion set are pruned before they
/// are entered, so nothing beneath them is ever visited. Files are filtered
/// against the same set. Paths come back in sorted pre-order, the same order
/// the hierarchy renderer prints them in.
///
/// Entries that cannot be read are logged and skipped.
pub fn walk_files(root: &Path, exclusions: &ExclusionSet) -> Vec<PathBuf> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !exclusions.is_excluded_os(e.file_name()));

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if entry.depth() == 0 || !is_regular_file(&entry) {
            continue;
        }

        match entry.path().strip_prefix(root) {
            Ok(rel) => files.push(rel.to_path_buf()),
            Err(_) => warn!(path = %entry.path().display(), "entry outside walk root"),
        }
    }

    debug!(root = %root.display(), files = files.len(), "walk complete");
    files
}

/// Join the components of a relative path with `\`, whatever the platform.
pub fn backslash_path(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("\\")
}
