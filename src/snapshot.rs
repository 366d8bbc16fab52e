/*!
 * Snapshot assembly: root label, hierarchy, then every file's content
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use indicatif::ProgressBar;
use tracing::{debug, info, warn};

use crate::filter::ExclusionSet;
use crate::hierarchy;
use crate::reader;
use crate::report::SnapshotStats;
use crate::walker::{self, backslash_path};

/// Blank space between the hierarchy and each file block
pub const SEPARATOR: &str = "\n\n\n\n\n";
/// Start of every file header line
pub const FILE_HEADER: &str = "// File: ";

/// A finished snapshot document and how it was built
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// The full text, ready for delivery
    pub document: String,
    /// Counters collected while building
    pub stats: SnapshotStats,
}

/// Builds snapshot documents for one root directory
pub struct SnapshotBuilder {
    root: PathBuf,
    exclusions: ExclusionSet,
    progress: Arc<ProgressBar>,
}

impl SnapshotBuilder {
    /// Create a builder for `root` with the given exclusions
    pub fn new(root: impl Into<PathBuf>, exclusions: ExclusionSet) -> Self {
        Self {
            root: root.into(),
            exclusions,
            progress: Arc::new(ProgressBar::hidden()),
        }
    }

    /// Report per-file progress on the given bar
    pub fn with_progress(mut self, progress: Arc<ProgressBar>) -> Self {
        self.progress = progress;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Build the document.
    ///
    /// Never fails: unlistable directories show up as inline error lines in
    /// the hierarchy and unreadable files get an empty body.
    pub fn build(&self) -> Snapshot {
        let started = Instant::now();
        let label = root_label(&self.root);
        let mut stats = SnapshotStats::default();

        let mut document = String::new();
        document.push_str(&label);
        document.push_str("/\n");
        document.push_str(&hierarchy::render(&self.root, "", &self.exclusions));
        document.push_str(SEPARATOR);

        let files = walker::walk_files(&self.root, &self.exclusions);
        self.progress.set_length(files.len() as u64);
        debug!(root = %self.root.display(), files = files.len(), "assembling file blocks");

        for rel in &files {
            self.progress.set_message(rel.display().to_string());

            document.push_str(FILE_HEADER);
            document.push_str(&label);
            document.push('\\');
            document.push_str(&backslash_path(rel));
            document.push_str("\n\n");

            match reader::read_normalized_counted(&self.root.join(rel)) {
                Ok(normalized) => {
                    stats.lines_kept += normalized.kept;
                    stats.lines_dropped += normalized.dropped;
                    document.push_str(&normalized.body);
                }
                Err(e) => {
                    warn!(error = %e, "substituting empty content");
                    stats.unreadable.push(rel.clone());
                }
            }

            document.push_str(SEPARATOR);
            stats.files_included += 1;
            self.progress.inc(1);
        }

        stats.document_bytes = document.len();
        stats.duration = started.elapsed();
        info!(
            files = stats.files_included,
            unreadable = stats.unreadable.len(),
            bytes = stats.document_bytes,
            "snapshot built"
        );

        Snapshot { document, stats }
    }
}

/// Build a snapshot document for `root` without progress reporting
pub fn build(root: &Path, exclusions: &ExclusionSet) -> String {
    SnapshotBuilder::new(root, exclusions.clone()).build().document
}

/// Name printed on the first line and in every file header.
///
/// Paths like `.` have no final component of their own; for those the
/// canonical path is consulted before falling back to the path as given.
pub fn root_label(root: &Path) -> String {
    if let Some(name) = root.file_name() {
        return name.to_string_lossy().into_owned();
    }

    fs::canonicalize(root)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| root.display().to_string())
}
