/*!
 * ASCII hierarchy rendering
 *
 * Renders a directory as an indented tree:
 *
 * ```text
 * ├── src/
 * │   ├── lib.rs
 * │   └── main.rs
 * └── Cargo.toml
 * ```
 *
 * Directories always get the branch marker and a `│   ` continuation, even
 * when they are the last entry of their parent. Only a file that is the
 * final entry of its directory's full listing gets the terminal marker.
 */

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::SnapshotError;
use crate::filter::ExclusionSet;

/// Marker for every directory and every non-final file
pub const BRANCH: &str = "├── ";
/// Marker for a file that closes its directory listing
pub const LAST_BRANCH: &str = "└── ";
/// Prefix added for each level of nesting
pub const CONTINUATION: &str = "│   ";

/// A single child of a listed directory
#[derive(Debug)]
struct Child {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Pending work on the explicit traversal stack
enum Work {
    /// A finished line, emitted as is
    Line(String),
    /// A directory whose children still have to be listed
    Expand {
        path: PathBuf,
        prefix: String,
        nested: bool,
    },
}

/// List the non-excluded children of `path`, sorted by name.
///
/// Symlinks are reported as leaves so that link cycles cannot be followed.
fn list_children(path: &Path, exclusions: &ExclusionSet) -> io::Result<Vec<Child>> {
    let mut children = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if exclusions.is_excluded(&name) {
            continue;
        }
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        children.push(Child {
            name,
            path: entry.path(),
            is_dir,
        });
    }

    children.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(children)
}

/// Render the contents of `path` as an ASCII tree.
///
/// Every emitted line starts with `prefix`. Lines are joined with `\n` and
/// the block has no trailing newline. A subdirectory with no visible
/// children is followed by one blank line. A directory that cannot be listed
/// produces a single `Error accessing {path}: {cause}` line in place of its
/// contents; the rest of the tree is still rendered.
pub fn render(path: &Path, prefix: &str, exclusions: &ExclusionSet) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut stack = vec![Work::Expand {
        path: path.to_path_buf(),
        prefix: prefix.to_string(),
        nested: false,
    }];

    while let Some(work) = stack.pop() {
        let (dir, prefix, nested) = match work {
            Work::Line(line) => {
                lines.push(line);
                continue;
            }
            Work::Expand {
                path,
                prefix,
                nested,
            } => (path, prefix, nested),
        };

        let children = match list_children(&dir, exclusions) {
            Ok(children) => children,
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "failed to list directory");
                lines.push(SnapshotError::listing(&dir, e).to_string());
                continue;
            }
        };
        debug!(path = %dir.display(), entries = children.len(), "rendering directory");

        // A nested directory with nothing to show still occupies one (blank) line
        if nested && children.is_empty() {
            lines.push(String::new());
            continue;
        }

        // Pushed in reverse so the first child is popped first; a directory's
        // line is popped before its contents.
        let count = children.len();
        for (index, child) in children.into_iter().enumerate().rev() {
            if child.is_dir {
                stack.push(Work::Expand {
                    path: child.path,
                    prefix: format!("{}{}", prefix, CONTINUATION),
                    nested: true,
                });
                stack.push(Work::Line(format!("{}{}{}/", prefix, BRANCH, child.name)));
            } else {
                let marker = if index + 1 == count { LAST_BRANCH } else { BRANCH };
                stack.push(Work::Line(format!("{}{}{}", prefix, marker, child.name)));
            }
        }
    }

    lines.join("\n")
}
