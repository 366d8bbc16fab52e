/*!
 * File content reading with blank-line and comment-line stripping
 */

use std::fs;
use std::path::Path;

use tracing::trace;

use crate::error::{Result, SnapshotError};

/// Marker that makes a whole line a comment
pub const COMMENT_MARKER: &str = "//";

/// File body after stripping, plus what was dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    /// Surviving lines, original form and terminators
    pub body: String,
    /// Number of lines kept
    pub kept: usize,
    /// Number of blank or comment lines dropped
    pub dropped: usize,
}

/// Whether a physical line is dropped from the output.
///
/// The test runs on the trimmed line; the kept line itself is never trimmed.
fn is_droppable(line: &str) -> bool {
    let stripped = line.trim();
    stripped.is_empty() || stripped.starts_with(COMMENT_MARKER)
}

/// Strip blank and whole-line comment lines from `text`, counting both sides
pub fn normalize_counted(text: &str) -> Normalized {
    let mut out = Normalized {
        body: String::with_capacity(text.len()),
        ..Normalized::default()
    };

    for line in text.split_inclusive('\n') {
        if is_droppable(line) {
            out.dropped += 1;
        } else {
            out.body.push_str(line);
            out.kept += 1;
        }
    }

    out
}

/// Strip blank and whole-line comment lines from `text`
pub fn normalize(text: &str) -> String {
    normalize_counted(text).body
}

/// Read a file as UTF-8 text and normalize it.
///
/// Fails if the file cannot be opened or read, or is not valid UTF-8.
/// Callers building a snapshot substitute an empty body on failure.
pub fn read_normalized_counted(path: &Path) -> Result<Normalized> {
    let text = fs::read_to_string(path).map_err(|e| SnapshotError::read(path, e))?;
    let normalized = normalize_counted(&text);
    trace!(
        path = %path.display(),
        kept = normalized.kept,
        dropped = normalized.dropped,
        "normalized file"
    );
    Ok(normalized)
}

/// Read a file as UTF-8 text and return its normalized body
pub fn read_normalized(path: &Path) -> Result<String> {
    read_normalized_counted(path).map(|n| n.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_drops_blank_and_comment_lines() {
        let text = "\n  \n// comment\ncode();\n  // x\nmore;\n";
        assert_eq!(normalize(text), "code();\nmore;\n");
    }

    #[test]
    fn test_kept_lines_keep_indentation() {
        let text = "fn main() {\n    let x = 1; // trailing comment stays\n\n    // gone\n}\n";
        assert_eq!(
            normalize(text),
            "fn main() {\n    let x = 1; // trailing comment stays\n}\n"
        );
    }

    #[test]
    fn test_preserves_crlf_and_missing_final_newline() {
        let text = "a\r\n\r\n// c\r\nb";
        assert_eq!(normalize(text), "a\r\nb");
    }

    #[test]
    fn test_single_slash_is_not_a_comment() {
        assert_eq!(normalize("/ path\n/* block */\n"), "/ path\n/* block */\n");
    }

    #[test]
    fn test_counts() {
        let n = normalize_counted("x\n\n// y\nz\n");
        assert_eq!(n.kept, 2);
        assert_eq!(n.dropped, 2);
    }

    #[test]
    fn test_read_normalized_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.c");
        let mut file = File::create(&path).unwrap();
        write!(file, "// header\nint x;\n\n").unwrap();

        assert_eq!(read_normalized(&path).unwrap(), "int x;\n");
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempdir().unwrap();
        let err = read_normalized(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, SnapshotError::Read { .. }));
    }

    #[test]
    fn test_read_non_utf8_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        fs::write(&path, [0xffu8, 0xfe, 0x00, 0x80]).unwrap();

        assert!(read_normalized(&path).is_err());
    }
}
