/*!
 * dirsnap - Snapshot a source tree into one flat text blob
 *
 * A snapshot is the root's name, an ASCII rendering of its hierarchy, and the
 * content of every non-excluded file with blank and comment lines stripped,
 * each preceded by a `// File:` header. The result is meant to be pasted into
 * another tool, such as an LLM chat.
 */

pub mod config;
pub mod delivery;
pub mod error;
pub mod filter;
pub mod hierarchy;
pub mod reader;
pub mod report;
pub mod snapshot;
pub mod walker;


// Re-export main components for easier access
pub use config::{Config, OutputKind};
pub use delivery::{ClipboardSink, FileSink, Sink, StdoutSink};
pub use error::{Result, SnapshotError};
pub use filter::{is_excluded, ExclusionSet};
pub use hierarchy::render;
pub use reader::read_normalized;
pub use report::{ReportFormat, Reporter, SnapshotStats};
pub use snapshot::{build, Snapshot, SnapshotBuilder};
pub use walker::walk_files;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
