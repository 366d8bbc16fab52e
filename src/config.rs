/*!
 * Configuration handling for dirsnap
 */

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use clap_complete::Shell;

use crate::delivery::{ClipboardSink, FileSink, Sink, StdoutSink};
use crate::error::Result;
use crate::filter::ExclusionSet;
use crate::{bail, ensure};

/// Exclusions applied when none are given on the command line
pub const DEFAULT_EXCLUDES: &[&str] = &["bin", "cmake-build-debug"];

/// Default output file for the `file` sink
pub const DEFAULT_OUTPUT_FILE: &str = ".dirsnap.txt";

/// Where the finished document goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputKind {
    /// Copy to the system clipboard (default)
    #[default]
    Clipboard,
    /// Print to standard output
    Stdout,
    /// Write to a file
    File,
}

/// Command-line arguments for dirsnap
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "dirsnap",
    version = env!("CARGO_PKG_VERSION"),
    about = "Snapshot a source tree into one flat text blob",
    long_about = "Renders a directory as an ASCII tree, then appends the content of every non-excluded file (blank and comment lines stripped), ready to paste into another tool."
)]
pub struct Args {
    /// Root directory to snapshot
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Substrings that exclude any file or directory name containing them
    /// (replaces the defaults: bin, cmake-build-debug)
    #[clap(short, long = "exclude", value_delimiter = ',')]
    pub excludes: Vec<String>,

    /// Start from an empty exclusion list when no --exclude is given
    #[clap(long)]
    pub no_default_excludes: bool,

    /// Where to deliver the snapshot
    #[clap(long = "output", value_enum, default_value_t = OutputKind::default())]
    pub output: OutputKind,

    /// Output file path (implies --output file)
    #[clap(short = 'o', long)]
    pub output_file: Option<String>,

    /// Print a summary table to stderr after delivery
    #[clap(long)]
    pub report: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory to snapshot
    pub target_dir: PathBuf,

    /// Name-substring exclusions
    pub exclusions: ExclusionSet,

    /// Delivery destination
    pub output: OutputKind,

    /// Target of the file sink
    pub output_file: PathBuf,

    /// Whether to print the summary report
    pub report: bool,

    /// Log verbosity level from -v flags
    pub verbosity: u8,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let excludes: Vec<String> = args.excludes.into_iter().filter(|e| !e.is_empty()).collect();
        let exclusions = if excludes.is_empty() && !args.no_default_excludes {
            ExclusionSet::new(DEFAULT_EXCLUDES.iter().copied())
        } else {
            ExclusionSet::new(excludes)
        };

        let output = if args.output_file.is_some() {
            OutputKind::File
        } else {
            args.output
        };

        Self {
            target_dir: PathBuf::from(args.directory_path),
            exclusions,
            output,
            output_file: PathBuf::from(
                args.output_file
                    .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string()),
            ),
            report: args.report,
            verbosity: args.verbose,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_dir.is_dir(),
            PathNotFound,
            "Target directory not found: {}",
            self.target_dir.display()
        );

        if self.output == OutputKind::File {
            if let Some(parent) = self.output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.is_dir() {
                    bail!(
                        Config,
                        "Output directory not found: {}",
                        parent.display()
                    );
                }
            }
        }

        Ok(())
    }

    /// The sink selected by this configuration
    pub fn sink(&self) -> Box<dyn Sink> {
        match self.output {
            OutputKind::Clipboard => Box::new(ClipboardSink),
            OutputKind::Stdout => Box::new(StdoutSink),
            OutputKind::File => Box::new(FileSink::new(&self.output_file)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SnapshotError;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["dirsnap"];
        argv.extend_from_slice(args);
        Config::from_args(Args::parse_from(argv))
    }

    #[test]
    fn test_default_excludes() {
        let config = parse(&[]);
        assert_eq!(config.exclusions, ExclusionSet::new(DEFAULT_EXCLUDES.iter().copied()));
        assert_eq!(config.output, OutputKind::Clipboard);
        assert_eq!(config.target_dir, PathBuf::from("."));
    }

    #[test]
    fn test_explicit_excludes_replace_defaults() {
        let config = parse(&["-e", "target,node_modules", "--exclude", ".git"]);
        assert_eq!(
            config.exclusions.patterns(),
            &["target", "node_modules", ".git"]
        );
    }

    #[test]
    fn test_no_default_excludes() {
        let config = parse(&["--no-default-excludes"]);
        assert!(config.exclusions.is_empty());

        let config = parse(&["--no-default-excludes", "-e", "bin,out"]);
        assert_eq!(config.exclusions.patterns(), &["bin", "out"]);
    }

    #[test]
    fn test_output_file_implies_file_sink() {
        let config = parse(&["-o", "snap.txt"]);
        assert_eq!(config.output, OutputKind::File);
        assert_eq!(config.output_file, PathBuf::from("snap.txt"));
    }

    #[test]
    fn test_validate_missing_root() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        let config = parse(&[missing.to_str().unwrap()]);
        assert!(matches!(config.validate(), Err(SnapshotError::PathNotFound(_))));
    }

    #[test]
    fn test_validate_missing_output_dir() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nope").join("snap.txt");
        let config = parse(&[dir.path().to_str().unwrap(), "-o", out.to_str().unwrap()]);
        assert!(matches!(config.validate(), Err(SnapshotError::Config(_))));
    }

    #[test]
    fn test_validate_ok() {
        let dir = tempdir().unwrap();
        let config = parse(&[dir.path().to_str().unwrap(), "--output", "stdout"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.sink().describe(), "stdout");
    }
}
