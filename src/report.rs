/*!
 * Reporting functionality for dirsnap
 *
 * Renders the counters collected while building a snapshot as a console
 * table using the tabled library.
 */

use std::path::PathBuf;
use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

/// Counters collected while building a snapshot
#[derive(Debug, Clone, Default)]
pub struct SnapshotStats {
    /// Number of file blocks written, readable or not
    pub files_included: usize,
    /// Files whose content was replaced by an empty body
    pub unreadable: Vec<PathBuf>,
    /// Lines that survived normalization
    pub lines_kept: usize,
    /// Blank and comment lines dropped
    pub lines_dropped: usize,
    /// Size of the finished document in bytes
    pub document_bytes: usize,
    /// Time taken to build
    pub duration: Duration,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for snapshot statistics
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string for the given destination and statistics
    pub fn generate_report(&self, destination: &str, stats: &SnapshotStats) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(destination, stats),
        }
    }

    /// Print the report to stderr, keeping stdout free for the document
    pub fn print_report(&self, destination: &str, stats: &SnapshotStats) {
        eprintln!("\n{}", self.generate_report(destination, stats));
    }

    fn create_summary_table(&self, destination: &str, stats: &SnapshotStats) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: &'static str,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "Delivered To",
                value: destination.to_string(),
            },
            SummaryRow {
                key: "Build Time",
                value: format!("{:.4?}", stats.duration),
            },
            SummaryRow {
                key: "Files Included",
                value: self.format_number(stats.files_included),
            },
            SummaryRow {
                key: "Unreadable Files",
                value: self.format_number(stats.unreadable.len()),
            },
            SummaryRow {
                key: "Lines Kept",
                value: self.format_number(stats.lines_kept),
            },
            SummaryRow {
                key: "Lines Stripped",
                value: self.format_number(stats.lines_dropped),
            },
            // Rough chars-per-token ratio for LLM context sizing
            SummaryRow {
                key: "Est. Tokens",
                value: self.format_number(stats.document_bytes / 4),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn create_unreadable_table(&self, stats: &SnapshotStats) -> String {
        #[derive(Tabled)]
        struct UnreadableRow {
            #[tabled(rename = "Unreadable File")]
            path: String,
        }

        let rows: Vec<UnreadableRow> = stats
            .unreadable
            .iter()
            .map(|p| UnreadableRow {
                path: p.display().to_string(),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded()).with(Padding::new(1, 1, 0, 0));

        table.to_string()
    }

    fn generate_console_report(&self, destination: &str, stats: &SnapshotStats) -> String {
        let summary = format!(
            "SNAPSHOT COMPLETE\n{}",
            self.create_summary_table(destination, stats)
        );

        if stats.unreadable.is_empty() {
            summary
        } else {
            format!("{}\n\n{}", self.create_unreadable_table(stats), summary)
        }
    }
}
