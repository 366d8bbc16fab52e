/*!
 * Command-line interface for dirsnap
 */

use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use dirsnap::config::{Args, Config};
use dirsnap::report::{ReportFormat, Reporter};
use dirsnap::snapshot::SnapshotBuilder;
use dirsnap::SnapshotError;

/// Log to stderr; RUST_LOG wins over -v flags
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let config = Config::from_args(args);
    init_logging(config.verbosity);
    config.validate()?;

    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim} {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    progress.set_prefix("Snapshot");
    progress.enable_steady_tick(Duration::from_millis(100));

    let builder = SnapshotBuilder::new(&config.target_dir, config.exclusions.clone())
        .with_progress(Arc::new(progress.clone()));
    info!(
        root = %builder.root().display(),
        exclusions = ?config.exclusions.patterns(),
        "building snapshot"
    );
    let snapshot = builder.build();
    progress.finish_and_clear();

    let sink = config.sink();
    if let Err(e) = sink.deliver(&snapshot.document) {
        error!(sink = %sink.describe(), error = %e, "delivery failed");
        return Err(SnapshotError::from(e).into());
    }

    if config.report {
        Reporter::new(ReportFormat::ConsoleTable).print_report(&sink.describe(), &snapshot.stats);
    }

    Ok(())
}
