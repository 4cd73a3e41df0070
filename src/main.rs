use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use oc_top_csv::{ingest_files, UsageReport};

/// Convert output of oc-adm-top commands to CSV format
#[derive(Parser)]
#[command(name = "oc-top-csv", version, about)]
struct Cli {
    /// Snapshot files holding `oc adm top pods` output, one capture per file
    #[arg(
        short = 'f',
        long = "files",
        value_name = "FILE",
        num_args = 1..,
        required = true
    )]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    info!("ingesting {} snapshot file(s)", cli.files.len());
    let snapshots = ingest_files(&cli.files).context("failed to ingest snapshot files")?;
    for snapshot in &snapshots {
        info!(
            "{}: {} pod observation(s)",
            snapshot.label(),
            snapshot.pod_count()
        );
    }

    // Every artifact is derived before the first file is written, so a bad
    // input never leaves a partial report set behind
    let report = UsageReport::build(&snapshots).context("failed to derive usage reports")?;

    let out_dir = std::env::current_dir()?;
    report
        .write_all(&out_dir)
        .context("failed to write report files")?;
    info!(
        "wrote {} report file(s) to {}",
        report.artifacts().len(),
        out_dir.display()
    );

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();
}
