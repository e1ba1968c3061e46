//! Command implementation for the trip aggregator CLI
//!
//! Runs the aggregation on a blocking task, publishes the reports and prints
//! a run summary.

use crate::cli::args::Args;
use crate::processor::{AggregationDriver, RunStats};
use crate::report::{FileReportSink, PublishSummary, publish_reports};
use anyhow::{Context, Result};
use colored::*;
use tracing::{debug, info};

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("taxi_trip_aggregator={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Main command runner
///
/// 1. Set up logging and validate arguments
/// 2. Fold the input chunk by chunk on a blocking task
/// 3. Publish the three reports
/// 4. Print the run summary
pub async fn run(args: Args) -> Result<RunStats> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = args.to_config()?;
    let output_format = config.output_format;
    let driver = AggregationDriver::new(config)?;

    info!("Aggregating trips from {}", args.input_path.display());
    let input_path = args.input_path.clone();
    let run = tokio::task::spawn_blocking(move || driver.run_path(&input_path))
        .await
        .context("Aggregation task failed")?
        .with_context(|| format!("Failed to aggregate {}", args.input_path.display()))?;

    let mut sink = FileReportSink::new(&args.output_dir, output_format);
    let summary = publish_reports(&mut sink, &run.reports);

    if !args.quiet {
        print_summary(&run.stats, &summary, run.elapsed);
    }

    if !summary.is_success() {
        anyhow::bail!(
            "{} of 3 reports could not be written",
            summary.failures.len()
        );
    }

    info!("Processing complete!");
    Ok(run.stats)
}

fn print_summary(stats: &RunStats, summary: &PublishSummary, elapsed: std::time::Duration) {
    println!("\n{}", "Aggregation Summary".bright_green().bold());
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        elapsed.as_millis().to_string().bright_white()
    );
    println!(
        "  {} {} in {} chunks",
        "Rows read:".bright_cyan(),
        stats.rows_read.to_string().bright_white().bold(),
        stats.chunks_processed
    );
    println!(
        "  {} {} ({:.1}%)",
        "Rows folded:".bright_cyan(),
        stats.rows_normalized.to_string().bright_white(),
        stats.success_rate()
    );
    if stats.rows_failed > 0 {
        println!(
            "  {} {}",
            "Rows skipped:".bright_red(),
            stats.rows_failed.to_string().bright_red().bold()
        );
    }
    for path in &summary.written {
        println!("  {} {}", "Written:".bright_green(), path.display());
    }
    for kind in &summary.skipped {
        println!("  {} {} (no data)", "Skipped:".bright_yellow(), kind);
    }
    for (kind, error) in &summary.failures {
        println!("  {} {}: {}", "Failed:".bright_red(), kind, error);
    }
}
