//! Run command: statistics, chart, and timing in one pass.

use std::time::Instant;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use gematria_stats_core::{Config, StatsReport};
use serde::Serialize;
use tracing::{debug, info, instrument};

use super::{load_frequencies, load_report, marker, print_report, resolve_output};
use crate::render::{ChartOptions, render_frequencies};

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Corpus file to analyze.
    pub file: Utf8PathBuf,

    /// SVG file to write (default: gematria-frequency.svg).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,
}

#[derive(Serialize)]
struct RunSummary {
    #[serde(flatten)]
    report: StatsReport,
    chart: Utf8PathBuf,
    elapsed_seconds: f64,
}

/// Print collision percentages, render the chart, and report elapsed time.
#[instrument(name = "cmd_run", skip_all, fields(file = %args.file))]
pub fn cmd_run(args: RunArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let started = Instant::now();
    debug!(file = %args.file, output = ?args.output, "executing run command");

    let frequencies = load_frequencies(&args.file, config)?;
    let report = load_report(&args.file, &frequencies)?;

    let output = resolve_output(args.output, config);
    let options = ChartOptions::with_overrides(config.plot_width, config.plot_height);
    render_frequencies(&frequencies, &output, options)
        .with_context(|| format!("failed to render {output}"))?;

    let elapsed = started.elapsed();
    info!(elapsed_ms = elapsed.as_millis(), "run completed");

    if global_json {
        let summary = RunSummary {
            report,
            chart: output,
            elapsed_seconds: elapsed.as_secs_f64(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_report(&report, false);
        println!("{} Chart written to {output}", marker());
        println!(
            "{} Completed in {:.3} seconds",
            marker(),
            elapsed.as_secs_f64()
        );
    }

    Ok(())
}
