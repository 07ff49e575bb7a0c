//! Plot command: render the frequency chart.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use gematria_stats_core::Config;
use owo_colors::{OwoColorize, Stream::Stdout};
use serde::Serialize;
use tracing::{debug, instrument};

use super::{load_frequencies, resolve_output};
use crate::render::{ChartOptions, render_frequencies};

/// Arguments for the `plot` subcommand.
#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Corpus file to analyze.
    pub file: Utf8PathBuf,

    /// SVG file to write (default: gematria-frequency.svg).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Chart width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Chart height in pixels.
    #[arg(long)]
    pub height: Option<u32>,
}

#[derive(Serialize)]
struct PlotSummary {
    output: Utf8PathBuf,
    width: u32,
    height: u32,
    total_words: usize,
}

/// Render one line per scheme to an SVG file.
#[instrument(name = "cmd_plot", skip_all, fields(file = %args.file))]
pub fn cmd_plot(args: PlotArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = %args.file, output = ?args.output, "executing plot command");

    let frequencies = load_frequencies(&args.file, config)?;
    let output = resolve_output(args.output, config);
    let options = ChartOptions::with_overrides(
        args.width.or(config.plot_width),
        args.height.or(config.plot_height),
    );

    render_frequencies(&frequencies, &output, options)
        .with_context(|| format!("failed to render {output}"))?;

    if global_json {
        let summary = PlotSummary {
            output,
            width: options.width,
            height: options.height,
            total_words: frequencies.total_words(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} {output}",
            "Chart written to".if_supports_color(Stdout, |t| t.green())
        );
    }

    Ok(())
}
