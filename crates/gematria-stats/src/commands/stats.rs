//! Stats command: collision percentages per scheme.

use camino::Utf8PathBuf;
use clap::Args;
use gematria_stats_core::Config;
use tracing::{debug, instrument};

use super::{load_frequencies, load_report, print_report};

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Corpus file to analyze.
    pub file: Utf8PathBuf,

    /// Also print the pairwise collision probability.
    #[arg(long)]
    pub pairwise: bool,
}

/// Print collision statistics for a corpus.
#[instrument(name = "cmd_stats", skip_all, fields(file = %args.file))]
pub fn cmd_stats(args: StatsArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = %args.file, pairwise = args.pairwise, "executing stats command");

    let frequencies = load_frequencies(&args.file, config)?;
    let report = load_report(&args.file, &frequencies)?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.pairwise);
    }

    Ok(())
}
