//! Frequencies command: the sorted (value, count) pairs behind the chart.

use camino::Utf8PathBuf;
use clap::Args;
use gematria_stats_core::{Config, Scheme};
use owo_colors::{OwoColorize, Stream::Stdout};
use serde::Serialize;
use tracing::{debug, instrument};

use super::load_frequencies;

/// Arguments for the `frequencies` subcommand.
#[derive(Args, Debug)]
pub struct FrequenciesArgs {
    /// Corpus file to analyze.
    pub file: Utf8PathBuf,

    /// Only list this scheme.
    #[arg(long, value_enum)]
    pub scheme: Option<Scheme>,
}

#[derive(Debug, Serialize)]
struct SchemeFrequencies {
    scheme: Scheme,
    distinct_values: usize,
    /// `(value, count)` pairs, ascending by value.
    frequencies: Vec<(u32, usize)>,
}

/// List how many words share each value, per scheme.
#[instrument(name = "cmd_frequencies", skip_all, fields(file = %args.file))]
pub fn cmd_frequencies(
    args: FrequenciesArgs,
    global_json: bool,
    config: &Config,
) -> anyhow::Result<()> {
    debug!(file = %args.file, scheme = ?args.scheme, "executing frequencies command");

    let frequencies = load_frequencies(&args.file, config)?;
    let listing: Vec<SchemeFrequencies> = frequencies
        .iter()
        .filter(|(scheme, _)| args.scheme.is_none_or(|wanted| wanted == *scheme))
        .map(|(scheme, table)| SchemeFrequencies {
            scheme,
            distinct_values: table.distinct_values(),
            frequencies: table.sorted_pairs(),
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for (i, entry) in listing.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} ({} distinct values)",
            entry.scheme.if_supports_color(Stdout, |s| s.bold()),
            entry.distinct_values
        );
        for (value, count) in &entry.frequencies {
            println!("{value}\t{count}");
        }
    }

    Ok(())
}
