//! Command implementations.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use gematria_stats_core::{Config, Frequencies, StatsReport, aggregate, unique_words};
use owo_colors::{OwoColorize, Stream::Stdout};

use crate::render::DEFAULT_OUTPUT;

pub mod encode;
pub mod frequencies;
pub mod info;
pub mod plot;
pub mod run;
pub mod stats;

/// Read a file and validate its size against the configured limit.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    // Invalid UTF-8 becomes U+FFFD, which the tokenizer drops with the token.
    let bytes =
        std::fs::read(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read a corpus and tally the gematria values of its unique words.
pub fn load_frequencies(path: &Utf8Path, config: &Config) -> anyhow::Result<Frequencies> {
    let content = read_input_file(path, config.input_limit())?;
    let words = unique_words(&content, config.tokenization);
    tracing::debug!(file = %path, unique_words = words.len(), "corpus loaded");
    aggregate(&words).with_context(|| format!("failed to encode words from {path}"))
}

/// Compute the statistics report, naming the corpus on failure.
pub fn load_report(path: &Utf8Path, frequencies: &Frequencies) -> anyhow::Result<StatsReport> {
    gematria_stats_core::stats::report(frequencies)
        .with_context(|| format!("failed to compute statistics for {path}"))
}

/// Chart path: CLI flag, then config, then [`DEFAULT_OUTPUT`].
pub fn resolve_output(cli: Option<Utf8PathBuf>, config: &Config) -> Utf8PathBuf {
    cli.or_else(|| config.plot_output.clone())
        .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT))
}

/// Print collision percentages in canonical scheme order.
pub fn print_report(report: &StatsReport, pairwise: bool) {
    println!(
        "{} Percent chance any two words have the same gematria value:",
        marker()
    );
    for scheme in &report.schemes {
        println!("{}: {:.4}%", scheme.scheme, scheme.collision_percentage);
    }
    if pairwise {
        println!(
            "{} Pairwise collision probability across {} unique words:",
            marker(),
            report.total_words
        );
        for scheme in &report.schemes {
            println!(
                "{}: {:.4}%",
                scheme.scheme, scheme.pairwise_collision_percentage
            );
        }
    }
}

/// The `[///]` prefix used on status lines.
pub fn marker() -> String {
    "[///]"
        .if_supports_color(Stdout, |text| text.cyan())
        .to_string()
}
