//! Encode command: gematria values of individual words.

use anyhow::Context;
use clap::Args;
use gematria_stats_core::{GematriaRecord, Scheme, encode};
use owo_colors::{OwoColorize, Stream::Stdout};
use tracing::{debug, instrument};

/// Arguments for the `encode` subcommand.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Words to encode (letters a-z, any case).
    #[arg(required = true)]
    pub words: Vec<String>,
}

/// Print all four gematria values for each word.
///
/// Fails on the first word that is not purely alphabetic.
#[instrument(name = "cmd_encode", skip_all, fields(count = args.words.len()))]
pub fn cmd_encode(args: EncodeArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(words = ?args.words, "executing encode command");

    let records = args
        .words
        .iter()
        .map(|word| encode(word).with_context(|| format!("failed to encode {word:?}")))
        .collect::<anyhow::Result<Vec<GematriaRecord>>>()?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let width = records
        .iter()
        .map(|r| r.word.len())
        .max()
        .unwrap_or(0)
        .max("word".len());

    let header: Vec<String> = Scheme::ALL
        .iter()
        .map(|scheme| format!("{:>16}", scheme.as_str()))
        .collect();
    println!(
        "{}",
        format!("{:<width$}{}", "word", header.concat())
            .if_supports_color(Stdout, |h| h.bold())
    );
    for record in &records {
        let values: String = record
            .values()
            .iter()
            .map(|value| format!("{value:>16}"))
            .collect();
        println!("{:<width$}{values}", record.word);
    }

    Ok(())
}
