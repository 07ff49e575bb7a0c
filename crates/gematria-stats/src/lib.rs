//! Library interface for the `gematria-stats` CLI.
//!
//! This crate exposes the CLI's argument parser, command structure, and chart
//! renderer as a library, primarily for documentation generation and testing.
//! The actual entry point is in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//! - [`render`] - Frequency chart rendering
//!
//! # Documentation Generation
//!
//! The [`command()`] function returns the clap `Command` for generating man pages
//! and shell completions.

pub mod commands;
pub mod render;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                      Log filter (e.g., debug, gematria_stats=trace)
    GEMATRIA_STATS_LOG_PATH       Explicit JSONL log file path
    GEMATRIA_STATS_LOG_DIR        JSONL log directory
    GEMATRIA_STATS_TOKENIZATION   Tokenization mode (strip-punctuation, strict)
";

/// Command-line interface definition for gematria-stats.
#[derive(Parser)]
#[command(name = "gematria-stats")]
#[command(
    about = "Gematria value frequencies and collision statistics for text corpora",
    long_about = None
)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Print collision statistics and render the frequency chart
    Run(commands::run::RunArgs),

    /// Print collision statistics for a corpus
    Stats(commands::stats::StatsArgs),

    /// List how many words share each gematria value
    Frequencies(commands::frequencies::FrequenciesArgs),

    /// Show the gematria values of individual words
    Encode(commands::encode::EncodeArgs),

    /// Render the frequency chart to an SVG file
    Plot(commands::plot::PlotArgs),

    /// Show package information
    Info(commands::info::InfoArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}
