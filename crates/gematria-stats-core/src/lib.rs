//! Core library for gematria-stats.
//!
//! Computes gematria values for words, tallies how often each value occurs
//! across a corpus, and derives collision statistics from those tallies.
//!
//! # Modules
//!
//! - [`scheme`] - The four encoding schemes and per-letter rules
//! - [`encoder`] - Word to [`GematriaRecord`] encoding
//! - [`frequency`] - Per-scheme frequency tables
//! - [`stats`] - Collision statistics
//! - [`corpus`] - Text to unique-word tokenization
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use gematria_stats_core::{Scheme, aggregate, stats};
//!
//! let frequencies = aggregate(["ad", "be", "go"]).unwrap();
//! let table = frequencies.table(Scheme::Ordinal);
//! assert_eq!(table.sorted_pairs(), vec![(5, 1), (7, 1), (22, 1)]);
//!
//! let pct = stats::collision_percentage(table, frequencies.total_words()).unwrap();
//! assert_eq!(pct, 100.0);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod corpus;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod scheme;
pub mod stats;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use corpus::{Tokenization, unique_words};
pub use encoder::{GematriaRecord, encode};
pub use error::{ConfigError, ConfigResult, GematriaError, GematriaResult};
pub use frequency::{Frequencies, FrequencyTable, aggregate};
pub use scheme::{Scheme, fold9, mirror_rank};
pub use stats::{SchemeStats, StatsReport};

/// Default maximum corpus size accepted by the CLI (64 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 64 * 1024 * 1024;
