//! Error types for gematria-stats-core.

use thiserror::Error;

use crate::scheme::Scheme;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while encoding words or computing statistics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GematriaError {
    /// A word with no letters was passed to the encoder.
    #[error("cannot encode an empty word")]
    EmptyWord,

    /// A word contained something other than a Latin letter.
    #[error("invalid character {ch:?} in word {word:?}: only letters a-z are supported")]
    InvalidCharacter {
        /// The word as it was passed in.
        word: String,
        /// The first offending character.
        ch: char,
    },

    /// A word's sum under some scheme does not fit in a `u32`.
    #[error("word of {len} letters overflows the {scheme} value")]
    ValueOverflow {
        /// Length of the offending word in letters.
        len: usize,
        /// The scheme whose sum overflowed.
        scheme: Scheme,
    },

    /// Statistics were requested over a corpus with no words.
    #[error("corpus contains no words")]
    EmptyCorpus,
}

/// Result type alias using [`GematriaError`].
pub type GematriaResult<T> = Result<T, GematriaError>;
