//! Corpus tokenization.
//!
//! Turns raw text into the sorted set of unique lowercase words that the
//! encoder accepts. Tokens that still contain anything but ASCII letters after
//! tokenization are dropped, never passed on.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// How whitespace-separated tokens are turned into words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Tokenization {
    /// Trim leading and trailing ASCII punctuation, so `"god,"` counts as `god`.
    #[default]
    StripPunctuation,
    /// Keep only tokens that are letters from end to end.
    Strict,
}

impl Tokenization {
    /// Returns the mode's configuration name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StripPunctuation => "strip-punctuation",
            Self::Strict => "strict",
        }
    }
}

impl std::fmt::Display for Tokenization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract the unique lowercase words of `text`.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn unique_words(text: &str, tokenization: Tokenization) -> BTreeSet<String> {
    let words: BTreeSet<String> = text
        .split_whitespace()
        .map(|token| match tokenization {
            Tokenization::StripPunctuation => {
                token.trim_matches(|c: char| c.is_ascii_punctuation())
            }
            Tokenization::Strict => token,
        })
        .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()))
        .map(str::to_ascii_lowercase)
        .collect();
    tracing::debug!(unique_words = words.len(), "tokenized corpus");
    words
}
