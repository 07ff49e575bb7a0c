//! The four gematria encoding schemes.
//!
//! Each scheme is a per-letter rule over the letter's alphabet rank; a word's
//! value under the scheme is the sum of its letters' values.

use serde::{Deserialize, Serialize};

/// Number of letters in the supported alphabet.
pub const ALPHABET_LEN: u32 = 26;

/// A gematria encoding scheme.
///
/// [`Scheme::ALL`] lists the variants in canonical report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Scheme {
    /// Sum of forward ranks (a=1 .. z=26).
    #[serde(alias = "eow")]
    #[cfg_attr(feature = "clap", value(name = "ordinal", alias = "eow"))]
    Ordinal,
    /// Sum of forward ranks folded into 1..=9.
    #[serde(alias = "frw")]
    #[cfg_attr(feature = "clap", value(name = "reduced", alias = "frw"))]
    Reduced,
    /// Sum of mirror ranks (a=26 .. z=1).
    #[serde(alias = "row")]
    #[cfg_attr(feature = "clap", value(name = "reverse_ordinal", alias = "row"))]
    ReverseOrdinal,
    /// Sum of mirror ranks folded into 1..=9.
    #[serde(alias = "rrw")]
    #[cfg_attr(feature = "clap", value(name = "reverse_reduced", alias = "rrw"))]
    ReverseReduced,
}

impl Scheme {
    /// All schemes, in canonical order.
    pub const ALL: [Self; 4] = [
        Self::Ordinal,
        Self::Reduced,
        Self::ReverseOrdinal,
        Self::ReverseReduced,
    ];

    /// Returns the scheme's canonical name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ordinal => "ordinal",
            Self::Reduced => "reduced",
            Self::ReverseOrdinal => "reverse_ordinal",
            Self::ReverseReduced => "reverse_reduced",
        }
    }

    /// Position of the scheme in [`Scheme::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Value contributed by a single letter of forward rank `rank` (1..=26).
    pub const fn letter_value(self, rank: u32) -> u32 {
        match self {
            Self::Ordinal => rank,
            Self::Reduced => fold9(rank),
            Self::ReverseOrdinal => mirror_rank(rank),
            Self::ReverseReduced => fold9(mirror_rank(rank)),
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fold a value into `1..=9` via modulo 9, mapping 0 to 9.
pub const fn fold9(value: u32) -> u32 {
    match value % 9 {
        0 => 9,
        r => r,
    }
}

/// Mirror a forward rank: a (1) becomes 26, z (26) becomes 1.
pub const fn mirror_rank(rank: u32) -> u32 {
    ALPHABET_LEN + 1 - rank
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold9_stays_in_range() {
        for x in 0..=500 {
            let folded = fold9(x);
            assert!((1..=9).contains(&folded), "fold9({x}) = {folded}");
        }
    }

    #[test]
    fn fold9_known_values() {
        assert_eq!(fold9(1), 1);
        assert_eq!(fold9(9), 9);
        assert_eq!(fold9(10), 1);
        assert_eq!(fold9(18), 9);
        assert_eq!(fold9(26), 8);
    }

    #[test]
    fn mirror_rank_reverses_alphabet() {
        assert_eq!(mirror_rank(1), 26);
        assert_eq!(mirror_rank(26), 1);
        assert_eq!(mirror_rank(13), 14);
    }

    #[test]
    fn canonical_order_matches_index() {
        for (i, scheme) in Scheme::ALL.iter().enumerate() {
            assert_eq!(scheme.index(), i);
        }
    }

    #[test]
    fn letter_values_for_r() {
        // r = 18, mirror 9
        assert_eq!(Scheme::Ordinal.letter_value(18), 18);
        assert_eq!(Scheme::Reduced.letter_value(18), 9);
        assert_eq!(Scheme::ReverseOrdinal.letter_value(18), 9);
        assert_eq!(Scheme::ReverseReduced.letter_value(18), 9);
    }

    #[test]
    fn serde_accepts_short_codes() {
        let scheme: Scheme = serde_json::from_str(r#""rrw""#).unwrap();
        assert_eq!(scheme, Scheme::ReverseReduced);
        assert_eq!(
            serde_json::to_string(&Scheme::ReverseOrdinal).unwrap(),
            r#""reverse_ordinal""#
        );
    }
}
