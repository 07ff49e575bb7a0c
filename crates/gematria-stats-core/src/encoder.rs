//! Word encoding.
//!
//! [`encode`] maps a word to its value under every [`Scheme`] in a single pass
//! over the letters. Letter ranks come from byte arithmetic, so encoding is
//! linear in the word length.

use serde::{Deserialize, Serialize};

use crate::error::{GematriaError, GematriaResult};
use crate::scheme::Scheme;

/// The four gematria values of one word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct GematriaRecord {
    /// The word, lowercased.
    pub word: String,
    /// Sum of forward ranks.
    pub ordinal: u32,
    /// Sum of forward ranks folded into 1..=9.
    pub reduced: u32,
    /// Sum of mirror ranks.
    pub reverse_ordinal: u32,
    /// Sum of mirror ranks folded into 1..=9.
    pub reverse_reduced: u32,
}

impl GematriaRecord {
    /// The record's value under `scheme`.
    pub const fn value(&self, scheme: Scheme) -> u32 {
        match scheme {
            Scheme::Ordinal => self.ordinal,
            Scheme::Reduced => self.reduced,
            Scheme::ReverseOrdinal => self.reverse_ordinal,
            Scheme::ReverseReduced => self.reverse_reduced,
        }
    }

    /// All four values in canonical scheme order.
    pub const fn values(&self) -> [u32; 4] {
        [
            self.ordinal,
            self.reduced,
            self.reverse_ordinal,
            self.reverse_reduced,
        ]
    }
}

/// Forward rank of an ASCII letter, case-insensitive (a=1 .. z=26).
pub const fn forward_rank(letter: u8) -> Option<u32> {
    match letter.to_ascii_lowercase() {
        l @ b'a'..=b'z' => Some((l - b'a') as u32 + 1),
        _ => None,
    }
}

/// Add one letter's value to every scheme's running sum.
///
/// Returns the first scheme whose sum would overflow.
fn add_letter(mut sums: [u32; 4], rank: u32) -> Result<[u32; 4], Scheme> {
    for scheme in Scheme::ALL {
        let sum = &mut sums[scheme.index()];
        *sum = sum
            .checked_add(scheme.letter_value(rank))
            .ok_or(scheme)?;
    }
    Ok(sums)
}

/// Encode a word under all four schemes.
///
/// Uppercase letters are accepted and folded to lowercase. Anything outside
/// `a-z`/`A-Z` is rejected.
///
/// # Errors
///
/// Returns [`GematriaError::EmptyWord`] for `""` and
/// [`GematriaError::InvalidCharacter`] for the first non-letter character.
/// A word long enough to push a sum past `u32::MAX` yields
/// [`GematriaError::ValueOverflow`].
pub fn encode(word: &str) -> GematriaResult<GematriaRecord> {
    if word.is_empty() {
        return Err(GematriaError::EmptyWord);
    }

    let mut sums = [0u32; 4];
    for ch in word.chars() {
        let rank = u8::try_from(ch)
            .ok()
            .and_then(forward_rank)
            .ok_or_else(|| GematriaError::InvalidCharacter {
                word: word.to_string(),
                ch,
            })?;
        sums = add_letter(sums, rank).map_err(|scheme| GematriaError::ValueOverflow {
            len: word.len(),
            scheme,
        })?;
    }

    let [ordinal, reduced, reverse_ordinal, reverse_reduced] = sums;
    Ok(GematriaRecord {
        word: word.to_ascii_lowercase(),
        ordinal,
        reduced,
        reverse_ordinal,
        reverse_reduced,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letters() {
        let a = encode("a").unwrap();
        assert_eq!(a.ordinal, 1);
        assert_eq!(a.reduced, 1);
        assert_eq!(a.reverse_ordinal, 26);
        assert_eq!(a.reverse_reduced, 8);

        let z = encode("z").unwrap();
        assert_eq!(z.ordinal, 26);
        assert_eq!(z.reduced, 8);
        assert_eq!(z.reverse_ordinal, 1);
        assert_eq!(z.reverse_reduced, 1);
    }

    #[test]
    fn two_letter_word() {
        let ad = encode("ad").unwrap();
        assert_eq!(ad.ordinal, 5);
        assert_eq!(ad.reduced, 5);
        // a=26, d=23
        assert_eq!(ad.reverse_ordinal, 49);
        // fold9(26)=8, fold9(23)=5
        assert_eq!(ad.reverse_reduced, 13);
    }

    #[test]
    fn reduced_never_adds_zero() {
        // i=9, r=18 would be 0 under a plain modulo
        let ir = encode("ir").unwrap();
        assert_eq!(ir.ordinal, 27);
        assert_eq!(ir.reduced, 18);
    }

    #[test]
    fn reduced_can_exceed_nine() {
        let word = encode("zzzz").unwrap();
        assert_eq!(word.reduced, 32);
    }

    #[test]
    fn uppercase_is_normalized() {
        let upper = encode("GoD").unwrap();
        let lower = encode("god").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.word, "god");
    }

    #[test]
    fn deterministic() {
        assert_eq!(encode("genesis").unwrap(), encode("genesis").unwrap());
    }

    #[test]
    fn ordinal_and_reverse_ordinal_sum_to_27_per_letter() {
        let word = "abraham";
        let record = encode(word).unwrap();
        assert_eq!(record.ordinal + record.reverse_ordinal, 27 * word.len() as u32);
    }

    #[test]
    fn value_matches_fields() {
        let record = encode("go").unwrap();
        for (scheme, value) in Scheme::ALL.into_iter().zip(record.values()) {
            assert_eq!(record.value(scheme), value);
        }
        assert_eq!(record.value(Scheme::Ordinal), 22);
    }

    #[test]
    fn empty_word_errors() {
        assert_eq!(encode(""), Err(GematriaError::EmptyWord));
    }

    #[test]
    fn non_letter_errors() {
        let err = encode("don't").unwrap_err();
        assert_eq!(
            err,
            GematriaError::InvalidCharacter {
                word: "don't".to_string(),
                ch: '\'',
            }
        );
    }

    #[test]
    fn add_letter_reports_overflowing_scheme() {
        // z: ordinal 26, reduced 8, reverse ordinal 1, reverse reduced 1
        let full = add_letter([u32::MAX - 26, 0, 0, 0], 26).unwrap();
        assert_eq!(full, [u32::MAX, 8, 1, 1]);
        assert_eq!(add_letter(full, 1), Err(Scheme::Ordinal));
        assert_eq!(add_letter([0, 0, u32::MAX, 0], 26), Err(Scheme::ReverseOrdinal));
    }

    #[test]
    fn very_long_word_overflows_instead_of_wrapping() {
        // 26 * 165_191_050 > u32::MAX
        let word = "z".repeat(165_191_050);
        assert_eq!(
            encode(&word),
            Err(GematriaError::ValueOverflow {
                len: word.len(),
                scheme: Scheme::Ordinal,
            })
        );
    }

    #[test]
    fn non_ascii_letter_errors() {
        assert!(matches!(
            encode("café"),
            Err(GematriaError::InvalidCharacter { ch: 'é', .. })
        ));
    }

    #[test]
    fn forward_rank_bounds() {
        assert_eq!(forward_rank(b'a'), Some(1));
        assert_eq!(forward_rank(b'Z'), Some(26));
        assert_eq!(forward_rank(b'1'), None);
        assert_eq!(forward_rank(b'{'), None);
    }
}
