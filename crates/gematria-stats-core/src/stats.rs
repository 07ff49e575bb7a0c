//! Collision statistics over frequency tables.
//!
//! Two figures are reported per scheme:
//!
//! - **collision percentage**: `distinct values / total words * 100`. Despite
//!   the name this is an inverse measure: 100 means every word has its own
//!   value, lower means more sharing.
//! - **pairwise collision percentage**: the chance that two different words
//!   drawn at random share a value, `sum c(c-1) / n(n-1) * 100`.
//!
//! Both are rounded half-to-even at [`DECIMAL_PLACES`].

use serde::Serialize;

use crate::error::{GematriaError, GematriaResult};
use crate::frequency::{Frequencies, FrequencyTable};
use crate::scheme::Scheme;

/// Decimal places kept in reported percentages.
pub const DECIMAL_PLACES: i32 = 4;

/// Statistics for one scheme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemeStats {
    /// The scheme these figures describe.
    pub scheme: Scheme,
    /// Number of distinct values produced.
    pub distinct_values: usize,
    /// Distinct values as a percentage of total words.
    pub collision_percentage: f64,
    /// Chance, in percent, that two random words share a value.
    pub pairwise_collision_percentage: f64,
}

/// Statistics for every scheme over one corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    /// Number of unique words in the corpus.
    pub total_words: usize,
    /// Per-scheme figures in canonical order.
    pub schemes: Vec<SchemeStats>,
}

/// Round `value` half-to-even at `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

/// Distinct values in `table` as a percentage of `total_words`.
///
/// # Errors
///
/// Returns [`GematriaError::EmptyCorpus`] when `total_words` is zero.
pub fn collision_percentage(table: &FrequencyTable, total_words: usize) -> GematriaResult<f64> {
    if total_words == 0 {
        return Err(GematriaError::EmptyCorpus);
    }
    let ratio = table.distinct_values() as f64 / total_words as f64;
    Ok(round_to(ratio * 100.0, DECIMAL_PLACES))
}

/// Chance, in percent, that two distinct words drawn at random from the
/// table share a value.
///
/// A table holding a single word has no pairs and yields `0.0`.
///
/// # Errors
///
/// Returns [`GematriaError::EmptyCorpus`] when the table is empty.
pub fn pairwise_collision_percentage(table: &FrequencyTable) -> GematriaResult<f64> {
    let total = table.total() as u128;
    match total {
        0 => Err(GematriaError::EmptyCorpus),
        1 => Ok(0.0),
        n => {
            let shared_pairs: u128 = table
                .iter()
                .map(|(_, count)| {
                    let c = count as u128;
                    c * (c - 1)
                })
                .sum();
            let ratio = shared_pairs as f64 / (n * (n - 1)) as f64;
            Ok(round_to(ratio * 100.0, DECIMAL_PLACES))
        }
    }
}

/// Compute [`SchemeStats`] for every scheme.
///
/// # Errors
///
/// Returns [`GematriaError::EmptyCorpus`] when no words were tallied.
#[tracing::instrument(skip_all, fields(total_words = frequencies.total_words()))]
pub fn report(frequencies: &Frequencies) -> GematriaResult<StatsReport> {
    let total_words = frequencies.total_words();
    let schemes = frequencies
        .iter()
        .map(|(scheme, table)| {
            Ok(SchemeStats {
                scheme,
                distinct_values: table.distinct_values(),
                collision_percentage: collision_percentage(table, total_words)?,
                pairwise_collision_percentage: pairwise_collision_percentage(table)?,
            })
        })
        .collect::<GematriaResult<Vec<_>>>()?;

    Ok(StatsReport {
        total_words,
        schemes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::aggregate;

    #[test]
    fn all_distinct_is_one_hundred_percent() {
        let freqs = aggregate(["ad", "be", "go"]).unwrap();
        let pct = collision_percentage(freqs.table(Scheme::Ordinal), 3).unwrap();
        assert!((pct - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn shared_value_lowers_percentage() {
        // "ad" and "da" share ordinal 5
        let freqs = aggregate(["ad", "da", "cc"]).unwrap();
        let pct = collision_percentage(freqs.table(Scheme::Ordinal), 3).unwrap();
        assert!((pct - 66.6667).abs() < 1e-9);
    }

    #[test]
    fn zero_total_is_an_error() {
        let table = FrequencyTable::default();
        assert_eq!(
            collision_percentage(&table, 0),
            Err(GematriaError::EmptyCorpus)
        );
    }

    #[test]
    fn monotonic_in_distinct_values() {
        let total = 7;
        let mut previous = 0.0;
        for distinct in 1..=total {
            let table: FrequencyTable = (0..total).map(|i| (i % distinct) as u32).collect();
            let pct = collision_percentage(&table, total).unwrap();
            assert!(pct >= previous, "{pct} < {previous} at {distinct}");
            previous = pct;
        }
    }

    #[test]
    fn rounding_is_half_to_even() {
        assert!((round_to(0.125, 2) - 0.12).abs() < 1e-12);
        assert!((round_to(0.375, 2) - 0.38).abs() < 1e-12);
        assert!((round_to(2.5, 0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn pairwise_probability() {
        // two of three words share a value: 1 shared pair out of 3 pairs
        let table: FrequencyTable = [5, 5, 6].into_iter().collect();
        let pct = pairwise_collision_percentage(&table).unwrap();
        assert!((pct - 33.3333).abs() < 1e-9);

        let distinct: FrequencyTable = [1, 2, 3].into_iter().collect();
        assert_eq!(pairwise_collision_percentage(&distinct), Ok(0.0));

        let same: FrequencyTable = [4, 4].into_iter().collect();
        assert_eq!(pairwise_collision_percentage(&same), Ok(100.0));
    }

    #[test]
    fn pairwise_single_word_and_empty() {
        let one: FrequencyTable = [9].into_iter().collect();
        assert_eq!(pairwise_collision_percentage(&one), Ok(0.0));
        assert_eq!(
            pairwise_collision_percentage(&FrequencyTable::default()),
            Err(GematriaError::EmptyCorpus)
        );
    }

    #[test]
    fn report_covers_every_scheme_in_order() {
        let freqs = aggregate(["ad", "be", "go"]).unwrap();
        let report = report(&freqs).unwrap();
        assert_eq!(report.total_words, 3);
        let schemes: Vec<Scheme> = report.schemes.iter().map(|s| s.scheme).collect();
        assert_eq!(schemes, Scheme::ALL);
        assert_eq!(report.schemes[0].distinct_values, 3);
    }

    #[test]
    fn report_on_empty_corpus_errors() {
        let freqs = aggregate(Vec::<&str>::new()).unwrap();
        assert_eq!(report(&freqs), Err(GematriaError::EmptyCorpus));
    }

    #[test]
    fn report_serializes_scheme_names() {
        let freqs = aggregate(["ad"]).unwrap();
        let json = serde_json::to_value(report(&freqs).unwrap()).unwrap();
        assert_eq!(json["schemes"][2]["scheme"], "reverse_ordinal");
        assert_eq!(json["schemes"][0]["collision_percentage"], 100.0);
    }
}
