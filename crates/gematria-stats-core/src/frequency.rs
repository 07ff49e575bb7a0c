//! Frequency tables: how many words share each gematria value.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::encoder::{GematriaRecord, encode};
use crate::error::GematriaResult;
use crate::scheme::Scheme;

/// Value -> number of words producing that value, for one scheme.
///
/// Iteration is in ascending value order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: BTreeMap<u32, usize>,
}

impl FrequencyTable {
    fn record(&mut self, value: u32) {
        *self.counts.entry(value).or_insert(0) += 1;
    }

    /// Number of words that produced `value`.
    pub fn count(&self, value: u32) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Number of distinct values in the table.
    pub fn distinct_values(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts, i.e. the number of words tallied.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Whether no values have been tallied.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(value, count)` pairs in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.counts.iter().map(|(&value, &count)| (value, count))
    }

    /// Collect [`Self::iter`] into a vector, ready for plotting.
    pub fn sorted_pairs(&self) -> Vec<(u32, usize)> {
        self.iter().collect()
    }

    /// Largest value in the table.
    pub fn max_value(&self) -> Option<u32> {
        self.counts.last_key_value().map(|(&value, _)| value)
    }

    /// Largest count in the table.
    pub fn max_count(&self) -> Option<usize> {
        self.counts.values().copied().max()
    }
}

impl FromIterator<u32> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut table = Self::default();
        for value in iter {
            table.record(value);
        }
        table
    }
}

/// Frequency tables for every scheme over one corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frequencies {
    total_words: usize,
    tables: [FrequencyTable; 4],
}

impl Frequencies {
    fn push(&mut self, record: &GematriaRecord) {
        for (table, value) in self.tables.iter_mut().zip(record.values()) {
            table.record(value);
        }
        self.total_words += 1;
    }

    /// Number of words tallied.
    pub const fn total_words(&self) -> usize {
        self.total_words
    }

    /// The table for `scheme`.
    pub const fn table(&self, scheme: Scheme) -> &FrequencyTable {
        &self.tables[scheme.index()]
    }

    /// `(scheme, table)` pairs in canonical scheme order.
    pub fn iter(&self) -> impl Iterator<Item = (Scheme, &FrequencyTable)> {
        Scheme::ALL.into_iter().zip(self.tables.iter())
    }
}

/// Tally the gematria values of every word under every scheme.
///
/// Each input word is encoded exactly once and counted once per scheme, so
/// callers pass a deduplicated set to get per-unique-word tables.
///
/// # Errors
///
/// Returns the encoder's error for the first malformed word; no tables are
/// produced in that case.
#[tracing::instrument(skip_all)]
pub fn aggregate<I, S>(words: I) -> GematriaResult<Frequencies>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut frequencies = Frequencies::default();
    for word in words {
        let record = encode(word.as_ref())?;
        frequencies.push(&record);
    }
    tracing::debug!(
        total_words = frequencies.total_words,
        distinct_ordinal = frequencies.table(Scheme::Ordinal).distinct_values(),
        "aggregated gematria frequencies"
    );
    Ok(frequencies)
}
