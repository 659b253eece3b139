use std::collections::BTreeMap;

use crate::word::Word;

/// Sorted word → occurrence count map.
///
/// Written by the tally worker during ingestion, read-only afterwards.
/// Iteration is always in ascending byte order of the word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: BTreeMap<String, u64>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `word`, returning its new count.
    pub fn tally(&mut self, word: Word) -> u64 {
        let count = self.entries.entry(word.into_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Exact-match lookup.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.entries.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(w, &n)| (w.as_str(), n))
    }
}
