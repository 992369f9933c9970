use std::collections::HashMap;
use serde::Serialize;

/// Token → count mapping that remembers the order keys were first seen.
///
/// Counts are order-independent; the first-seen order only exists so that
/// ranking has a stable tie-break.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    slots: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `n` occurrences of `word`, inserting it with count 0 first if unseen.
    pub fn add(&mut self, word: &str, n: u64) {
        match self.slots.get(word) {
            Some(&i) => self.entries[i].1 += n,
            None => {
                self.slots.insert(word.to_owned(), self.entries.len());
                self.entries.push((word.to_owned(), n));
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.slots.get(word).map(|&i| self.entries[i].1)
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
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// Folds `other` into `self` by summing per-word counts.
    ///
    /// Counts are associative and commutative under merge. Words new to
    /// `self` are appended in `other`'s first-seen order.
    pub fn merge(&mut self, other: &FrequencyMap) {
        for (word, count) in other.iter() {
            self.add(word, count);
        }
    }

    /// Plain map view, dropping first-seen order.
    pub fn to_hash_map(&self) -> HashMap<String, u64> {
        self.entries.iter().cloned().collect()
    }
}

/// One row of a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedWord {
    pub word: String,
    pub count: u64,
}

impl RankedWord {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self { word: word.into(), count }
    }
}

impl From<(&str, u64)> for RankedWord {
    fn from((word, count): (&str, u64)) -> Self {
        Self::new(word, count)
    }
}
