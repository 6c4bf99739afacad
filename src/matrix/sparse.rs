//! Immutable sparse lookup over retained word pairs.

use std::collections::HashMap;

/// Sparse symmetric similarity matrix.
///
/// Maps each word to its neighbor map (neighbor word to normalized
/// distance). Every stored pair is mirrored, every word carries a
/// self-entry of 0.0, and only pairs strictly below the build cutoff are
/// present. A word absent from another word's neighbor map is simply not
/// a neighbor; its true distance was at or above the cutoff and is never
/// materialized.
///
/// Built once by [`super::MatrixBuilder`] and immutable afterward.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    /// Vocabulary in first-appearance order.
    words: Vec<String>,
    /// word -> (neighbor -> distance).
    entries: HashMap<String, HashMap<String, f64>>,
}

impl SimilarityMatrix {
    pub(crate) fn new(words: Vec<String>, entries: HashMap<String, HashMap<String, f64>>) -> Self {
        Self { words, entries }
    }

    /// The vocabulary, in first-appearance order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the vocabulary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The neighbor map of a word, if the word is in the vocabulary.
    pub fn neighbors(&self, word: &str) -> Option<&HashMap<String, f64>> {
        self.entries.get(word)
    }

    /// The stored distance between two words, if they are neighbors.
    pub fn distance(&self, a: &str, b: &str) -> Option<f64> {
        self.entries.get(a).and_then(|m| m.get(b)).copied()
    }

    /// Total number of stored directed entries, self-entries included.
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// The distinct positive distances stored anywhere in the matrix,
    /// ascending.
    ///
    /// These are exactly the thresholds the clustering sweep visits; no
    /// synthetic values are added.
    pub fn thresholds(&self) -> Vec<f64> {
        let mut values: Vec<f64> = self
            .entries
            .values()
            .flat_map(|m| m.values().copied())
            .filter(|d| *d > 0.0)
            .collect();
        values.sort_unstable_by(f64::total_cmp);
        values.dedup();
        values
    }
}
