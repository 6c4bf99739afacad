//! Pairwise construction of the similarity matrix.

use crate::distance::DistanceMetric;
use crate::matrix::SimilarityMatrix;
use log::debug;
use rayon::prelude::*;
use std::collections::HashMap;

/// Builds a [`SimilarityMatrix`] from a vocabulary.
///
/// The builder owns all mutable accumulation; [`MatrixBuilder::build`]
/// seals the result into an immutable matrix before it reaches the
/// clustering stage.
#[derive(Debug, Clone, Copy)]
pub struct MatrixBuilder {
    cutoff: f64,
}

impl MatrixBuilder {
    /// Creates a builder retaining pairs with distance strictly below
    /// `cutoff`.
    pub fn new(cutoff: f64) -> Self {
        Self { cutoff }
    }

    /// Scores every unordered word pair exactly once and seals the
    /// retained entries into a matrix.
    ///
    /// Rows of the pair index shard the work across the rayon pool; each
    /// pair is independent, so assembly order cannot affect the result.
    /// With fewer than two words the matrix holds only self-entries.
    pub fn build<M>(&self, words: Vec<String>, metric: &M) -> SimilarityMatrix
    where
        M: DistanceMetric + Sync,
    {
        let cutoff = self.cutoff;
        let shared = words.as_slice();
        let scored: Vec<(usize, usize, f64)> = (0..shared.len())
            .into_par_iter()
            .flat_map_iter(move |i| {
                (i + 1..shared.len()).filter_map(move |j| {
                    let d = metric.distance(&shared[i], &shared[j]);
                    (d < cutoff).then_some((i, j, d))
                })
            })
            .collect();

        let total_pairs = words.len() * words.len().saturating_sub(1) / 2;
        debug!(
            "retained {} of {} pairs below cutoff {}",
            scored.len(),
            total_pairs,
            cutoff
        );

        let mut entries: HashMap<String, HashMap<String, f64>> =
            words.iter().map(|w| (w.clone(), HashMap::new())).collect();
        for (i, j, d) in scored {
            entries
                .entry(words[i].clone())
                .or_default()
                .insert(words[j].clone(), d);
            entries
                .entry(words[j].clone())
                .or_default()
                .insert(words[i].clone(), d);
        }
        for word in &words {
            entries.entry(word.clone()).or_default().insert(word.clone(), 0.0);
        }

        SimilarityMatrix::new(words, entries)
    }
}
