//! Medoid analysis of a single cluster.

use crate::error::{LexsimError, Result};
use crate::matrix::SimilarityMatrix;

/// Result of medoid analysis for one cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterAnalysis {
    /// Members ordered ascending by average intra-cluster distance;
    /// equal averages order lexicographically.
    pub ordered_members: Vec<String>,
    /// Members achieving the minimum average, sorted lexicographically.
    /// Ties are kept, never broken to a single representative.
    pub medoids: Vec<String>,
    /// Arithmetic mean of the per-member averages.
    pub avg_intra_distance: f64,
}

/// Computes per-member average intra-cluster distances and medoid sets.
///
/// Every pairwise lookup goes through the sealed matrix. Cluster members
/// share a profile that contains every other member within the clustering
/// threshold, so lookups succeed by construction; a miss is surfaced as
/// [`LexsimError::MissingDistance`] rather than defaulted.
pub struct MedoidAnalyzer<'a> {
    matrix: &'a SimilarityMatrix,
}

impl<'a> MedoidAnalyzer<'a> {
    /// Creates an analyzer over a sealed matrix.
    pub fn new(matrix: &'a SimilarityMatrix) -> Self {
        Self { matrix }
    }

    /// Analyzes one cluster.
    ///
    /// The average for each member includes its own self-distance of 0.
    /// A singleton cluster has average 0 and its sole member as sole
    /// medoid.
    pub fn analyze(&self, cluster: &[String]) -> Result<ClusterAnalysis> {
        if cluster.is_empty() {
            return Err(LexsimError::EmptyInput("cluster".to_string()));
        }

        let mut averages: Vec<(String, f64)> = Vec::with_capacity(cluster.len());
        for first in cluster {
            let mut total = 0.0;
            for second in cluster {
                total += self.matrix.distance(first, second).ok_or_else(|| {
                    LexsimError::MissingDistance {
                        first: first.clone(),
                        second: second.clone(),
                    }
                })?;
            }
            averages.push((first.clone(), total / cluster.len() as f64));
        }

        averages.sort_unstable_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

        let best = averages[0].1;
        let mut medoids: Vec<String> = averages
            .iter()
            .take_while(|(_, avg)| *avg == best)
            .map(|(word, _)| word.clone())
            .collect();
        medoids.sort_unstable();

        let avg_intra_distance =
            averages.iter().map(|(_, avg)| avg).sum::<f64>() / averages.len() as f64;

        Ok(ClusterAnalysis {
            ordered_members: averages.into_iter().map(|(word, _)| word).collect(),
            medoids,
            avg_intra_distance,
        })
    }
}
