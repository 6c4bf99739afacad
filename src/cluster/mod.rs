//! Threshold-indexed clustering and medoid analysis.

mod medoid;
mod threshold;

pub use medoid::{ClusterAnalysis, MedoidAnalyzer};
pub use threshold::{ClusterGroup, ThresholdClusterer, ThresholdClusters};

use crate::error::Result;
use crate::matrix::SimilarityMatrix;

/// One line of the threshold-cluster report: a cluster at a threshold,
/// with its medoid analysis attached.
#[derive(Debug, Clone)]
pub struct ClusterRecord {
    /// The threshold this cluster was derived at.
    pub threshold: f64,
    /// Medoid analysis of the cluster.
    pub analysis: ClusterAnalysis,
    /// Within-threshold neighbors of the cluster that do not share its
    /// exact profile, sorted lexicographically.
    pub others: Vec<String>,
}

/// Runs the full threshold sweep over a sealed matrix and analyzes every
/// cluster.
///
/// Thresholds are the distinct positive distances stored in the matrix,
/// visited ascending; clusters within a threshold keep the order produced
/// by [`ThresholdClusterer::clusters_at`].
pub fn analyze_sweep(matrix: &SimilarityMatrix) -> Result<Vec<ClusterRecord>> {
    let clusterer = ThresholdClusterer::new(matrix);
    let analyzer = MedoidAnalyzer::new(matrix);

    let mut records = Vec::new();
    for clusters in clusterer.all_clusters() {
        for group in clusters.groups {
            let analysis = analyzer.analyze(&group.members)?;
            records.push(ClusterRecord {
                threshold: clusters.threshold,
                analysis,
                others: group.others,
            });
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DamerauLevenshtein;
    use crate::matrix::MatrixBuilder;

    #[test]
    fn test_sweep_orders_thresholds_ascending() {
        let words = vec!["cat", "bat", "cats", "zebra"]
            .into_iter()
            .map(String::from)
            .collect();
        let matrix = MatrixBuilder::new(0.4).build(words, &DamerauLevenshtein);

        let records = analyze_sweep(&matrix).unwrap();
        assert!(!records.is_empty());
        for pair in records.windows(2) {
            assert!(pair[0].threshold <= pair[1].threshold);
        }
    }
}
