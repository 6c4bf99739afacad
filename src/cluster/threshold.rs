//! Exact-profile clustering per distance threshold.

use crate::matrix::SimilarityMatrix;
use log::debug;
use std::collections::{BTreeSet, HashMap};

/// One exact-profile group at a threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterGroup {
    /// Words sharing an identical neighborhood profile, sorted
    /// lexicographically.
    pub members: Vec<String>,
    /// Profile words outside the group, sorted lexicographically.
    pub others: Vec<String>,
}

/// Partition of the vocabulary at one threshold.
#[derive(Debug, Clone)]
pub struct ThresholdClusters {
    /// The threshold the partition was derived at.
    pub threshold: f64,
    /// Groups in descending size order; equal sizes break ties by the
    /// lexicographically smallest member.
    pub groups: Vec<ClusterGroup>,
}

/// Groups words by identical closed neighborhoods at distance thresholds.
///
/// Profiles are read from entries already stored in the matrix; no new
/// distances are computed. Grouping is a hash-partition keyed by the
/// canonical (sorted) profile, not a graph traversal, so two words land
/// in the same group exactly when their profiles are identical sets.
pub struct ThresholdClusterer<'a> {
    matrix: &'a SimilarityMatrix,
}

impl<'a> ThresholdClusterer<'a> {
    /// Creates a clusterer over a sealed matrix.
    pub fn new(matrix: &'a SimilarityMatrix) -> Self {
        Self { matrix }
    }

    /// Partitions the vocabulary at a single positive threshold.
    ///
    /// Every word belongs to exactly one group (its own profile, even if
    /// singleton). Others are the profile words that did not share the
    /// profile themselves.
    pub fn clusters_at(&self, threshold: f64) -> Vec<ClusterGroup> {
        let mut by_profile: HashMap<BTreeSet<&str>, Vec<&str>> = HashMap::new();
        for word in self.matrix.words() {
            let profile: BTreeSet<&str> = self
                .matrix
                .neighbors(word)
                .map(|neighbors| {
                    neighbors
                        .iter()
                        .filter(|(_, d)| **d <= threshold)
                        .map(|(w, _)| w.as_str())
                        .collect()
                })
                .unwrap_or_default();
            by_profile.entry(profile).or_default().push(word);
        }

        let mut groups: Vec<ClusterGroup> = by_profile
            .into_iter()
            .map(|(profile, members)| {
                let member_set: BTreeSet<&str> = members.iter().copied().collect();
                let others: Vec<String> = profile
                    .difference(&member_set)
                    .map(|w| w.to_string())
                    .collect();
                let mut members: Vec<String> =
                    members.into_iter().map(String::from).collect();
                members.sort_unstable();
                ClusterGroup { members, others }
            })
            .collect();

        // descending size; equal sizes by smallest member so the order is
        // reproducible across runs
        groups.sort_unstable_by(|a, b| {
            b.members
                .len()
                .cmp(&a.members.len())
                .then_with(|| a.members[0].cmp(&b.members[0]))
        });
        groups
    }

    /// Runs [`Self::clusters_at`] for every distinct positive distance
    /// stored in the matrix, ascending.
    pub fn all_clusters(&self) -> Vec<ThresholdClusters> {
        let thresholds = self.matrix.thresholds();
        debug!("sweeping {} distinct thresholds", thresholds.len());
        thresholds
            .into_iter()
            .map(|threshold| ThresholdClusters {
                threshold,
                groups: self.clusters_at(threshold),
            })
            .collect()
    }
}
