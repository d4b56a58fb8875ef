use std::collections::{BTreeMap, BTreeSet};

use ndarray::Array2;

use crate::clustering::domain::cluster_config::ClusterConfig;
use crate::clustering::domain::distance_matrix::DistanceMatrix;
use crate::shared::grouping_error::GroupingError;

/// Arena index of a cluster. Singletons occupy `0..N`, every merge
/// allocates the next free index.
pub type ClusterId = usize;

/// One step of the merge history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Merge {
    pub left: ClusterId,
    pub right: ClusterId,
    pub merged: ClusterId,
    pub distance: f64,
    pub size: usize,
}

/// Flat labels at the threshold cut plus the merges that produced them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClusterAssignment {
    /// `labels[i]` is the cluster label of detection index `i`.
    pub labels: Vec<usize>,
    pub merges: Vec<Merge>,
}

impl ClusterAssignment {
    pub fn num_clusters(&self) -> usize {
        self.labels.len() - self.merges.len()
    }
}

/// Bottom-up hierarchical clustering cut at a fixed distance threshold.
///
/// Inter-cluster distances are always recomputed from the original
/// pairwise distances of the members, never from previously merged values.
/// Among equally close pairs the one with the smallest `(lower, higher)`
/// cluster ids is merged first.
pub struct AgglomerativeClusterer {
    config: ClusterConfig,
}

impl AgglomerativeClusterer {
    pub fn new(config: ClusterConfig) -> Result<Self, GroupingError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    pub fn cluster(&self, similarity: &Array2<f64>) -> Result<ClusterAssignment, GroupingError> {
        let distances = DistanceMatrix::from_similarity(similarity)?;
        Ok(self.cluster_distances(&distances))
    }

    pub fn cluster_distances(&self, distances: &DistanceMatrix) -> ClusterAssignment {
        let n = distances.len();
        let mut arena: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
        let mut active: BTreeSet<ClusterId> = (0..n).collect();
        let mut pairs: BTreeMap<(ClusterId, ClusterId), f64> = BTreeMap::new();

        for i in 0..n {
            for j in (i + 1)..n {
                pairs.insert((i, j), distances.get(i, j));
            }
        }

        let mut merges = Vec::new();
        while let Some((left, right, distance)) = closest_pair(&pairs) {
            if distance > self.config.threshold {
                log::debug!(
                    "Closest clusters ({left}, {right}) at {distance:.4} exceed threshold {}",
                    self.config.threshold
                );
                break;
            }

            let merged = arena.len();
            let mut members = std::mem::take(&mut arena[left]);
            members.append(&mut arena[right]);
            members.sort_unstable();

            active.remove(&left);
            active.remove(&right);
            pairs.remove(&(left, right));
            for &other in &active {
                pairs.remove(&ordered(other, left));
                pairs.remove(&ordered(other, right));
                let linked = self
                    .config
                    .linkage
                    .aggregate(arena[other].iter().flat_map(|&a| {
                        members.iter().map(move |&b| distances.get(a, b))
                    }));
                if let Some(d) = linked {
                    pairs.insert((other, merged), d);
                }
            }

            log::debug!(
                "Merged clusters {left} and {right} into {merged} at {distance:.4} ({} members)",
                members.len()
            );
            merges.push(Merge {
                left,
                right,
                merged,
                distance,
                size: members.len(),
            });
            arena.push(members);
            active.insert(merged);
        }

        let mut labels = vec![0; n];
        for (label, &id) in active.iter().enumerate() {
            for &member in &arena[id] {
                labels[member] = label;
            }
        }

        ClusterAssignment { labels, merges }
    }
}

fn ordered(a: ClusterId, b: ClusterId) -> (ClusterId, ClusterId) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Minimum-distance pair; keys iterate in ascending order so the first
/// minimum found is the tie-break winner.
fn closest_pair(
    pairs: &BTreeMap<(ClusterId, ClusterId), f64>,
) -> Option<(ClusterId, ClusterId, f64)> {
    let mut best: Option<(ClusterId, ClusterId, f64)> = None;
    for (&(a, b), &d) in pairs {
        match best {
            Some((_, _, best_d)) if d >= best_d => {}
            _ => best = Some((a, b, d)),
        }
    }
    best
}
