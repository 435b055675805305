//! Equivalence cluster extraction.

use concord_matrix::BoolMatrix;

use crate::types::ItemId;

/// Groups items into clusters of mutual reachability.
///
/// # Algorithm
///
/// Scan vertices in increasing order. Each unvisited vertex `i` seeds a
/// cluster holding itself and every `j` with `closure(i, j)` and
/// `closure(j, i)`; members are marked visited. Clusters come out in seed
/// order with members ascending, as 1-based ids.
///
/// Given a transitively closed symmetric relation the clusters partition
/// `1..=n`.
///
/// # Example
///
/// ```rust
/// use concord_matrix::BoolMatrix;
/// use concord_ranking::equivalence_clusters;
///
/// // {0, 2} equivalent, 1 alone
/// let closure = BoolMatrix::from_fn(3, |i, j| i == j || (i != 1 && j != 1));
/// assert_eq!(equivalence_clusters(&closure), vec![vec![1, 3], vec![2]]);
/// ```
pub fn equivalence_clusters(closure: &BoolMatrix) -> Vec<Vec<ItemId>> {
    let n = closure.size();
    let mut visited = vec![false; n];
    let mut clusters = Vec::new();

    for seed in 0..n {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;
        let mut cluster = vec![seed as ItemId + 1];
        for other in 0..n {
            if other != seed && closure.get(seed, other) && closure.get(other, seed) {
                cluster.push(other as ItemId + 1);
                visited[other] = true;
            }
        }
        cluster.sort_unstable();
        clusters.push(cluster);
    }

    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use concord_matrix::transitive_closure;

    #[test]
    fn test_identity_gives_singletons() {
        let closure = BoolMatrix::from_fn(3, |i, j| i == j);
        assert_eq!(
            equivalence_clusters(&closure),
            vec![vec![1], vec![2], vec![3]]
        );
    }

    #[test]
    fn test_chained_pairs_merge_after_closure() {
        // 1~2, 2~3 (symmetric), 4 alone; closure links 1 and 3.
        let equivalence = BoolMatrix::from_fn(4, |i, j| i == j || (i < 3 && j < 3 && i.abs_diff(j) == 1));
        let clusters = equivalence_clusters(&transitive_closure(&equivalence));
        assert_eq!(clusters, vec![vec![1, 2, 3], vec![4]]);
    }

    #[test]
    fn test_seed_included_without_diagonal() {
        let clusters = equivalence_clusters(&BoolMatrix::new(2));
        assert_eq!(clusters, vec![vec![1], vec![2]]);
    }

    #[test]
    fn test_partition_covers_every_item_once() {
        let equivalence = BoolMatrix::from_fn(6, |i, j| i % 3 == j % 3);
        let clusters = equivalence_clusters(&equivalence);
        let mut all: Vec<_> = clusters.iter().flatten().copied().collect();
        all.sort_unstable();
        assert_eq!(all, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(clusters, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
    }

    #[test]
    fn test_empty() {
        assert!(equivalence_clusters(&BoolMatrix::new(0)).is_empty());
    }
}
