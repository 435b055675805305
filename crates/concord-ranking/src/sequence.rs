//! Ordering equivalence clusters into a ranking.
//!
//! Clusters are compared through their smallest member. Cluster `a` gets an
//! edge to cluster `b` when `b`'s representative ties-or-follows `a`'s in the
//! preference relation; a depth-first topological sort of that graph yields
//! the final order.

use concord_matrix::BoolMatrix;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{RankingError, Result};
use crate::types::{ItemId, RankGroup, Ranking};

/// What to do when the cluster order graph contains a cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePolicy {
    /// Fail with [`RankingError::CyclicOrder`].
    #[default]
    Reject,
    /// Log the cycle and emit whatever order the traversal produces.
    Ignore,
}

/// Builds the inter-cluster order graph.
///
/// Entry `(a, b)`, `a != b`, is set iff
/// `preference(first(b), first(a))`: `b` comes at or after `a`.
pub fn cluster_order(clusters: &[Vec<ItemId>], preference: &BoolMatrix) -> BoolMatrix {
    let first: Vec<usize> = clusters.iter().map(|c| c[0] as usize - 1).collect();
    BoolMatrix::from_fn(clusters.len(), |a, b| {
        a != b && preference.get(first[b], first[a])
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Topologically sorts a directed graph given as an adjacency matrix.
///
/// # Algorithm
///
/// Depth-first search with an explicit stack. Seeds are taken in increasing
/// index order and successors are explored in increasing index order. A
/// vertex is appended to the post-order when all its successors are done;
/// the reversed post-order is the result. This is the order a recursive DFS
/// would produce, without its stack-depth limit.
///
/// An edge into a vertex that is still in progress is a back edge, i.e. a
/// cycle.
///
/// # Errors
///
/// [`RankingError::CyclicOrder`] on the first back edge under
/// [`CyclePolicy::Reject`]. Each vertex on the cycle is reported as a
/// one-element group holding its 0-based index.
pub fn topological_order(order: &BoolMatrix, policy: CyclePolicy) -> Result<Vec<usize>> {
    traverse(order, policy).map_err(|cycle| RankingError::CyclicOrder {
        clusters: cycle.into_iter().map(|v| vec![v as ItemId]).collect(),
    })
}

/// Orders clusters and renders them as a ranking.
///
/// Singletons become bare items, larger clusters tie groups.
///
/// # Errors
///
/// [`RankingError::CyclicOrder`] naming the clusters on the cycle, under
/// [`CyclePolicy::Reject`].
pub fn sequence_clusters(
    clusters: &[Vec<ItemId>],
    preference: &BoolMatrix,
    policy: CyclePolicy,
) -> Result<Ranking> {
    let order = cluster_order(clusters, preference);
    let sorted = traverse(&order, policy).map_err(|cycle| RankingError::CyclicOrder {
        clusters: cycle.into_iter().map(|idx| clusters[idx].clone()).collect(),
    })?;

    Ok(Ranking::new(
        sorted
            .into_iter()
            .map(|idx| RankGroup::from_cluster(&clusters[idx]))
            .collect(),
    ))
}

/// Reverse post-order DFS; `Err` carries the vertices of the first cycle
/// found under [`CyclePolicy::Reject`].
fn traverse(order: &BoolMatrix, policy: CyclePolicy) -> std::result::Result<Vec<usize>, Vec<usize>> {
    let n = order.size();
    let mut marks = vec![Mark::Unvisited; n];
    let mut post_order = Vec::with_capacity(n);
    // (vertex, next successor to examine)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for seed in 0..n {
        if marks[seed] != Mark::Unvisited {
            continue;
        }
        marks[seed] = Mark::InProgress;
        stack.push((seed, 0));

        while let Some(frame) = stack.last_mut() {
            let (vertex, cursor) = *frame;
            let next = (cursor..n).find(|&succ| order.get(vertex, succ) && marks[succ] != Mark::Done);

            let Some(succ) = next else {
                marks[vertex] = Mark::Done;
                post_order.push(vertex);
                stack.pop();
                continue;
            };

            frame.1 = succ + 1;
            if marks[succ] == Mark::Unvisited {
                marks[succ] = Mark::InProgress;
                stack.push((succ, 0));
                continue;
            }

            let start = stack.iter().position(|&(v, _)| v == succ).unwrap_or(0);
            let cycle: Vec<usize> = stack[start..].iter().map(|&(v, _)| v).collect();
            match policy {
                CyclePolicy::Reject => return Err(cycle),
                CyclePolicy::Ignore => warn!("Ignoring cycle in cluster order through {:?}", cycle),
            }
        }
    }

    post_order.reverse();
    Ok(post_order)
}
