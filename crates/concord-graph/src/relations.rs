//! Relation matrices of a directed graph.
//!
//! Given a directed edge list, derives five relations over its vertices:
//!
//! | Field | Name | Definition |
//! |-------|------|------------|
//! | `direct` | r1 | `u -> v` is an edge |
//! | `inverse` | r2 | converse of r1 |
//! | `indirect` | r3 | `v` reachable from `u` by a path of length >= 2, and not a direct edge |
//! | `inverse_indirect` | r4 | converse of r3 |
//! | `common_ancestor` | r5 | `u != v` and some vertex is a direct parent of both |

use std::collections::{BTreeSet, HashMap};

use concord_matrix::{transitive_closure, BoolMatrix};
use serde::Serialize;
use tracing::debug;

use crate::edges::{parse_edges, Edge};
use crate::error::Result;

/// The five relation matrices of a directed graph.
///
/// Row/column `k` of every matrix refers to `vertices[k]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationMatrices {
    /// Distinct vertex ids in ascending order
    pub vertices: Vec<u32>,
    /// r1: direct edges
    pub direct: BoolMatrix,
    /// r2: inverse of r1
    pub inverse: BoolMatrix,
    /// r3: reachable only through intermediate vertices
    pub indirect: BoolMatrix,
    /// r4: inverse of r3
    pub inverse_indirect: BoolMatrix,
    /// r5: siblings sharing a direct parent
    pub common_ancestor: BoolMatrix,
}

impl RelationMatrices {
    /// Returns the matrices in r1..r5 order with their labels.
    pub fn labelled(&self) -> [(&'static str, &BoolMatrix); 5] {
        [
            ("r1", &self.direct),
            ("r2", &self.inverse),
            ("r3", &self.indirect),
            ("r4", &self.inverse_indirect),
            ("r5", &self.common_ancestor),
        ]
    }
}

/// Computes the relation matrices of a directed graph.
///
/// Vertices are the distinct ids appearing in `edges`, indexed densely in
/// ascending numeric order.
///
/// # Errors
///
/// Only [`GraphError::Matrix`](crate::GraphError::Matrix), which cannot occur
/// for matrices built here but is propagated rather than unwrapped.
///
/// # Example
///
/// ```rust
/// use concord_graph::{compute_relations, Edge};
///
/// let rel = compute_relations(&[Edge::new(1, 2), Edge::new(2, 3)])?;
/// assert!(rel.indirect.get(0, 2));   // 1 reaches 3 through 2
/// assert!(!rel.indirect.get(0, 1));  // 1 -> 2 is direct
/// # Ok::<(), concord_graph::GraphError>(())
/// ```
pub fn compute_relations(edges: &[Edge]) -> Result<RelationMatrices> {
    let vertices: Vec<u32> = edges
        .iter()
        .flat_map(|e| [e.source, e.target])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let index: HashMap<u32, usize> = vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();

    let mut direct = BoolMatrix::new(vertices.len());
    for edge in edges {
        direct.set(index[&edge.source], index[&edge.target], true);
    }

    let inverse = direct.transpose();
    let indirect = transitive_closure(&direct).and_not(&direct)?;
    let inverse_indirect = indirect.transpose();
    let common_ancestor = siblings(&inverse);

    debug!(
        "Relations over {} vertices: {} direct, {} indirect",
        vertices.len(),
        direct.count_ones(),
        indirect.count_ones()
    );

    Ok(RelationMatrices {
        vertices,
        direct,
        inverse,
        indirect,
        inverse_indirect,
        common_ancestor,
    })
}

/// Parses a directed edge list and computes its relation matrices.
///
/// # Errors
///
/// Propagates any [`parse_edges`] error.
pub fn build_relations(text: &str) -> Result<RelationMatrices> {
    let edges = parse_edges(text)?;
    compute_relations(&edges)
}

/// `i` and `j` (distinct) share a parent iff their rows in the inverse
/// relation intersect.
fn siblings(inverse: &BoolMatrix) -> BoolMatrix {
    let n = inverse.size();
    let mut out = BoolMatrix::new(n);
    for i in 0..n {
        for j in i + 1..n {
            let shared = inverse
                .row(i)
                .iter()
                .zip(inverse.row(j))
                .any(|(&a, &b)| a && b);
            if shared {
                out.set(i, j, true);
                out.set(j, i, true);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> RelationMatrices {
        // 1 -> 2, 1 -> 3, 3 -> 4, 3 -> 5
        build_relations("1,2\n1,3\n3,4\n3,5").unwrap()
    }

    #[test]
    fn test_direct_and_inverse() {
        let rel = tree();
        assert_eq!(rel.vertices, vec![1, 2, 3, 4, 5]);
        assert_eq!(rel.direct.count_ones(), 4);
        assert!(rel.direct.get(0, 1));
        assert!(rel.inverse.get(1, 0));
        assert_eq!(rel.inverse, rel.direct.transpose());
    }

    #[test]
    fn test_indirect_excludes_direct_edges() {
        let rel = tree();
        assert_eq!(
            rel.indirect.to_bits(),
            vec![
                vec![0, 0, 0, 1, 1],
                vec![0, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 0],
            ]
        );
        assert_eq!(rel.inverse_indirect, rel.indirect.transpose());
        assert_eq!(rel.direct.and(&rel.indirect).unwrap().count_ones(), 0);
    }

    #[test]
    fn test_common_ancestor_pairs_siblings() {
        let rel = tree();
        assert_eq!(
            rel.common_ancestor.to_bits(),
            vec![
                vec![0, 0, 0, 0, 0],
                vec![0, 0, 1, 0, 0],
                vec![0, 1, 0, 0, 0],
                vec![0, 0, 0, 0, 1],
                vec![0, 0, 0, 1, 0],
            ]
        );
        assert!(rel.common_ancestor.is_symmetric());
    }

    #[test]
    fn test_vertices_sorted_numerically() {
        let rel = build_relations("10,2\n2,9").unwrap();
        assert_eq!(rel.vertices, vec![2, 9, 10]);
        // 10 -> 2 -> 9
        assert!(rel.direct.get(2, 0));
        assert!(rel.indirect.get(2, 1));
    }

    #[test]
    fn test_cycle_keeps_reflexive_indirect_pairs() {
        // 1 -> 2 -> 1: each vertex reaches itself through the other.
        let rel = build_relations("1,2\n2,1").unwrap();
        assert!(rel.indirect.get(0, 0));
        assert!(rel.indirect.get(1, 1));
        assert!(!rel.indirect.get(0, 1));
    }

    #[test]
    fn test_labelled_order() {
        let rel = tree();
        let labels: Vec<_> = rel.labelled().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["r1", "r2", "r3", "r4", "r5"]);
    }
}
