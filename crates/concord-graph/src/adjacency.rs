//! Undirected adjacency matrices.

use concord_matrix::BoolMatrix;
use tracing::debug;

use crate::edges::{max_vertex, parse_edges, Edge};
use crate::error::{GraphError, Result};

/// Default upper bound on the largest vertex id accepted by
/// [`build_adjacency`].
pub const DEFAULT_MAX_VERTICES: usize = 10_000;

/// Builds the symmetric adjacency matrix of an undirected graph.
///
/// The matrix is `n x n` with `n` the largest vertex id; vertex `v` maps to
/// index `v - 1`. Ids missing from the edge list still get an (all-zero)
/// row and column. The size is not bounded here; see
/// [`build_adjacency_with_limit`].
pub fn adjacency_matrix(edges: &[Edge]) -> BoolMatrix {
    let mut matrix = BoolMatrix::new(max_vertex(edges));

    for edge in edges {
        let (a, b) = (edge.source as usize - 1, edge.target as usize - 1);
        matrix.set(a, b, true);
        matrix.set(b, a, true);
    }

    debug!(
        "Adjacency matrix {}x{} from {} edges",
        matrix.size(),
        matrix.size(),
        edges.len()
    );
    matrix
}

/// Parses an edge list and builds its undirected adjacency matrix, with
/// at most [`DEFAULT_MAX_VERTICES`] vertices.
///
/// # Errors
///
/// See [`build_adjacency_with_limit`].
pub fn build_adjacency(text: &str) -> Result<BoolMatrix> {
    build_adjacency_with_limit(text, DEFAULT_MAX_VERTICES)
}

/// Parses an edge list and builds its undirected adjacency matrix.
///
/// # Errors
///
/// - Any [`parse_edges`] error
/// - [`GraphError::TooManyVertices`] if the largest id exceeds `limit`;
///   checked before the matrix is allocated
pub fn build_adjacency_with_limit(text: &str, limit: usize) -> Result<BoolMatrix> {
    let edges = parse_edges(text)?;
    let max_id = max_vertex(&edges);
    if max_id > limit {
        return Err(GraphError::TooManyVertices { max_id, limit });
    }
    Ok(adjacency_matrix(&edges))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_graph() {
        let m = build_adjacency("1,2\n1,3\n3,4\n3,5").unwrap();
        assert_eq!(
            m.to_bits(),
            vec![
                vec![0, 1, 1, 0, 0],
                vec![1, 0, 0, 0, 0],
                vec![1, 0, 0, 1, 1],
                vec![0, 0, 1, 0, 0],
                vec![0, 0, 1, 0, 0],
            ]
        );
    }

    #[test]
    fn test_result_is_symmetric() {
        let m = build_adjacency("2,5\n5,1\n3,3").unwrap();
        assert!(m.is_symmetric());
        assert!(m.get(2, 2), "self-loop sets the diagonal");
    }

    #[test]
    fn test_gaps_produce_isolated_vertices() {
        let m = build_adjacency("1,4").unwrap();
        assert_eq!(m.size(), 4);
        assert!(m.row(1).iter().all(|&c| !c));
        assert!(m.row(2).iter().all(|&c| !c));
    }

    #[test]
    fn test_oversized_ids_rejected() {
        let err = build_adjacency("1,4000000000").unwrap_err();
        assert!(matches!(
            err,
            GraphError::TooManyVertices {
                max_id: 4_000_000_000,
                limit: DEFAULT_MAX_VERTICES
            }
        ));
        assert!(build_adjacency_with_limit("1,3", 3).is_ok());
        assert!(matches!(
            build_adjacency_with_limit("1,4", 3),
            Err(GraphError::TooManyVertices { max_id: 4, limit: 3 })
        ));
    }

    #[test]
    fn test_empty_edge_list() {
        assert!(build_adjacency("\n").unwrap().is_empty());
    }
}
