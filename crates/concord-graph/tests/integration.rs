//! Integration tests for edge-list parsing and graph relations.

use concord_graph::{build_adjacency, build_relations, GraphError, DEFAULT_MAX_VERTICES};
use concord_matrix::BoolMatrix;

const TREE: &str = "1,2\n1,3\n3,4\n3,5\n";

fn to_json(value: &impl serde::Serialize) -> String {
    serde_json::to_string(value).unwrap()
}

/// Builds a matrix from 0/1 rows.
fn matrix(rows: &[&[u8]]) -> BoolMatrix {
    let rows: Vec<Vec<bool>> = rows
        .iter()
        .map(|row| row.iter().map(|&cell| cell == 1).collect())
        .collect();
    BoolMatrix::from_rows(&rows).unwrap()
}

// =============================================================================
// ADJACENCY
// =============================================================================

#[test]
fn test_tree_adjacency() {
    let m = build_adjacency(TREE).unwrap();
    assert_eq!(
        to_json(&m),
        "[[0,1,1,0,0],[1,0,0,0,0],[1,0,0,1,1],[0,0,1,0,0],[0,0,1,0,0]]"
    );
    assert!(m.is_symmetric());
}

#[test]
fn test_adjacency_sized_by_largest_id() {
    let m = build_adjacency("2,4\n").unwrap();
    assert_eq!(m.size(), 4);
    assert_eq!(m.count_ones(), 2);
    assert!(m.row(0).iter().all(|&cell| !cell));
}

#[test]
fn test_empty_edge_list() {
    assert!(build_adjacency("").unwrap().is_empty());
    let rel = build_relations("\n\n").unwrap();
    assert!(rel.vertices.is_empty());
    assert!(rel.direct.is_empty());
}

// =============================================================================
// RELATIONS
// =============================================================================

#[test]
fn test_tree_relations() {
    let rel = build_relations(TREE).unwrap();
    assert_eq!(rel.vertices, vec![1, 2, 3, 4, 5]);

    assert_eq!(
        rel.direct,
        matrix(&[
            &[0, 1, 1, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 1, 1],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
        ])
    );
    assert_eq!(rel.inverse, rel.direct.transpose());
    assert_eq!(
        rel.indirect,
        matrix(&[
            &[0, 0, 0, 1, 1],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
        ])
    );
    assert_eq!(rel.inverse_indirect, rel.indirect.transpose());
    assert_eq!(
        rel.common_ancestor,
        matrix(&[
            &[0, 0, 0, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 1, 0, 0, 0],
            &[0, 0, 0, 0, 1],
            &[0, 0, 0, 1, 0],
        ])
    );
}

#[test]
fn test_relation_invariants() {
    for text in [TREE, "1,2\n2,3\n3,1\n", "5,7\n7,9\n5,9\n", "1,1\n"] {
        let rel = build_relations(text).unwrap();
        let overlap = rel.direct.and(&rel.indirect).unwrap();
        assert_eq!(overlap.count_ones(), 0, "r1 and r3 overlap for {:?}", text);
        assert!(rel.common_ancestor.is_symmetric());
        for i in 0..rel.vertices.len() {
            assert!(!rel.common_ancestor.get(i, i));
        }
    }
}

#[test]
fn test_vertices_ordered_numerically() {
    let rel = build_relations("10,2\n2,9\n").unwrap();
    assert_eq!(rel.vertices, vec![2, 9, 10]);
    // 10 -> 2 -> 9
    assert!(rel.direct.get(2, 0));
    assert!(rel.indirect.get(2, 1));
}

#[test]
fn test_relations_serialize_labelled() {
    let rel = build_relations("1,2\n").unwrap();
    let labels: Vec<&str> = rel.labelled().iter().map(|(name, _)| *name).collect();
    assert_eq!(labels, vec!["r1", "r2", "r3", "r4", "r5"]);

    let value: serde_json::Value = serde_json::to_value(&rel).unwrap();
    assert_eq!(value["vertices"], serde_json::json!([1, 2]));
    assert_eq!(value["direct"], serde_json::json!([[0, 1], [0, 0]]));
}

// =============================================================================
// ERROR HANDLING
// =============================================================================

#[test]
fn test_malformed_lines_report_position() {
    match build_relations("1,2\n3\n") {
        Err(GraphError::MalformedEdge { line, text }) => {
            assert_eq!(line, 2);
            assert_eq!(text, "3");
        }
        other => panic!("Expected MalformedEdge, got {:?}", other),
    }
    assert!(matches!(
        build_adjacency("1,2,3\n"),
        Err(GraphError::MalformedEdge { line: 1, .. })
    ));
}

#[test]
fn test_huge_vertex_id_rejected() {
    assert!(matches!(
        build_adjacency("1,4000000000\n"),
        Err(GraphError::TooManyVertices { max_id: 4_000_000_000, limit: DEFAULT_MAX_VERTICES })
    ));
    // Relations are indexed by distinct vertices, so the same list stays small.
    let rel = build_relations("1,4000000000\n").unwrap();
    assert_eq!(rel.vertices, vec![1, 4_000_000_000]);
    assert_eq!(rel.direct.size(), 2);
}

#[test]
fn test_invalid_vertices() {
    for bad in ["0,1", "1,-2", "a,b", "1,"] {
        assert!(
            matches!(build_adjacency(bad), Err(GraphError::InvalidVertex { line: 1, .. })),
            "{:?} should be rejected",
            bad
        );
    }
}
