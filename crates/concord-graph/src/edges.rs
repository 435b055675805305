//! Edge-list parsing.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// A single edge between two 1-based vertex ids.
///
/// Direction is up to the consumer: [`adjacency_matrix`](crate::adjacency_matrix)
/// treats it as undirected, [`compute_relations`](crate::compute_relations)
/// as `source -> target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// First vertex (tail for directed graphs)
    pub source: u32,
    /// Second vertex (head for directed graphs)
    pub target: u32,
}

impl Edge {
    /// Creates an edge.
    pub fn new(source: u32, target: u32) -> Self {
        Self { source, target }
    }
}

/// Parses an edge list, one `v1,v2` pair per line.
///
/// # Errors
///
/// - [`GraphError::MalformedEdge`] if a non-blank line does not split into
///   exactly two fields
/// - [`GraphError::InvalidVertex`] if a field is not a positive integer
///
/// # Example
///
/// ```rust
/// use concord_graph::{parse_edges, Edge};
///
/// let edges = parse_edges(" 1, 2\n\n2,3")?;
/// assert_eq!(edges, vec![Edge::new(1, 2), Edge::new(2, 3)]);
/// # Ok::<(), concord_graph::GraphError>(())
/// ```
pub fn parse_edges(text: &str) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut fields = trimmed.split(',');
        let (Some(a), Some(b), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(GraphError::MalformedEdge {
                line,
                text: trimmed.to_string(),
            });
        };

        edges.push(Edge::new(parse_vertex(a, line)?, parse_vertex(b, line)?));
    }

    Ok(edges)
}

/// Largest vertex id referenced by `edges`, or 0 for none.
pub(crate) fn max_vertex(edges: &[Edge]) -> usize {
    edges
        .iter()
        .map(|e| e.source.max(e.target) as usize)
        .max()
        .unwrap_or(0)
}

fn parse_vertex(field: &str, line: usize) -> Result<u32> {
    let field = field.trim();
    match field.parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(GraphError::InvalidVertex {
            line,
            value: field.to_string(),
        }),
    }
}
