//! # Graph Relations
//!
//! Turns a line-oriented edge list into relation matrices.
//!
//! ## Input Format
//!
//! One edge per line, two 1-based vertex ids separated by a comma:
//!
//! ```text
//! 1,2
//! 1,3
//! 3,4
//! ```
//!
//! Blank lines are ignored and whitespace around fields is trimmed.
//!
//! ## Components
//!
//! | Function | Graph | Output |
//! |----------|-------|--------|
//! | [`adjacency_matrix`] | Undirected | Symmetric adjacency indexed by `id - 1` |
//! | [`compute_relations`] | Directed | Five relation matrices over the distinct vertices |
//!
//! ## Example
//!
//! ```rust
//! use concord_graph::{adjacency_matrix, parse_edges};
//!
//! let edges = parse_edges("1,2\n2,3\n")?;
//! let m = adjacency_matrix(&edges);
//! assert!(m.get(0, 1) && m.get(1, 0));
//! assert!(!m.get(0, 2));
//! # Ok::<(), concord_graph::GraphError>(())
//! ```

mod adjacency;
mod edges;
mod error;
mod relations;

pub use adjacency::{adjacency_matrix, build_adjacency, build_adjacency_with_limit, DEFAULT_MAX_VERTICES};
pub use edges::{parse_edges, Edge};
pub use error::{GraphError, Result};
pub use relations::{build_relations, compute_relations, RelationMatrices};
