//! # Boolean Relation Matrices
//!
//! Dense square Boolean matrices used to represent binary relations over a
//! universe of `n` elements, plus the handful of relational operations the
//! other Concord crates compose: element-wise AND/OR/difference, transpose,
//! Boolean composition and Warshall's transitive closure.
//!
//! ## Representation
//!
//! A relation over `{0..n-1}` is stored row-major in a flat `Vec<bool>`.
//! Entry `(i, j)` is `true` iff `i` relates to `j`. Matrices are built once
//! and then read; every operation returns a fresh matrix.
//!
//! ## Example
//!
//! ```rust
//! use concord_matrix::{transitive_closure, BoolMatrix};
//!
//! // 0 -> 1 -> 2
//! let mut m = BoolMatrix::new(3);
//! m.set(0, 1, true);
//! m.set(1, 2, true);
//!
//! let closure = transitive_closure(&m);
//! assert!(closure.get(0, 2));
//! assert!(!closure.get(2, 0));
//! ```
//!
//! ## References
//!
//! - Warshall, S. (1962). "A theorem on Boolean matrices"
//!   *Journal of the ACM*, 9(1), 11-12.

mod error;
mod matrix;
mod warshall;

pub use error::{MatrixError, Result};
pub use matrix::BoolMatrix;
pub use warshall::transitive_closure;
