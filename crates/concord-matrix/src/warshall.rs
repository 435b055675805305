//! Warshall's transitive closure.

use crate::matrix::BoolMatrix;

/// Computes the transitive closure of a relation.
///
/// # Algorithm
///
/// For each intermediate vertex `k` in `0..n`, in order, and every pair
/// `(i, j)`: `closure(i, j) |= closure(i, k) && closure(k, j)`. Updates are
/// made in place; OR-accumulation is monotone, so the fixed point does not
/// depend on reading partially updated rows.
///
/// Reflexive pairs are only present if the input has them or they lie on a
/// cycle.
///
/// # Complexity
///
/// - Time: O(n³)
/// - Space: O(n²) for the returned matrix
///
/// # Example
///
/// ```rust
/// use concord_matrix::{transitive_closure, BoolMatrix};
///
/// // Symmetric pairs {0,1} and {1,2} close into one class.
/// let m = BoolMatrix::from_fn(3, |i, j| i.abs_diff(j) == 1);
/// let closure = transitive_closure(&m);
/// assert!(closure.get(0, 2) && closure.get(2, 0));
/// ```
#[must_use]
pub fn transitive_closure(matrix: &BoolMatrix) -> BoolMatrix {
    let n = matrix.size();
    let mut closure = matrix.clone();

    for k in 0..n {
        for i in 0..n {
            if !closure.get(i, k) {
                continue;
            }
            for j in 0..n {
                if closure.get(k, j) {
                    closure.set(i, j, true);
                }
            }
        }
    }

    closure
}
