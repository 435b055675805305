//! The dense Boolean matrix type.

use std::ops::Index;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::error::{MatrixError, Result};

/// A square Boolean matrix representing a binary relation.
///
/// Entry `(i, j)` answers "does `i` relate to `j`". Out-of-range indices
/// panic, the same way slice indexing does.
///
/// # Serialization
///
/// Serializes as a nested array of `0`/`1` integers, one inner array per
/// row, which is the shape every Concord command prints.
///
/// # Example
///
/// ```rust
/// use concord_matrix::BoolMatrix;
///
/// let m = BoolMatrix::from_fn(3, |i, j| i < j);
/// assert!(m.get(0, 2));
/// assert!(m.transpose().get(2, 0));
/// assert_eq!(m.count_ones(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoolMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl BoolMatrix {
    /// Creates an all-false `size x size` matrix.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Creates a matrix whose entry `(i, j)` is `f(i, j)`.
    ///
    /// Cells are visited row by row.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                cells.push(f(i, j));
            }
        }
        Self { size, cells }
    }

    /// Builds a matrix from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] if any row length differs from the
    /// number of rows.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(MatrixError::NotSquare {
                    row,
                    expected: size,
                    actual: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }
        Ok(Self { size, cells })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` for the `0 x 0` matrix.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Reads entry `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.cells[self.offset(i, j)]
    }

    /// Writes entry `(i, j)`.
    pub fn set(&mut self, i: usize, j: usize, value: bool) {
        let offset = self.offset(i, j);
        self.cells[offset] = value;
    }

    /// Borrows row `i`.
    pub fn row(&self, i: usize) -> &[bool] {
        assert!(i < self.size, "row {} out of range for size {}", i, self.size);
        &self.cells[i * self.size..(i + 1) * self.size]
    }

    /// Returns the converse relation.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.size, |i, j| self.get(j, i))
    }

    /// Element-wise AND (relation intersection).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if sizes differ.
    pub fn and(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a && b)
    }

    /// Element-wise OR (relation union).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if sizes differ.
    pub fn or(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a || b)
    }

    /// Element-wise `self AND NOT other` (relation difference).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if sizes differ.
    pub fn and_not(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a && !b)
    }

    /// Boolean matrix product: `(i, j)` holds iff some `k` has
    /// `self(i, k)` and `other(k, j)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if sizes differ.
    pub fn compose(&self, other: &Self) -> Result<Self> {
        self.check_size(other)?;
        let n = self.size;
        let mut out = Self::new(n);
        for i in 0..n {
            for k in 0..n {
                if !self.get(i, k) {
                    continue;
                }
                for j in 0..n {
                    if other.get(k, j) {
                        out.set(i, j, true);
                    }
                }
            }
        }
        Ok(out)
    }

    /// Returns `true` if `(i, j) == (j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (i + 1..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Number of `true` entries.
    pub fn count_ones(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Converts to nested rows of `0`/`1`.
    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        (0..self.size)
            .map(|i| self.row(i).iter().map(|&c| u8::from(c)).collect())
            .collect()
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.size && j < self.size,
            "index ({}, {}) out of range for size {}",
            i,
            j,
            self.size
        );
        i * self.size + j
    }

    fn check_size(&self, other: &Self) -> Result<()> {
        if self.size != other.size {
            return Err(MatrixError::DimensionMismatch {
                left: self.size,
                right: other.size,
            });
        }
        Ok(())
    }

    fn zip_with(&self, other: &Self, op: impl Fn(bool, bool) -> bool) -> Result<Self> {
        self.check_size(other)?;
        let cells = self
            .cells
            .iter()
            .zip(&other.cells)
            .map(|(&a, &b)| op(a, b))
            .collect();
        Ok(Self {
            size: self.size,
            cells,
        })
    }
}

impl Index<(usize, usize)> for BoolMatrix {
    type Output = bool;

    fn index(&self, (i, j): (usize, usize)) -> &bool {
        &self.cells[self.offset(i, j)]
    }
}

impl Serialize for BoolMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.size))?;
        for row in self.to_bits() {
            seq.serialize_element(&row)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(n: usize) -> BoolMatrix {
        BoolMatrix::from_fn(n, |i, j| j == i + 1)
    }

    #[test]
    fn test_new_is_all_false() {
        let m = BoolMatrix::new(4);
        assert_eq!(m.size(), 4);
        assert_eq!(m.count_ones(), 0);
        assert!(!m.is_empty());
        assert!(BoolMatrix::new(0).is_empty());
    }

    #[test]
    fn test_set_and_index() {
        let mut m = BoolMatrix::new(2);
        m.set(1, 0, true);
        assert!(m[(1, 0)]);
        assert!(!m[(0, 1)]);
        assert_eq!(m.row(1), &[true, false]);
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let rows = vec![vec![true, false], vec![true]];
        let err = BoolMatrix::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            MatrixError::NotSquare {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_transpose_swaps_entries() {
        let m = chain(3);
        let t = m.transpose();
        assert!(t.get(1, 0));
        assert!(t.get(2, 1));
        assert!(!t.get(0, 1));
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_elementwise_ops() {
        let a = BoolMatrix::from_fn(2, |i, _| i == 0);
        let b = BoolMatrix::from_fn(2, |_, j| j == 0);

        assert_eq!(a.and(&b).unwrap().to_bits(), vec![vec![1, 0], vec![0, 0]]);
        assert_eq!(a.or(&b).unwrap().to_bits(), vec![vec![1, 1], vec![1, 0]]);
        assert_eq!(a.and_not(&b).unwrap().to_bits(), vec![vec![0, 1], vec![0, 0]]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = BoolMatrix::new(2).and(&BoolMatrix::new(3)).unwrap_err();
        assert_eq!(err, MatrixError::DimensionMismatch { left: 2, right: 3 });
        assert!(BoolMatrix::new(2).compose(&BoolMatrix::new(1)).is_err());
    }

    #[test]
    fn test_compose_follows_two_steps() {
        let m = chain(4);
        let squared = m.compose(&m).unwrap();
        assert!(squared.get(0, 2));
        assert!(squared.get(1, 3));
        assert!(!squared.get(0, 1));
        assert_eq!(squared.count_ones(), 2);
    }

    #[test]
    fn test_symmetry_check() {
        assert!(BoolMatrix::from_fn(3, |i, j| i != j).is_symmetric());
        assert!(!chain(3).is_symmetric());
    }

    #[test]
    fn test_serializes_as_bit_rows() {
        let json = serde_json::to_string(&chain(2)).unwrap();
        assert_eq!(json, "[[0,1],[0,0]]");
    }
}
