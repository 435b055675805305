//! Classifying item pairs across two rankings.

use concord_matrix::BoolMatrix;

use crate::error::Result;
use crate::types::KernelPair;

/// Agreement between two precedence matrices.
///
/// For a pair `(i, j)`:
/// - `consistency(i, j)`: both rankings place `i` at or after `j`
/// - `conflict(i, j)`: both rankings place `j` at or after `i`
///
/// A pair where neither holds is ordered one way by the first ranking and
/// the other way by the second; those pairs form the kernel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agreement {
    /// `A AND B`
    pub consistency: BoolMatrix,
    /// `A^T AND B^T`
    pub conflict: BoolMatrix,
}

impl Agreement {
    /// Combines the precedence matrices of two rankings.
    ///
    /// # Errors
    ///
    /// Returns a matrix error if the sizes differ.
    pub fn between(a: &BoolMatrix, b: &BoolMatrix) -> Result<Self> {
        Ok(Self {
            consistency: a.and(b)?,
            conflict: a.transpose().and(&b.transpose())?,
        })
    }

    /// Pairs `(i, j)`, `i < j`, with neither consistency nor conflict, as
    /// 1-based ids in increasing `i` then `j` order.
    pub fn kernel(&self) -> Vec<KernelPair> {
        let n = self.consistency.size();
        let mut kernel = Vec::new();
        for i in 0..n {
            for j in i + 1..n {
                if !self.consistency.get(i, j) && !self.conflict.get(i, j) {
                    kernel.push(KernelPair(i as u32 + 1, j as u32 + 1));
                }
            }
        }
        kernel
    }
}
