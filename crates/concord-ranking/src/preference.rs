//! Preference and equivalence relations.

use concord_matrix::BoolMatrix;

use crate::error::Result;
use crate::types::KernelPair;

/// Builds the preference relation: the consistency matrix with every kernel
/// pair forced to a mutual tie.
pub fn preference_matrix(consistency: &BoolMatrix, kernel: &[KernelPair]) -> BoolMatrix {
    let mut preference = consistency.clone();
    for pair in kernel {
        let (i, j) = (pair.low() as usize - 1, pair.high() as usize - 1);
        preference.set(i, j, true);
        preference.set(j, i, true);
    }
    preference
}

/// Symmetric part of a preference relation: `P AND P^T`.
///
/// # Errors
///
/// Never fails for a square input; the matrix error is propagated.
pub fn equivalence_matrix(preference: &BoolMatrix) -> Result<BoolMatrix> {
    Ok(preference.and(&preference.transpose())?)
}
