//! Precedence matrices.

use concord_matrix::BoolMatrix;

use crate::error::{RankingError, Result};
use crate::types::Ranking;

/// Builds the "does not come strictly before" relation of a ranking.
///
/// Groups take positions `0, 1, 2, ...`; tied items share their group's
/// position and items absent from the ranking sit at position 0. Entry
/// `(i, j)` is `position[i] >= position[j]`, so ties relate both ways and
/// the diagonal is always set.
///
/// # Errors
///
/// - [`RankingError::InvalidItem`] for an id of 0
/// - [`RankingError::ItemOutOfRange`] for an id above `max_id`
///
/// # Example
///
/// ```rust
/// use concord_ranking::{precedence_matrix, parse_ranking};
///
/// let m = precedence_matrix(&parse_ranking("[1, [2, 3]]")?, 3)?;
/// assert!(m.get(1, 0));                // 2 follows 1
/// assert!(!m.get(0, 1));               // 1 does not follow 2
/// assert!(m.get(1, 2) && m.get(2, 1)); // 2 and 3 are tied
/// # Ok::<(), concord_ranking::RankingError>(())
/// ```
pub fn precedence_matrix(ranking: &Ranking, max_id: usize) -> Result<BoolMatrix> {
    let mut positions = vec![0usize; max_id];

    for (position, group) in ranking.groups().iter().enumerate() {
        for &id in group.items() {
            if id == 0 {
                return Err(RankingError::InvalidItem { id });
            }
            let slot = positions
                .get_mut(id as usize - 1)
                .ok_or(RankingError::ItemOutOfRange { id, max_id })?;
            *slot = position;
        }
    }

    Ok(BoolMatrix::from_fn(max_id, |i, j| positions[i] >= positions[j]))
}
