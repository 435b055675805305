//! Ranking document parsing.

use tracing::debug;

use crate::error::Result;
use crate::types::Ranking;

/// Parses and validates a JSON ranking document such as `[1, [2, 3], 4]`.
///
/// # Errors
///
/// - [`RankingError::Parse`](crate::RankingError::Parse) for malformed JSON or
///   items that are not non-negative integers
/// - [`RankingError::InvalidItem`](crate::RankingError::InvalidItem) for an id of 0
/// - [`RankingError::DuplicateItem`](crate::RankingError::DuplicateItem) for a
///   repeated id
pub fn parse_ranking(json: &str) -> Result<Ranking> {
    let ranking: Ranking = serde_json::from_str(json)?;
    ranking.validate()?;
    debug!("Parsed ranking with {} groups", ranking.len());
    Ok(ranking)
}
