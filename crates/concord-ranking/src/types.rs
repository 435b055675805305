//! Rankings, kernel pairs and reconciliation results.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{RankingError, Result};

/// A 1-based item identifier.
pub type ItemId = u32;

/// One ordinal position in a ranking: a single item or a group of tied items.
///
/// Serializes as a bare integer or an array of integers.
///
/// # Example
///
/// ```rust
/// use concord_ranking::RankGroup;
///
/// let group: RankGroup = serde_json::from_str("[2, 3]").unwrap();
/// assert_eq!(group, RankGroup::Tie(vec![2, 3]));
/// assert_eq!(group.items(), &[2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RankGroup {
    /// A single item alone at its position
    Single(ItemId),
    /// Items sharing one position
    Tie(Vec<ItemId>),
}

impl RankGroup {
    /// Items at this position.
    pub fn items(&self) -> &[ItemId] {
        match self {
            RankGroup::Single(id) => std::slice::from_ref(id),
            RankGroup::Tie(ids) => ids,
        }
    }

    /// Returns `true` if more than one item shares this position.
    pub fn is_tie(&self) -> bool {
        self.items().len() > 1
    }

    /// Builds the canonical group for a sorted cluster: bare for one item,
    /// a tie otherwise.
    pub(crate) fn from_cluster(cluster: &[ItemId]) -> Self {
        match cluster {
            [single] => RankGroup::Single(*single),
            _ => RankGroup::Tie(cluster.to_vec()),
        }
    }
}

impl From<ItemId> for RankGroup {
    fn from(id: ItemId) -> Self {
        RankGroup::Single(id)
    }
}

impl From<Vec<ItemId>> for RankGroup {
    fn from(ids: Vec<ItemId>) -> Self {
        RankGroup::Tie(ids)
    }
}

/// An ordered sequence of rank groups, best first.
///
/// # Example
///
/// ```rust
/// use concord_ranking::{RankGroup, Ranking};
///
/// let ranking = Ranking::new(vec![
///     RankGroup::Single(1),
///     RankGroup::Tie(vec![2, 3]),
///     RankGroup::Single(4),
/// ]);
/// assert_eq!(ranking.max_item(), Some(4));
/// assert_eq!(serde_json::to_string(&ranking).unwrap(), "[1,[2,3],4]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ranking(Vec<RankGroup>);

impl Ranking {
    /// Creates a ranking from its groups.
    pub fn new(groups: Vec<RankGroup>) -> Self {
        Self(groups)
    }

    /// The groups, best first.
    pub fn groups(&self) -> &[RankGroup] {
        &self.0
    }

    /// Returns `true` if the ranking has no groups.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Every item, in ranking order.
    pub fn items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.0.iter().flat_map(|g| g.items().iter().copied())
    }

    /// Largest item id, or `None` if the ranking has no items.
    pub fn max_item(&self) -> Option<ItemId> {
        self.items().max()
    }

    /// Checks that ids are positive and none repeats.
    ///
    /// # Errors
    ///
    /// - [`RankingError::InvalidItem`] for an id of 0
    /// - [`RankingError::DuplicateItem`] for a repeated id
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for id in self.items() {
            if id == 0 {
                return Err(RankingError::InvalidItem { id });
            }
            if !seen.insert(id) {
                return Err(RankingError::DuplicateItem { id });
            }
        }
        Ok(())
    }
}

impl From<Vec<RankGroup>> for Ranking {
    fn from(groups: Vec<RankGroup>) -> Self {
        Self(groups)
    }
}

/// An unordered item pair `(low, high)`, `low < high`, whose relative order
/// the two rankings do not settle.
///
/// Serializes as `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KernelPair(pub ItemId, pub ItemId);

impl KernelPair {
    /// The smaller id.
    pub fn low(&self) -> ItemId {
        self.0
    }

    /// The larger id.
    pub fn high(&self) -> ItemId {
        self.1
    }
}

/// Output of a reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciliation {
    /// Kernel of contradictions, ordered by `low` then `high`
    pub kernel: Vec<KernelPair>,
    /// The reconciled ranking over `1..=max_id`
    pub consistent_ranking: Ranking,
}
