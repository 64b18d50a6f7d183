use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tile::{Terrain, TileType};

/// Adjacency table: for every tile, the tiles allowed directly next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RuleSet<T: Ord> {
    allowed: BTreeMap<T, BTreeSet<T>>,
}

impl<T: TileType> Default for RuleSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TileType> RuleSet<T> {
    pub fn new() -> Self {
        Self {
            allowed: BTreeMap::new(),
        }
    }

    /// Adds `neighbors` to the tiles allowed next to `tile`.
    pub fn allow(mut self, tile: T, neighbors: impl IntoIterator<Item = T>) -> Self {
        self.allowed.entry(tile).or_default().extend(neighbors);
        self
    }

    /// Tiles allowed next to `tile`; `None` if `tile` has no entry.
    pub fn allowed_neighbors(&self, tile: T) -> Option<&BTreeSet<T>> {
        self.allowed.get(&tile)
    }

    pub fn permits(&self, tile: T, neighbor: T) -> bool {
        self.allowed_neighbors(tile)
            .is_some_and(|set| set.contains(&neighbor))
    }

    /// Every tile with an entry, in order.
    pub fn tiles(&self) -> impl Iterator<Item = T> + '_ {
        self.allowed.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    pub fn is_symmetric(&self) -> bool {
        self.allowed
            .iter()
            .all(|(&tile, set)| set.iter().all(|&other| self.permits(other, tile)))
    }

    /// Rejects empty tables and tables naming a tile that has no entry of its own.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::invalid_configuration("rule set is empty"));
        }

        for (tile, set) in &self.allowed {
            if let Some(missing) = set.iter().find(|t| !self.allowed.contains_key(t)) {
                return Err(Error::invalid_configuration(format!(
                    "{:?} allows {:?}, which has no rules of its own",
                    tile, missing
                )));
            }
        }

        Ok(())
    }
}

impl<T: TileType, S: IntoIterator<Item = T>> FromIterator<(T, S)> for RuleSet<T> {
    fn from_iter<I: IntoIterator<Item = (T, S)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |rules, (tile, neighbors)| rules.allow(tile, neighbors))
    }
}

impl RuleSet<Terrain> {
    /// Chain adjacency: mountain - forest - plains - desert.
    pub fn terrain() -> Self {
        use Terrain::*;

        Self::new()
            .allow(Mountain, [Mountain, Forest])
            .allow(Forest, [Mountain, Forest, Plains])
            .allow(Plains, [Forest, Plains, Desert])
            .allow(Desert, [Plains, Desert])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_rules_are_chain_adjacent() {
        let rules = RuleSet::terrain();

        assert!(rules.validate().is_ok());
        assert!(rules.is_symmetric());
        assert_eq!(rules.len(), 4);

        for (i, &a) in Terrain::ALL.iter().enumerate() {
            for (j, &b) in Terrain::ALL.iter().enumerate() {
                assert_eq!(rules.permits(a, b), i.abs_diff(j) <= 1, "{:?} / {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_validate_rejects_empty() {
        let rules: RuleSet<u8> = RuleSet::new();

        assert!(matches!(
            rules.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_dangling_tile() {
        let rules = RuleSet::new().allow(0u8, [0, 1]);

        assert!(matches!(
            rules.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_asymmetric_rules() {
        let rules: RuleSet<u8> = [(0, vec![0, 1]), (1, vec![1])].into_iter().collect();

        assert!(rules.validate().is_ok());
        assert!(!rules.is_symmetric());
        assert_eq!(rules.allowed_neighbors(2), None);
    }
}
