use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::grid::{Neighbors, Position};
use crate::rules::RuleSet;
use crate::tile::TileType;

/// Candidate values for a cell that has not been collapsed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperState<T> {
    pub possible: Vec<T>,
}

impl<T: TileType> SuperState<T> {
    pub fn new(possible: Vec<T>) -> Self {
        Self { possible }
    }

    /// Intersection of the sets allowed by `incoming` and by every present
    /// neighbour reading. A tile without rules contributes an empty set.
    pub fn constrained(rules: &RuleSet<T>, incoming: T, neighbors: &Neighbors<Option<T>>) -> Self {
        let mut possible: Vec<T> = rules
            .allowed_neighbors(incoming)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();

        for &neighbor in neighbors.present() {
            possible.retain(|&candidate| rules.permits(neighbor, candidate));
        }

        Self { possible }
    }

    pub fn is_contradiction(&self) -> bool {
        self.possible.is_empty()
    }

    /// Uniformly picks one candidate; `None` on contradiction.
    pub fn collapse<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<T> {
        self.possible.choose(rng).copied()
    }
}

/// Chooses the value for the cell at `position`, given its neighbour readings
/// and the value of the cell that triggered the evaluation.
pub fn select_value<T: TileType, R: Rng + ?Sized>(
    rules: &RuleSet<T>,
    position: Position,
    incoming: T,
    neighbors: &Neighbors<Option<T>>,
    rng: &mut R,
) -> Result<T> {
    let (x, y) = position;
    let state = SuperState::constrained(rules, incoming, neighbors);

    if state.is_contradiction() {
        return Err(Error::ConstraintViolation { x, y });
    }

    state.collapse(rng).ok_or(Error::ConstraintViolation { x, y })
}
