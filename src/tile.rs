use std::fmt::Debug;

use enum_map::Enum;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grid::Glyph;

/// Values a cell can collapse to.
///
/// Ordering keeps candidate sets in a stable order, which is what makes a
/// seeded run reproducible.
pub trait TileType: Copy + Ord + Debug {}

impl<T: Copy + Ord + Debug> TileType for T {}

/// Reference terrain kinds, in chain order: each one borders itself and its
/// immediate neighbours in this list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Enum)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Terrain {
    Mountain,
    Forest,
    Plains,
    Desert,
}

impl Terrain {
    pub const ALL: [Terrain; 4] = [
        Terrain::Mountain,
        Terrain::Forest,
        Terrain::Plains,
        Terrain::Desert,
    ];
}

impl Glyph for Terrain {
    fn glyph(&self) -> char {
        match self {
            Terrain::Mountain => '^',
            Terrain::Forest => '$',
            Terrain::Plains => ')',
            Terrain::Desert => '.',
        }
    }
}
