use crate::error::{Error, Result};
use crate::rules::RuleSet;
use crate::tile::{Terrain, TileType};

pub const DEFAULT_SIZE: usize = 10;

/// Everything a collapse needs besides randomness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config<T: Ord> {
    pub size: usize,
    pub rules: RuleSet<T>,
}

impl<T: TileType> Config<T> {
    pub fn new(size: usize, rules: RuleSet<T>) -> Self {
        Self { size, rules }
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::invalid_configuration("grid size must be positive"));
        }

        if self.size.checked_mul(self.size).is_none() {
            return Err(Error::invalid_configuration("grid size too large"));
        }

        self.rules.validate()
    }
}

impl Default for Config<Terrain> {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, RuleSet::terrain())
    }
}
