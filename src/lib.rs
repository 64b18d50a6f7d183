//! Procedural terrain maps from a simplified wave function collapse.
//!
//! A random seed cell is collapsed first; from there every cell is filled
//! depth-first (north, east, south, west) with a tile allowed by the rule set
//! next to all of its already collapsed neighbours.

pub mod config;
pub mod error;
pub mod grid;
pub mod render;
pub mod rules;
pub mod superstate;
pub mod tile;
pub mod wave;

#[cfg(feature = "cli")]
pub mod app;
#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::{Error, Result};
pub use grid::{Direction, Grid, Neighbors, Position};
pub use rules::RuleSet;
pub use tile::{Terrain, TileType};
pub use wave::{generate, generate_with, generate_with_retries, Wave};
