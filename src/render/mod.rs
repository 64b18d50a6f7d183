pub mod events;

#[cfg(feature = "cli")]
pub mod terminal;

use crate::error::Result;
use crate::grid::Grid;
use crate::tile::TileType;

pub use events::RenderEvent;

/// Core trait for displaying generation progress
pub trait Renderer<T: TileType> {
    /// Handle a render event during generation
    fn handle_event(&mut self, event: &RenderEvent) -> Result<()>;

    /// Show the current grid state; called after every collapsed cell
    fn update(&mut self, grid: &Grid<T>) -> Result<()> {
        let _ = grid;
        Ok(())
    }

    /// Show the finished grid
    fn finalize(&mut self, grid: &Grid<T>) -> Result<()>;
}
