use crate::cli::AppConfig;
use crate::grid::Grid;
use crate::render::terminal::TerminalRenderer;
use crate::tile::Terrain;
use crate::wave::generate_with_retries;

use log::info;
use rand::rngs::OsRng;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

pub struct TerrainApp {
    config: AppConfig,
}

impl TerrainApp {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<Grid<Terrain>, Box<dyn std::error::Error>> {
        let seed = self.config.seed.unwrap_or_else(|| OsRng.gen());

        info!("Using seed: {}", seed);

        let rng = XorShiftRng::seed_from_u64(seed);
        let mut renderer = TerminalRenderer::stdout(self.config.renderer);

        let grid = generate_with_retries(
            &self.config.generation,
            self.config.attempts,
            rng,
            &mut renderer,
        )?;

        info!("Generation completed");
        Ok(grid)
    }
}
