use log::{debug, trace, warn};
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::grid::{Direction, Grid, Position};
use crate::render::{RenderEvent, Renderer};
use crate::rules::RuleSet;
use crate::superstate::select_value;
use crate::tile::TileType;

/// A collapsed cell whose neighbours are still being visited.
#[derive(Debug)]
struct Frame<T> {
    x: usize,
    y: usize,
    value: T,
    next: usize,
}

impl<T> Frame<T> {
    fn new(x: usize, y: usize, value: T) -> Self {
        Self { x, y, value, next: 0 }
    }

    fn advance(&mut self) -> Option<Direction> {
        let direction = Direction::ALL.get(self.next).copied();
        self.next += 1;
        direction
    }
}

/// Depth-first collapse of a grid, one cell per [`Wave::tick`].
///
/// The work-list holds one frame per collapsed cell whose neighbours have
/// not all been visited, which reproduces a recursive north, east, south,
/// west traversal from the seed without growing the call stack.
pub struct Wave<'a, T, R>
where
    T: TileType,
    R: Rng,
{
    grid: Grid<T>,
    rules: &'a RuleSet<T>,
    stack: Vec<Frame<T>>,
    rng: R,
}

impl<'a, T, R> Wave<'a, T, R>
where
    T: TileType,
    R: Rng,
{
    pub fn new(config: &'a Config<T>, rng: R) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            grid: Grid::new(config.size),
            rules: &config.rules,
            stack: Vec::new(),
            rng,
        })
    }

    pub fn done(&self) -> bool {
        self.grid.is_complete()
    }

    pub fn remaining(&self) -> usize {
        self.grid.remaining()
    }

    pub fn is_seeded(&self) -> bool {
        let size = self.grid.size();
        self.grid.remaining() < size * size
    }

    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    pub fn into_grid(self) -> Grid<T> {
        self.grid
    }

    /// Collapses a random cell to a random tile.
    pub fn seed(&mut self) -> Result<Position> {
        let size = self.grid.size();
        let x = self.rng.gen_range(0..size);
        let y = self.rng.gen_range(0..size);
        let value = self
            .rules
            .tiles()
            .choose(&mut self.rng)
            .ok_or_else(|| Error::invalid_configuration("rule set is empty"))?;

        debug!("Starting at ({}, {}) with {:?}", x, y, value);

        self.seed_at(x, y, value)?;

        Ok((x, y))
    }

    /// Collapses (x, y) to `value` as the starting point of the wave.
    pub fn seed_at(&mut self, x: usize, y: usize, value: T) -> Result<()> {
        let size = self.grid.size();

        if self.is_seeded() {
            return Err(Error::invalid_configuration("wave is already seeded"));
        }

        if x >= size || y >= size {
            return Err(Error::invalid_configuration(format!(
                "seed ({}, {}) outside {}x{} grid",
                x, y, size, size
            )));
        }

        if self.rules.allowed_neighbors(value).is_none() {
            return Err(Error::invalid_configuration(format!(
                "seed value {:?} has no rules",
                value
            )));
        }

        self.assign(x, y, value)
    }

    /// Collapses the next cell, seeding first if needed. Returns the position
    /// that was collapsed, or `None` once the grid is complete.
    ///
    /// Neighbours that are off the grid or already collapsed are skipped
    /// without drawing from the random stream.
    pub fn tick(&mut self) -> Result<Option<Position>> {
        if self.done() {
            return Ok(None);
        }

        if !self.is_seeded() {
            return self.seed().map(Some);
        }

        while let Some(frame) = self.stack.last_mut() {
            let Some(direction) = frame.advance() else {
                self.stack.pop();
                continue;
            };

            let (x, y, incoming) = (frame.x, frame.y, frame.value);

            // off-grid and already collapsed targets end this branch silently
            let Some((nx, ny)) = self.grid.neighbor_position(x, y, direction) else {
                continue;
            };

            if self.grid.get(nx as isize, ny as isize).is_some() {
                continue;
            }

            let neighbors = self.grid.neighbors(nx as isize, ny as isize);
            let value = select_value(self.rules, (nx, ny), incoming, &neighbors, &mut self.rng)?;

            self.assign(nx, ny, value)?;

            return Ok(Some((nx, ny)));
        }

        Ok(None)
    }

    /// Collapses every remaining cell, showing each step on `renderer`.
    pub fn run<D>(&mut self, renderer: &mut D) -> Result<()>
    where
        D: Renderer<T> + ?Sized,
    {
        while let Some((x, y)) = self.tick()? {
            renderer.update(&self.grid)?;
            renderer.handle_event(&RenderEvent::Collapsed { x, y })?;
        }

        renderer.handle_event(&RenderEvent::Completed)?;
        renderer.finalize(&self.grid)
    }

    fn assign(&mut self, x: usize, y: usize, value: T) -> Result<()> {
        self.grid.set(x as isize, y as isize, value)?;

        trace!("Collapsed ({}, {}) to {:?}", x, y, value);

        if self.grid.is_complete() {
            self.stack.clear();
        } else {
            self.stack.push(Frame::new(x, y, value));
        }

        Ok(())
    }
}

/// Fills a `config.size` square grid. Fails without returning a partial grid
/// when a cell has no valid tile.
pub fn generate<T, R>(config: &Config<T>, rng: R) -> Result<Grid<T>>
where
    T: TileType,
    R: Rng,
{
    let mut wave = Wave::new(config, rng)?;

    while wave.tick()?.is_some() {}

    debug!("Generated {0}x{0} grid", config.size);

    Ok(wave.into_grid())
}

/// Like [`generate`], reporting every step to `renderer`.
pub fn generate_with<T, R, D>(config: &Config<T>, rng: R, renderer: &mut D) -> Result<Grid<T>>
where
    T: TileType,
    R: Rng,
    D: Renderer<T> + ?Sized,
{
    generate_with_retries(config, 1, rng, renderer)
}

/// Like [`generate_with`], starting over on an empty grid after a
/// contradiction, up to `attempts` times in total. The random stream carries
/// on across attempts, so a seeded run stays reproducible.
pub fn generate_with_retries<T, R, D>(
    config: &Config<T>,
    attempts: usize,
    mut rng: R,
    renderer: &mut D,
) -> Result<Grid<T>>
where
    T: TileType,
    R: Rng,
    D: Renderer<T> + ?Sized,
{
    let attempts = attempts.max(1);
    let mut attempt = 1;

    loop {
        let mut wave = Wave::new(config, &mut rng)?;

        renderer.handle_event(&RenderEvent::Started { attempt })?;

        match wave.run(renderer) {
            Ok(()) => {
                debug!("Generated {0}x{0} grid in {1} attempt(s)", config.size, attempt);
                return Ok(wave.into_grid());
            }
            Err(err) => {
                renderer.handle_event(&RenderEvent::Aborted)?;

                if !err.is_retryable() || attempt >= attempts {
                    return Err(err);
                }

                warn!("Attempt {} failed: {}", attempt, err);
                attempt += 1;
            }
        }
    }
}
