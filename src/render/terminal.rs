use super::{RenderEvent, Renderer};
use crate::error::Result;
use crate::grid::{Glyph, Grid};
use crate::tile::Terrain;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor};
use crossterm::terminal::{Clear, ClearType};
use enum_map::{enum_map, EnumMap};
use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct TerminalConfig {
    /// Repaint after every collapsed cell
    pub animate: bool,
    /// Pause after each repaint while animating
    pub delay: Duration,
    /// Paint tiles on coloured backgrounds
    pub colored: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            animate: true,
            delay: Duration::from_millis(100),
            colored: true,
        }
    }
}

/// Paints terrain glyphs on coloured backgrounds, clearing the screen
/// between frames while animating.
pub struct TerminalRenderer<W: Write = Stdout> {
    out: W,
    palette: EnumMap<Terrain, Color>,
    config: TerminalConfig,
}

impl TerminalRenderer<Stdout> {
    pub fn stdout(config: TerminalConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, config: TerminalConfig) -> Self {
        Self {
            out,
            palette: enum_map! {
                Terrain::Mountain => Color::Grey,
                Terrain::Forest => Color::DarkGreen,
                Terrain::Plains => Color::Green,
                Terrain::Desert => Color::DarkYellow,
            },
            config,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&mut self, grid: &Grid<Terrain>) -> io::Result<()> {
        if self.config.animate {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        for row in grid.rows() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    queue!(self.out, Print(" | "))?;
                }

                match cell {
                    Some(terrain) if self.config.colored => queue!(
                        self.out,
                        SetBackgroundColor(self.palette[*terrain]),
                        Print(terrain.glyph()),
                        ResetColor
                    )?,
                    Some(terrain) => queue!(self.out, Print(terrain.glyph()))?,
                    None => queue!(self.out, Print(' '))?,
                }
            }

            queue!(self.out, Print('\n'))?;
        }

        self.out.flush()
    }
}

impl<W: Write> Renderer<Terrain> for TerminalRenderer<W> {
    fn handle_event(&mut self, event: &RenderEvent) -> Result<()> {
        if let RenderEvent::Started { .. } = event {
            if self.config.animate {
                queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
                self.out.flush()?;
            }
        }

        Ok(())
    }

    fn update(&mut self, grid: &Grid<Terrain>) -> Result<()> {
        if self.config.animate {
            self.paint(grid)?;
            thread::sleep(self.config.delay);
        }

        Ok(())
    }

    fn finalize(&mut self, grid: &Grid<Terrain>) -> Result<()> {
        if !self.config.animate {
            self.paint(grid)?;
        }

        Ok(())
    }
}
