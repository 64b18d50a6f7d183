use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

pub type Position = (usize, usize);

/// Orthogonal directions, declared in visiting order.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors<T> {
    pub north: T,
    pub east: T,
    pub south: T,
    pub west: T,
}

impl<T> Neighbors<T> {
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &T)> + '_ {
        Direction::ALL.into_iter().map(move |d| (d, &self[d]))
    }
}

impl<T> Neighbors<Option<T>> {
    pub fn count(&self) -> usize {
        self.iter().filter(|(_, v)| v.is_some()).count()
    }

    pub fn present(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter().filter_map(|(_, v)| v.as_ref())
    }
}

impl<T> Index<Direction> for Neighbors<T> {
    type Output = T;

    fn index(&self, direction: Direction) -> &T {
        match direction {
            Direction::North => &self.north,
            Direction::East => &self.east,
            Direction::South => &self.south,
            Direction::West => &self.west,
        }
    }
}

impl<T> IndexMut<Direction> for Neighbors<T> {
    fn index_mut(&mut self, direction: Direction) -> &mut T {
        match direction {
            Direction::North => &mut self.north,
            Direction::East => &mut self.east,
            Direction::South => &mut self.south,
            Direction::West => &mut self.west,
        }
    }
}

/// Square grid of write-once cells.
///
/// Reads take signed coordinates and treat anything outside the grid as an
/// unset cell, so edges need no special casing by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Vec<Option<T>>,
    size: usize,
    remaining: usize,
}

pub struct GridIter<'a, T> {
    grid: &'a Grid<T>,
    pos: usize,
}

impl<T: Copy> Grid<T> {
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![None; size * size],
            size,
            remaining: size * size,
        }
    }

    /// Cells per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells still unset.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    pub fn contains(&self, x: isize, y: isize) -> bool {
        self.index(x, y).is_some()
    }

    pub fn get(&self, x: isize, y: isize) -> Option<T> {
        self.index(x, y).and_then(|index| self.data[index])
    }

    /// Stores `value` at (x, y). Never overwrites: a collapsed cell keeps its
    /// value and the call fails with [`Error::AlreadySet`].
    pub fn set(&mut self, x: isize, y: isize, value: T) -> Result<()> {
        let index = self.index(x, y).ok_or(Error::OutOfBounds { x, y })?;
        let cell = &mut self.data[index];

        if cell.is_some() {
            return Err(Error::AlreadySet {
                x: x as usize,
                y: y as usize,
            });
        }

        *cell = Some(value);
        self.remaining -= 1;

        Ok(())
    }

    pub fn neighbor_position(&self, x: usize, y: usize, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.offset();
        let (nx, ny) = (x as isize + dx, y as isize + dy);

        self.contains(nx, ny).then_some((nx as usize, ny as usize))
    }

    /// Readings of the four orthogonal neighbours of (x, y).
    pub fn neighbors(&self, x: isize, y: isize) -> Neighbors<Option<T>> {
        let mut output = Neighbors::default();

        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();
            output[direction] = self.get(x + dx, y + dy);
        }

        output
    }

    pub fn iter(&self) -> GridIter<'_, T> {
        GridIter { grid: self, pos: 0 }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<T>]> + '_ {
        // `max(1)` keeps `chunks` happy for the degenerate empty grid
        self.data.chunks(self.size.max(1))
    }

    fn index(&self, x: isize, y: isize) -> Option<usize> {
        let size = self.size as isize;

        if x < 0 || y < 0 || x >= size || y >= size {
            None
        } else {
            Some(x as usize + y as usize * self.size)
        }
    }
}

impl<'a, T: Copy> IntoIterator for &'a Grid<T> {
    type Item = (usize, usize, Option<T>);
    type IntoIter = GridIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Copy> Iterator for GridIter<'a, T> {
    type Item = (usize, usize, Option<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let value = *self.grid.data.get(self.pos)?;
        let x = self.pos % self.grid.size;
        let y = self.pos / self.grid.size;

        self.pos += 1;

        Some((x, y, value))
    }
}

/// Anything with a one-character representation can be printed as a grid.
pub trait Glyph {
    fn glyph(&self) -> char;
}

impl<T: Glyph + Copy> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line = row
                .iter()
                .map(|cell| cell.map_or(' ', |t| t.glyph()).to_string())
                .collect::<Vec<_>>()
                .join(" | ");

            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_out_of_bounds_reads_as_unset() {
        let mut grid = Grid::new(3);
        grid.set(0, 0, 7u8).unwrap();

        assert_eq!(grid.get(0, 0), Some(7));
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.get(isize::MIN, isize::MAX), None);
    }

    #[test]
    fn test_set_is_write_once() {
        let mut grid = Grid::new(2);

        grid.set(1, 1, 'a').unwrap();
        let err = grid.set(1, 1, 'b').unwrap_err();

        assert!(matches!(err, Error::AlreadySet { x: 1, y: 1 }));
        assert_eq!(grid.get(1, 1), Some('a'));
        assert_eq!(grid.remaining(), 3);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid: Grid<u8> = Grid::new(2);

        assert!(matches!(
            grid.set(2, 0, 1),
            Err(Error::OutOfBounds { x: 2, y: 0 })
        ));
        assert_eq!(grid.remaining(), 4);
    }

    #[test]
    fn test_is_complete() {
        let mut grid = Grid::new(2);
        assert!(!grid.is_complete());

        for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            grid.set(x, y, 0u8).unwrap();
        }

        assert!(grid.is_complete());
    }

    #[test]
    fn test_neighbors_order_and_edges() {
        let mut grid = Grid::new(3);
        for x in 0..3 {
            for y in 0..3 {
                grid.set(x, y, (x * 10 + y) as u8).unwrap();
            }
        }

        let corner = grid.neighbors(0, 0);
        assert_eq!(corner.north, None);
        assert_eq!(corner.west, None);
        assert_eq!(corner.east, Some(10));
        assert_eq!(corner.south, Some(1));
        assert_eq!(corner.count(), 2);

        let center = grid.neighbors(1, 1);
        let order: Vec<_> = center.iter().map(|(d, v)| (d, *v)).collect();
        assert_eq!(
            order,
            vec![
                (Direction::North, Some(10)),
                (Direction::East, Some(21)),
                (Direction::South, Some(12)),
                (Direction::West, Some(1)),
            ]
        );
    }

    #[test]
    fn test_neighbor_position() {
        let grid: Grid<u8> = Grid::new(2);

        assert_eq!(grid.neighbor_position(0, 0, Direction::North), None);
        assert_eq!(grid.neighbor_position(0, 0, Direction::East), Some((1, 0)));
        assert_eq!(grid.neighbor_position(1, 1, Direction::South), None);
        assert_eq!(grid.neighbor_position(1, 1, Direction::West), Some((0, 1)));
    }
}
