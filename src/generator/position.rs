/*
position.rs

Copyright 2025 Hervé Quatremain

This file is part of Wordtrail.

Wordtrail is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordtrail is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordtrail. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Cells of the rectangular grid.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Orthogonal moves between cells. There are no diagonal moves.
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromRepr)]
#[repr(u8)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All the directions, clockwise from the top.
    pub fn all() -> impl Iterator<Item = Direction> {
        (0..4).filter_map(Direction::from_repr)
    }
}

/// Position of a cell in the grid.
///
/// The derived ordering compares the row first and then the column (row-major order), which is
/// the order used to canonicalize edges.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl Position {
    /// Create a [`Position`] object.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Build the position from its index in a grid with `cols` columns.
    pub fn from_index(index: usize, cols: usize) -> Self {
        Self {
            row: index / cols,
            col: index % cols,
        }
    }

    /// Index of the cell in a row-major grid with `cols` columns.
    ///
    /// The index is the key used to identify a cell everywhere else (letter order map, connected
    /// cells).
    pub fn index(&self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// Whether the two cells share a side.
    pub fn is_orthogonal_to(&self, other: &Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    /// Return the adjacent cell in the given direction, if it is inside the grid.
    pub fn step(&self, direction: Direction, cols: usize, rows: usize) -> Option<Position> {
        match direction {
            Direction::Up if self.row > 0 => Some(Position::new(self.row - 1, self.col)),
            Direction::Right if self.col + 1 < cols => Some(Position::new(self.row, self.col + 1)),
            Direction::Down if self.row + 1 < rows => Some(Position::new(self.row + 1, self.col)),
            Direction::Left if self.col > 0 => Some(Position::new(self.row, self.col - 1)),
            _ => None,
        }
    }

    /// Return the orthogonal neighbors of the cell that are inside the grid.
    pub fn neighbors(&self, cols: usize, rows: usize) -> Vec<Position> {
        Direction::all()
            .filter_map(|d| self.step(d, cols, rows))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_two_neighbors() {
        assert_eq!(Position::new(0, 0).neighbors(4, 3).len(), 2);
        assert_eq!(Position::new(2, 3).neighbors(4, 3).len(), 2);
    }

    #[test]
    fn inner_cell_has_four_neighbors() {
        let n = Position::new(1, 1).neighbors(3, 3);
        assert_eq!(
            n,
            vec![
                Position::new(0, 1),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(1, 0)
            ]
        );
    }

    #[test]
    fn index_round_trip() {
        let p = Position::new(2, 3);
        assert_eq!(p.index(5), 13);
        assert_eq!(Position::from_index(13, 5), p);
    }

    #[test]
    fn diagonal_is_not_orthogonal() {
        let p = Position::new(1, 1);
        assert!(p.is_orthogonal_to(&Position::new(1, 2)));
        assert!(!p.is_orthogonal_to(&Position::new(2, 2)));
        assert!(!p.is_orthogonal_to(&p));
    }

    #[test]
    fn row_major_ordering() {
        assert!(Position::new(0, 5) < Position::new(1, 0));
        assert!(Position::new(1, 0) < Position::new(1, 1));
    }
}
