/*
path.rs

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

//! Path in the grid.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::edges::EdgeSet;
use super::position::Position;

/// Path object.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Path {
    /// Path as an ordered list of cells.
    path: Vec<Position>,

    /// Stores the visited status of the cells.
    /// Instead of looking for the cell in the [`Path::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    #[serde(skip)]
    visited: HashSet<Position>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Path {
    /// Create a [`Path`] object.
    pub fn new(num_cells: usize) -> Self {
        Self {
            path: Vec::with_capacity(num_cells),
            visited: HashSet::with_capacity(num_cells),
        }
    }

    /// Create a [`Path`] object from a list of cells.
    pub fn from_cells(cells: &[Position]) -> Self {
        let mut path: Path = Path::new(cells.len());
        for p in cells {
            path.push(*p);
        }
        path
    }

    /// Build the boustrophedon ("snake") path: left to right on even rows, right to left on odd
    /// rows. That path is Hamiltonian for any rectangular grid.
    pub fn snake(cols: usize, rows: usize) -> Self {
        let mut path: Path = Path::new(cols * rows);
        for row in 0..rows {
            if row % 2 == 0 {
                for col in 0..cols {
                    path.push(Position::new(row, col));
                }
            } else {
                for col in (0..cols).rev() {
                    path.push(Position::new(row, col));
                }
            }
        }
        path
    }

    /// Add a cell to the path.
    pub fn push(&mut self, cell: Position) {
        self.path.push(cell);
        self.visited.insert(cell);
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path has no cells.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the cell is in the path or not.
    ///
    /// The lookup set is not serialized; after deserialization the method falls back to a scan.
    pub fn contains(&self, cell: Position) -> bool {
        if self.visited.len() == self.path.len() {
            self.visited.contains(&cell)
        } else {
            self.path.contains(&cell)
        }
    }

    /// Return a reference to the cells.
    pub fn get(&self) -> &[Position] {
        &self.path
    }

    /// Return the position of the given cell in the path.
    pub fn cell_index(&self, cell: Position) -> Option<usize> {
        self.path.iter().position(|p| *p == cell)
    }

    /// Return the first cell in the path.
    pub fn get_first(&self) -> Option<Position> {
        self.path.first().copied()
    }

    /// Return the last cell in the path.
    pub fn get_last(&self) -> Option<Position> {
        self.path.last().copied()
    }

    /// Return the set of the edges that the path uses.
    pub fn edges(&self) -> EdgeSet {
        EdgeSet::from_cells(&self.path)
    }

    /// Whether the path visits every cell of the grid exactly once, moving only between
    /// orthogonally adjacent cells.
    pub fn is_hamiltonian(&self, cols: usize, rows: usize) -> bool {
        if self.path.len() != cols * rows {
            return false;
        }
        let mut seen: Vec<bool> = vec![false; cols * rows];
        for p in &self.path {
            if p.row >= rows || p.col >= cols {
                return false;
            }
            let i: usize = p.index(cols);
            if seen[i] {
                return false;
            }
            seen[i] = true;
        }
        self.path.windows(2).all(|w| w[0].is_orthogonal_to(&w[1]))
    }
}
