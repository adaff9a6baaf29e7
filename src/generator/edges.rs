/*
edges.rs

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

//! Edges between adjacent cells of the grid.

use log::debug;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::collections::HashSet;
use std::fmt;

use super::position::Position;

/// Orientation of an edge.
///
/// - a `Horizontal` edge joins two cells of the same row (left and right cells).
/// - a `Vertical` edge joins two cells of the same column (top and bottom cells).
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Unordered pair of orthogonally adjacent cells.
///
/// The two cells are stored in row-major order so that `(A,B)` and `(B,A)` give the same
/// object. Set membership tests (path edges, blocked edges) rely on that.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    a: Position,
    b: Position,
}

/// Deserialize an [`Edge`] object through [`Edge::new`], so that loaded edges are canonical.
impl<'de> Deserialize<'de> for Edge {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Cells {
            a: Position,
            b: Position,
        }

        let cells: Cells = Cells::deserialize(deserializer)?;
        Edge::new(cells.a, cells.b).ok_or_else(|| {
            de::Error::custom(format!(
                "cells {} and {} are not adjacent",
                cells.a, cells.b
            ))
        })
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

impl Edge {
    /// Create the canonical edge between two cells.
    ///
    /// Return None if the cells are not orthogonally adjacent.
    pub fn new(p1: Position, p2: Position) -> Option<Self> {
        if !p1.is_orthogonal_to(&p2) {
            return None;
        }
        if p1 <= p2 {
            Some(Self { a: p1, b: p2 })
        } else {
            Some(Self { a: p2, b: p1 })
        }
    }

    /// Return the two cells of the edge, in row-major order.
    pub fn cells(&self) -> (Position, Position) {
        (self.a, self.b)
    }

    /// Whether the given cell is one of the two cells of the edge.
    pub fn touches(&self, p: Position) -> bool {
        self.a == p || self.b == p
    }

    /// Return the cell that the two edges have in common, if any.
    pub fn shared_cell(&self, other: &Edge) -> Option<Position> {
        if self == other {
            return None;
        }
        if other.touches(self.a) {
            Some(self.a)
        } else if other.touches(self.b) {
            Some(self.b)
        } else {
            None
        }
    }

    /// Orientation of the edge.
    pub fn orientation(&self) -> Orientation {
        if self.a.row == self.b.row {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Canonical string key of the edge, for logs and diagnostics.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

/// Set of canonical edges.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EdgeSet {
    edges: HashSet<Edge>,
}

impl FromIterator<Edge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

impl EdgeSet {
    /// Create an empty [`EdgeSet`] object.
    pub fn new() -> Self {
        Self {
            edges: HashSet::new(),
        }
    }

    /// Build the set of the edges between consecutive cells of the given sequence.
    pub fn from_cells(cells: &[Position]) -> Self {
        cells
            .windows(2)
            .filter_map(|w| Edge::new(w[0], w[1]))
            .collect()
    }

    /// Add an edge. Return whether the edge was not already in the set.
    pub fn insert(&mut self, edge: Edge) -> bool {
        self.edges.insert(edge)
    }

    /// Whether the edge is in the set.
    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Whether the edge between the two cells is in the set.
    pub fn contains_pair(&self, p1: Position, p2: Position) -> bool {
        match Edge::new(p1, p2) {
            Some(e) => self.edges.contains(&e),
            None => false,
        }
    }

    /// Number of edges in the set.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate over the edges, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Print the edges, sorted.
    pub fn debug(&self) {
        debug!("{} edges: {self}", self.len());
    }
}

/// List the edges in row-major order, separated by spaces.
impl fmt::Display for EdgeSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut v: Vec<&Edge> = self.edges.iter().collect();
        v.sort();
        let s: Vec<String> = v.iter().map(|e| e.key()).collect();
        write!(f, "{}", s.join(" "))
    }
}

/// Return all the edges of a grid, horizontal edges first, then vertical edges, each in
/// row-major order.
pub fn grid_edges(cols: usize, rows: usize) -> Vec<Edge> {
    let capacity: usize = rows * cols.saturating_sub(1) + cols * rows.saturating_sub(1);
    let mut edges: Vec<Edge> = Vec::with_capacity(capacity);

    for row in 0..rows {
        for col in 0..cols.saturating_sub(1) {
            edges.push(Edge {
                a: Position::new(row, col),
                b: Position::new(row, col + 1),
            });
        }
    }
    for row in 0..rows.saturating_sub(1) {
        for col in 0..cols {
            edges.push(Edge {
                a: Position::new(row, col),
                b: Position::new(row + 1, col),
            });
        }
    }
    edges
}
