/*
walls.rs

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

//! Generate walls.
//!
//! A wall blocks the move between two adjacent cells. Walls are chains of two or three
//! segments, straight or bent, placed only on the edges that the solution path does not use.
//! Therefore walls never make the puzzle unsolvable.

use log::{Level, debug, log_enabled};
use serde::{Deserialize, Serialize};

use super::edges::{self, Edge, EdgeSet, Orientation};
use super::path;
use super::position::Position;
use super::rng::LevelRng;
use super::settings::GeneratorSettings;

/// Difficulty levels between two additional walls.
const WALL_STEP: u32 = 4;

/// Maximum number of walls in a level.
const MAX_WALLS: usize = 5;

/// Segment of a wall. It blocks one edge.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct WallSegment {
    /// Blocked edge.
    pub edge: Edge,

    /// Orientation of the blocked edge.
    pub orientation: Orientation,
}

impl WallSegment {
    /// Create a [`WallSegment`] object.
    pub fn new(edge: Edge) -> Self {
        Self {
            edge,
            orientation: edge.orientation(),
        }
    }
}

/// Chain of connected segments.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Wall {
    pub segments: Vec<WallSegment>,
}

impl Wall {
    /// Return the blocked edges.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.segments.iter().map(|s| s.edge)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the wall has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Return the number of walls for the difficulty level.
pub fn wall_count(difficulty: u32, settings: &GeneratorSettings) -> usize {
    if difficulty < settings.wall_min_difficulty {
        return 0;
    }
    let steps: usize = ((difficulty - settings.wall_min_difficulty) / WALL_STEP) as usize;
    (1 + steps).min(MAX_WALLS)
}

/// Return the set of the edges blocked by the given walls.
pub fn blocked_edges(walls: &[Wall]) -> EdgeSet {
    walls.iter().flat_map(|w| w.edges()).collect()
}

/// [`WallBuilder`] object.
pub struct WallBuilder<'a> {
    /// Number of columns in the grid.
    cols: usize,

    /// Number of rows in the grid.
    rows: usize,

    /// Solution path.
    path: &'a path::Path,

    /// Probability that a wall has two segments.
    two_segment_probability: f64,
}

impl<'a> WallBuilder<'a> {
    /// Create the object.
    pub fn new(
        cols: usize,
        rows: usize,
        path: &'a path::Path,
        settings: &GeneratorSettings,
    ) -> Self {
        Self {
            cols,
            rows,
            path,
            two_segment_probability: settings.two_segment_probability,
        }
    }

    /// Generate and return the walls. The method returns fewer walls than requested when the
    /// grid does not have enough room.
    pub fn generate(&self, num_walls: usize, rng: &mut LevelRng) -> Vec<Wall> {
        let mut walls: Vec<Wall> = Vec::with_capacity(num_walls);
        if num_walls == 0 {
            return walls;
        }

        let path_edges: EdgeSet = self.path.edges();
        let mut available: Vec<Edge> = edges::grid_edges(self.cols, self.rows)
            .into_iter()
            .filter(|e| !path_edges.contains(e))
            .collect();
        rng.shuffle(&mut available);

        // Edges of the path and of the accepted walls
        let mut claimed: EdgeSet = path_edges;

        for edge in available {
            if walls.len() >= num_walls {
                break;
            }
            if claimed.contains(&edge) {
                continue;
            }

            let target_len: usize = if rng.chance(self.two_segment_probability) {
                2
            } else {
                3
            };
            let segments: Vec<Edge> = self.grow(edge, target_len, &claimed, rng);

            // A single segment is not a wall
            if segments.len() < 2 {
                continue;
            }
            for e in &segments {
                claimed.insert(*e);
            }
            walls.push(Wall {
                segments: segments.into_iter().map(WallSegment::new).collect(),
            });
        }
        debug!("{} walls out of {num_walls} requested", walls.len());
        if log_enabled!(Level::Debug) {
            claimed.debug();
        }
        walls
    }

    /// Grow a chain of segments from the given edge.
    fn grow(
        &self,
        edge: Edge,
        target_len: usize,
        claimed: &EdgeSet,
        rng: &mut LevelRng,
    ) -> Vec<Edge> {
        let mut segments: Vec<Edge> = vec![edge];

        while segments.len() < target_len {
            let tip: Edge = segments[segments.len() - 1];
            let (a, b) = tip.cells();

            // Extend from the free end(s) of the chain, so the chain never forks
            let ends: Vec<Position> = match segments.len() {
                1 => vec![a, b],
                n => match tip.shared_cell(&segments[n - 2]) {
                    Some(shared) if shared == a => vec![b],
                    _ => vec![a],
                },
            };

            let candidates: Vec<Edge> = ends
                .iter()
                .flat_map(|cell| {
                    cell.neighbors(self.cols, self.rows)
                        .into_iter()
                        .filter_map(move |n| Edge::new(*cell, n))
                })
                .filter(|e| !claimed.contains(e) && !segments.contains(e))
                .collect();

            match rng.pick(&candidates) {
                Some(e) => segments.push(*e),
                None => break,
            }
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn check_walls(walls: &[Wall], path: &path::Path) {
        let path_edges = path.edges();
        let mut seen = EdgeSet::new();
        for wall in walls {
            assert!(wall.len() == 2 || wall.len() == 3, "wall of {}", wall.len());
            for pair in wall.segments.windows(2) {
                assert!(pair[0].edge.shared_cell(&pair[1].edge).is_some());
            }
            for seg in &wall.segments {
                assert!(!path_edges.contains(&seg.edge), "wall on path edge {}", seg.edge);
                assert!(seen.insert(seg.edge), "overlapping walls on {}", seg.edge);
                assert_eq!(seg.orientation, seg.edge.orientation());
            }
        }
    }

    #[test]
    fn count_is_a_step_function() {
        let settings = GeneratorSettings::default();
        assert_eq!(wall_count(1, &settings), 0);
        assert_eq!(wall_count(6, &settings), 0);
        assert_eq!(wall_count(7, &settings), 1);
        assert_eq!(wall_count(11, &settings), 2);
        assert_eq!(wall_count(1000, &settings), MAX_WALLS);
        let mut previous = 0;
        for d in 1..100 {
            let c = wall_count(d, &settings);
            assert!(c >= previous);
            previous = c;
        }
    }

    #[test]
    fn walls_on_snake_path() {
        let settings = GeneratorSettings::default();
        let path = path::Path::snake(5, 6);
        let mut rng = LevelRng::new(Some(77));
        let walls = WallBuilder::new(5, 6, &path, &settings).generate(3, &mut rng);
        assert!(!walls.is_empty());
        assert!(walls.len() <= 3);
        check_walls(&walls, &path);
    }

    #[test]
    fn no_room_for_walls() {
        // The snake path on a single row uses every edge
        let settings = GeneratorSettings::default();
        let path = path::Path::snake(6, 1);
        let mut rng = LevelRng::new(Some(1));
        let walls = WallBuilder::new(6, 1, &path, &settings).generate(4, &mut rng);
        assert!(walls.is_empty());
    }

    #[test]
    fn blocked_edge_set() {
        let settings = GeneratorSettings::default();
        let path = path::Path::snake(6, 6);
        let mut rng = LevelRng::new(Some(8));
        let walls = WallBuilder::new(6, 6, &path, &settings).generate(4, &mut rng);
        let blocked = blocked_edges(&walls);
        let total: usize = walls.iter().map(|w| w.len()).sum();
        assert_eq!(blocked.len(), total);
    }

    proptest! {
        #[test]
        fn walls_never_touch_the_path(
            cols in 2usize..8,
            rows in 2usize..8,
            num_walls in 0usize..6,
            seed in any::<u32>(),
        ) {
            let settings = GeneratorSettings::default();
            let path = path::Path::snake(cols, rows);
            let mut rng = LevelRng::new(Some(seed));
            let walls = WallBuilder::new(cols, rows, &path, &settings).generate(num_walls, &mut rng);
            prop_assert!(walls.len() <= num_walls);
            check_walls(&walls, &path);
        }
    }
}
