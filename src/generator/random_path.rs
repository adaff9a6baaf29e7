/*
random_path.rs

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

//! Generate a random Hamiltonian path.
//!
//! The path is built greedily with Warnsdorff's rule: from the current cell, the next cell is
//! the unvisited neighbor with the fewest unvisited neighbors of its own.
//! A small random noise breaks the ties, and sometimes the second best neighbor is followed
//! instead, so that the same grid gives different paths.
//!
//! There is no backtracking. When the walk reaches a dead end, the method returns an error and
//! the caller starts a new attempt.

use log::debug;
use std::cmp::Ordering;

use super::path;
use super::position::Position;
use super::rng::LevelRng;
use super::settings::GeneratorSettings;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum RandomPathError {
    /// The walk reached a cell with no unvisited neighbor before covering the grid.
    /// The value is the number of cells visited.
    DeadEnd(usize),

    /// The starting cell is outside the grid.
    InvalidStart,
}

/// [`RandomPath`] object.
pub struct RandomPath {
    /// Number of columns in the grid.
    pub cols: usize,

    /// Number of rows in the grid.
    pub rows: usize,

    /// Number of steps the last generation performed.
    pub iteration: usize,

    /// Probability of following the second best neighbor.
    second_choice_probability: f64,

    /// Upper bound of the tie-breaking noise.
    noise_amplitude: f64,
}

impl RandomPath {
    /// Create the object.
    pub fn new(cols: usize, rows: usize, settings: &GeneratorSettings) -> Self {
        Self {
            cols,
            rows,
            iteration: 0,
            second_choice_probability: settings.second_choice_probability,
            noise_amplitude: settings.noise_amplitude,
        }
    }

    /// Number of cells in the grid.
    pub fn num_cells(&self) -> usize {
        self.cols * self.rows
    }

    /// Generate and return a random path from the given cell.
    ///
    /// # Errors
    ///
    /// The method returns an error if the walk reaches a dead end. In that case, the method can
    /// be retried: the random generator has moved on and the next walk is different.
    pub fn generate(
        &mut self,
        start: Position,
        rng: &mut LevelRng,
    ) -> Result<path::Path, RandomPathError> {
        self.iteration = 0;
        if start.row >= self.rows || start.col >= self.cols {
            return Err(RandomPathError::InvalidStart);
        }

        let num_cells: usize = self.num_cells();
        let mut visited: Vec<bool> = vec![false; num_cells];
        let mut path: path::Path = path::Path::new(num_cells);
        let mut current: Position = start;

        visited[start.index(self.cols)] = true;
        path.push(start);

        while path.len() < num_cells {
            self.iteration += 1;

            // Score the unvisited neighbors by their number of unvisited neighbors
            let mut candidates: Vec<(Position, f64)> = current
                .neighbors(self.cols, self.rows)
                .into_iter()
                .filter(|p| !visited[p.index(self.cols)])
                .map(|p| {
                    let score: usize = self.accessibility(p, &visited);
                    (p, score as f64 + rng.next() * self.noise_amplitude)
                })
                .collect();

            if candidates.is_empty() {
                debug!(
                    "    Dead end at {current} after {} of {num_cells} cells",
                    path.len()
                );
                return Err(RandomPathError::DeadEnd(path.len()));
            }

            candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

            let choice: usize =
                if candidates.len() > 1 && rng.chance(self.second_choice_probability) {
                    1
                } else {
                    0
                };
            current = candidates[choice].0;
            visited[current.index(self.cols)] = true;
            path.push(current);
        }

        debug!(
            "Path of {} cells from {start} in {} steps",
            path.len(),
            self.iteration
        );
        Ok(path)
    }

    /// Number of unvisited neighbors of the given cell.
    fn accessibility(&self, cell: Position, visited: &[bool]) -> usize {
        cell.neighbors(self.cols, self.rows)
            .iter()
            .filter(|p| !visited[p.index(self.cols)])
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Try a few times, the way the level generator does.
    fn build(cols: usize, rows: usize, start: Position, seed: u32) -> Option<path::Path> {
        let settings = GeneratorSettings::default();
        let mut rng = LevelRng::new(Some(seed));
        let mut builder = RandomPath::new(cols, rows, &settings);
        (0..settings.max_attempts).find_map(|_| builder.generate(start, &mut rng).ok())
    }

    #[test]
    fn corner_start_on_small_grid() {
        let path = build(4, 4, Position::new(0, 0), 11).expect("no path found");
        assert!(path.is_hamiltonian(4, 4));
        assert_eq!(path.get_first(), Some(Position::new(0, 0)));
    }

    #[test]
    fn single_cell_grid() {
        let path = build(1, 1, Position::new(0, 0), 1).expect("no path found");
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn single_row_from_the_end() {
        let path = build(6, 1, Position::new(0, 5), 1).expect("no path found");
        assert!(path.is_hamiltonian(6, 1));
    }

    #[test]
    fn single_row_from_the_middle_is_a_dead_end() {
        let settings = GeneratorSettings::default();
        let mut rng = LevelRng::new(Some(5));
        let mut builder = RandomPath::new(5, 1, &settings);
        match builder.generate(Position::new(0, 2), &mut rng) {
            Err(RandomPathError::DeadEnd(n)) => assert!(n < 5),
            other => panic!("expected a dead end, got {other:?}"),
        }
    }

    #[test]
    fn start_outside_the_grid() {
        let settings = GeneratorSettings::default();
        let mut rng = LevelRng::new(Some(5));
        let mut builder = RandomPath::new(3, 3, &settings);
        assert_eq!(
            builder.generate(Position::new(3, 0), &mut rng),
            Err(RandomPathError::InvalidStart)
        );
    }

    #[test]
    fn same_seed_same_path() {
        let a = build(6, 6, Position::new(0, 0), 1234);
        let b = build(6, 6, Position::new(0, 0), 1234);
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn successful_walks_are_hamiltonian(
            cols in 1usize..8,
            rows in 1usize..8,
            seed in any::<u32>(),
        ) {
            let settings = GeneratorSettings::default();
            let mut rng = LevelRng::new(Some(seed));
            let mut builder = RandomPath::new(cols, rows, &settings);
            if let Ok(path) = builder.generate(Position::new(0, 0), &mut rng) {
                prop_assert!(path.is_hamiltonian(cols, rows));
            }
        }
    }
}
