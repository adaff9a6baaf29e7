/*
settings.rs

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

//! Tunable generator constants.
//!
//! The default values give the standard game. Developers can override some of them with a JSON
//! file (see the `--settings` command-line option). Missing fields keep their default value:
//!
//! ```json
//! { "max_attempts": 20, "second_choice_probability": 0.3 }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Generator settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Number of random path attempts before using the snake path.
    pub max_attempts: usize,

    /// Probability of following the second best neighbor instead of the best one.
    pub second_choice_probability: f64,

    /// Upper bound of the random noise added to the neighbor accessibility score.
    pub noise_amplitude: f64,

    /// The grid is grown until it has at least this number of cells per letter.
    pub min_cells_per_letter: usize,

    /// First difficulty level with walls.
    pub wall_min_difficulty: u32,

    /// Probability that a wall has two segments (otherwise three).
    pub two_segment_probability: f64,

    /// First difficulty level where the path can start from the middle of a grid side.
    pub mid_edge_start_difficulty: u32,

    /// First difficulty level where the path can start from the center of the grid.
    pub center_start_difficulty: u32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            max_attempts: 100,
            second_choice_probability: 0.15,
            noise_amplitude: 0.5,
            min_cells_per_letter: 4,
            wall_min_difficulty: 7,
            two_segment_probability: 0.6,
            mid_edge_start_difficulty: 5,
            center_start_difficulty: 10,
        }
    }
}

impl GeneratorSettings {
    /// Load the settings from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        debug!("Loading generator settings from {path:?}");
        let file: File = File::open(path)?;
        let reader: BufReader<File> = BufReader::new(file);
        let settings: GeneratorSettings = serde_json::from_reader(reader)?;
        Ok(settings)
    }
}
