/*
words.rs

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

//! Difficulty tables: words, grid sizes, and starting cells.
//!
//! Everything here is a pure function of the difficulty level (which starts at 1).

use super::position::Position;
use super::settings::GeneratorSettings;

/// Hand-picked words for the first levels, in order.
const CURATED_WORDS: [&str; 12] = [
    "CAT", "SUN", "MAP", "STAR", "FISH", "MOON", "CLOUD", "REMIX", "RIVER", "PLANET", "LETTER",
    "GARDEN",
];

/// Longer words used in rotation after the curated ones.
/// Some have repeated letters on purpose.
const WORD_POOL: [&str; 16] = [
    "BANANA",
    "PUZZLE",
    "JOURNEY",
    "MONSTER",
    "BALLOON",
    "KINGDOM",
    "COMPASS",
    "LANTERN",
    "HARMONY",
    "TEAPOT",
    "WHISPER",
    "BLOSSOM",
    "MIRROR",
    "VOLCANO",
    "PENGUIN",
    "SUMMIT",
];

/// Base grid size (columns, rows) by difficulty tier. Each entry applies from its difficulty
/// level up to the next entry.
const GRID_TIERS: [(u32, usize, usize); 7] = [
    (1, 3, 3),
    (3, 4, 4),
    (5, 4, 5),
    (7, 5, 6),
    (10, 6, 6),
    (15, 6, 7),
    (20, 7, 7),
];

/// Return the word for the difficulty level.
pub fn word_for(difficulty: u32) -> &'static str {
    let d: usize = difficulty.max(1) as usize;
    if d <= CURATED_WORDS.len() {
        CURATED_WORDS[d - 1]
    } else {
        WORD_POOL[(d - CURATED_WORDS.len() - 1) % WORD_POOL.len()]
    }
}

/// Return the base grid size (columns, rows) for the difficulty level.
pub fn base_grid(difficulty: u32) -> (usize, usize) {
    let mut size: (usize, usize) = (GRID_TIERS[0].1, GRID_TIERS[0].2);
    for (from, cols, rows) in GRID_TIERS {
        if difficulty >= from {
            size = (cols, rows);
        }
    }
    size
}

/// Grow the grid, one column or one row at a time (the smaller dimension first), until it has at
/// least `min_cells_per_letter` cells per letter of the word.
pub fn fit_grid(
    cols: usize,
    rows: usize,
    word_len: usize,
    settings: &GeneratorSettings,
) -> (usize, usize) {
    let (mut cols, mut rows) = (cols.max(1), rows.max(1));
    let min_cells: usize = settings.min_cells_per_letter.max(1) * word_len;
    while cols * rows < min_cells {
        if cols <= rows {
            cols += 1;
        } else {
            rows += 1;
        }
    }
    (cols, rows)
}

/// Return the cells that the path can start from.
///
/// Corners are always eligible. Middles of the sides and the center are added at higher
/// difficulty levels. The list has no duplicates.
pub fn start_candidates(
    cols: usize,
    rows: usize,
    difficulty: u32,
    settings: &GeneratorSettings,
) -> Vec<Position> {
    let (last_col, last_row) = (cols - 1, rows - 1);
    let mut candidates: Vec<Position> = vec![
        Position::new(0, 0),
        Position::new(0, last_col),
        Position::new(last_row, 0),
        Position::new(last_row, last_col),
    ];

    if difficulty >= settings.mid_edge_start_difficulty {
        candidates.extend([
            Position::new(0, cols / 2),
            Position::new(last_row, cols / 2),
            Position::new(rows / 2, 0),
            Position::new(rows / 2, last_col),
        ]);
    }
    if difficulty >= settings.center_start_difficulty {
        candidates.push(Position::new(rows / 2, cols / 2));
    }

    let mut unique: Vec<Position> = Vec::with_capacity(candidates.len());
    for p in candidates {
        if !unique.contains(&p) {
            unique.push(p);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_words_come_first() {
        assert_eq!(word_for(1), "CAT");
        assert_eq!(word_for(8), "REMIX");
        assert_eq!(word_for(12), "GARDEN");
        assert_eq!(word_for(13), WORD_POOL[0]);
    }

    #[test]
    fn pool_wraps_around() {
        let first_pool_level: u32 = CURATED_WORDS.len() as u32 + 1;
        assert_eq!(
            word_for(first_pool_level),
            word_for(first_pool_level + WORD_POOL.len() as u32)
        );
    }

    #[test]
    fn words_are_uppercase() {
        for w in CURATED_WORDS.iter().chain(WORD_POOL.iter()) {
            assert!(w.chars().all(|c| c.is_ascii_uppercase()), "{w}");
        }
    }

    #[test]
    fn grid_tiers() {
        assert_eq!(base_grid(1), (3, 3));
        assert_eq!(base_grid(7), (5, 6));
        assert_eq!(base_grid(9), (5, 6));
        assert_eq!(base_grid(500), (7, 7));
    }

    #[test]
    fn grid_grows_to_fit_the_word() {
        let settings = GeneratorSettings::default();
        // "CAT" needs 12 cells: 3x3 -> 4x3
        assert_eq!(fit_grid(3, 3, 3, &settings), (4, 3));
        // "PLANET" needs 24 cells: 4x5 -> 5x5
        assert_eq!(fit_grid(4, 5, 6, &settings), (5, 5));
        // Big enough already
        assert_eq!(fit_grid(5, 6, 5, &settings), (5, 6));
    }

    #[test]
    fn start_pool_grows_with_difficulty() {
        let settings = GeneratorSettings::default();
        assert_eq!(start_candidates(5, 6, 1, &settings).len(), 4);
        assert_eq!(start_candidates(5, 6, 5, &settings).len(), 8);
        assert_eq!(start_candidates(5, 6, 10, &settings).len(), 9);
        // On a 2x2 grid every candidate is a corner
        assert_eq!(start_candidates(2, 2, 10, &settings).len(), 4);
    }
}
