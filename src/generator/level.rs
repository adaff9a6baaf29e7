/*
level.rs

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

//! Generate levels.
//!
//! [`LevelGenerator::generate`] always returns a playable [`LevelConfig`]. Random path attempts
//! can fail; after [`GeneratorSettings::max_attempts`] failures, the snake path is used instead.

use log::{debug, info};
use serde::{Deserialize, Deserializer, Serialize, de};
use std::collections::BTreeMap;
use std::fmt;

use super::edges::EdgeSet;
use super::letters;
use super::path;
use super::position::Position;
use super::random_path::RandomPath;
use super::rng::LevelRng;
use super::settings::GeneratorSettings;
use super::walls::{self, Wall, WallBuilder};
use super::words;

/// Marker of the cells without a letter.
pub const EMPTY_CELL: char = '.';

/// Level description, as produced by the generator.
///
/// A deserialized level goes through [`LevelConfig::validate`], so a loaded level is always
/// playable.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LevelConfig {
    /// Word to spell, in uppercase.
    pub word: String,

    /// Grid rows. Each cell is [`EMPTY_CELL`] or a letter.
    pub grid: Vec<Vec<char>>,

    /// Cell where the path starts.
    pub start_position: Position,

    /// Difficulty level (starting at 1).
    pub difficulty: u32,

    /// Number of columns.
    pub grid_cols: usize,

    /// Number of rows.
    pub grid_rows: usize,

    /// Order of the letter (starting at 1) in the word, indexed by the cell index (see
    /// [`Position::index`]).
    ///
    /// Because a word can have the same letter several times, the play-time logic uses this
    /// order, and not the letter in the grid, to check the move order.
    pub letter_order_by_position: BTreeMap<usize, usize>,

    /// Walls.
    pub walls: Vec<Wall>,

    /// A solution of the level.
    pub solution: path::Path,
}

impl LevelConfig {
    /// Number of cells in the grid.
    pub fn num_cells(&self) -> usize {
        self.grid_cols * self.grid_rows
    }

    /// Number of letters in the word.
    pub fn word_len(&self) -> usize {
        self.word.chars().count()
    }

    /// Return the letter in the given cell, or None for an empty cell.
    pub fn letter_at(&self, p: Position) -> Option<char> {
        match self.grid.get(p.row).and_then(|r| r.get(p.col)) {
            Some(c) if *c != EMPTY_CELL => Some(*c),
            _ => None,
        }
    }

    /// Return the order of the letter in the given cell, or None for an empty cell.
    pub fn letter_order_at(&self, p: Position) -> Option<usize> {
        self.letter_order_by_position
            .get(&p.index(self.grid_cols))
            .copied()
    }

    /// Whether the cell is inside the grid.
    pub fn contains(&self, p: Position) -> bool {
        p.row < self.grid_rows && p.col < self.grid_cols
    }

    /// Check that the level is consistent: grid dimensions, letters, walls, and solution.
    ///
    /// # Errors
    ///
    /// The method returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        let (cols, rows) = (self.grid_cols, self.grid_rows);
        if cols == 0 || rows == 0 {
            return Err(format!("Empty {cols}x{rows} grid"));
        }
        if self.grid.len() != rows || self.grid.iter().any(|r| r.len() != cols) {
            return Err(format!("The grid rows do not match the {cols}x{rows} size"));
        }
        if !self.contains(self.start_position) {
            return Err(format!("Starting cell {} outside the grid", self.start_position));
        }

        // Letters
        let word: Vec<char> = self.word.chars().collect();
        if word.is_empty() {
            return Err("Empty word".to_string());
        }
        if self.letter_order_by_position.len() != word.len() {
            return Err(format!(
                "{} letter positions for the {} letters of {}",
                self.letter_order_by_position.len(),
                word.len(),
                self.word
            ));
        }
        let mut seen: Vec<bool> = vec![false; word.len()];
        for (index, order) in &self.letter_order_by_position {
            if *index >= self.num_cells() {
                return Err(format!("Letter position {index} outside the grid"));
            }
            if *order == 0 || *order > word.len() || seen[*order - 1] {
                return Err(format!("Invalid or duplicated letter order {order}"));
            }
            seen[*order - 1] = true;
            let p: Position = Position::from_index(*index, cols);
            if self.letter_at(p) != Some(word[*order - 1]) {
                return Err(format!("Cell {p} does not hold letter {order} of {}", self.word));
            }
        }
        let letters: usize = self.grid.iter().flatten().filter(|c| **c != EMPTY_CELL).count();
        if letters != word.len() {
            return Err(format!("{letters} letters in the grid for {}", self.word));
        }

        // Walls
        for segment in self.walls.iter().flat_map(|w| w.segments.iter()) {
            let (a, b) = segment.edge.cells();
            if !self.contains(a) || !self.contains(b) {
                return Err(format!("Wall {} outside the grid", segment.edge));
            }
            if segment.orientation != segment.edge.orientation() {
                return Err(format!("Wrong orientation for wall {}", segment.edge));
            }
        }

        // Solution
        if !self.solution.is_hamiltonian(cols, rows)
            || self.solution.get_first() != Some(self.start_position)
        {
            return Err("The solution does not cover the grid from the starting cell".to_string());
        }
        Ok(())
    }
}

/// Deserialize a [`LevelConfig`] object and reject the inconsistent ones.
impl<'de> Deserialize<'de> for LevelConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Fields {
            word: String,
            grid: Vec<Vec<char>>,
            start_position: Position,
            difficulty: u32,
            grid_cols: usize,
            grid_rows: usize,
            letter_order_by_position: BTreeMap<usize, usize>,
            walls: Vec<Wall>,
            solution: path::Path,
        }

        let f: Fields = Fields::deserialize(deserializer)?;
        let level: LevelConfig = LevelConfig {
            word: f.word,
            grid: f.grid,
            start_position: f.start_position,
            difficulty: f.difficulty,
            grid_cols: f.grid_cols,
            grid_rows: f.grid_rows,
            letter_order_by_position: f.letter_order_by_position,
            walls: f.walls,
            solution: f.solution,
        };
        level
            .validate()
            .map_err(<D::Error as de::Error>::custom)?;
        Ok(level)
    }
}

/// Draw the grid. Walls are drawn with `|` and `-`, and the starting cell with `*`.
impl fmt::Display for LevelConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let blocked: EdgeSet = walls::blocked_edges(&self.walls);

        for row in 0..self.grid_rows {
            let mut line: String = String::with_capacity(self.grid_cols * 2);
            for col in 0..self.grid_cols {
                let p: Position = Position::new(row, col);
                if p == self.start_position {
                    line.push('*');
                } else {
                    line.push(self.grid[row][col]);
                }
                if col + 1 < self.grid_cols {
                    if blocked.contains_pair(p, Position::new(row, col + 1)) {
                        line.push('|');
                    } else {
                        line.push(' ');
                    }
                }
            }
            writeln!(f, "{}", line.trim_end())?;

            if row + 1 < self.grid_rows {
                let mut line: String = String::with_capacity(self.grid_cols * 2);
                for col in 0..self.grid_cols {
                    if blocked.contains_pair(Position::new(row, col), Position::new(row + 1, col))
                    {
                        line.push('-');
                    } else {
                        line.push(' ');
                    }
                    line.push(' ');
                }
                writeln!(f, "{}", line.trim_end())?;
            }
        }
        Ok(())
    }
}

/// [`LevelGenerator`] object.
pub struct LevelGenerator {
    /// Random generator shared by all the steps.
    rng: LevelRng,

    /// Tunable constants.
    settings: GeneratorSettings,

    /// Number of path attempts for the last generated level.
    pub attempts: usize,

    /// Whether the last generated level uses the snake path.
    pub used_fallback: bool,
}

impl LevelGenerator {
    /// Create the object. With a seed, the generated levels are reproducible.
    pub fn new(seed: Option<u32>) -> Self {
        Self::with_settings(seed, GeneratorSettings::default())
    }

    /// Create the object with custom settings.
    pub fn with_settings(seed: Option<u32>, settings: GeneratorSettings) -> Self {
        Self {
            rng: LevelRng::new(seed),
            settings,
            attempts: 0,
            used_fallback: false,
        }
    }

    /// Generate the level for the given difficulty (values below 1 are treated as 1).
    pub fn generate(&mut self, difficulty: u32) -> LevelConfig {
        let difficulty: u32 = difficulty.max(1);
        let word: &str = words::word_for(difficulty);
        let (cols, rows) = words::base_grid(difficulty);
        let (cols, rows) = words::fit_grid(cols, rows, word.chars().count(), &self.settings);

        debug!("Level {difficulty}: word {word} on a {cols}x{rows} grid");
        self.generate_level_with_word(word, cols, rows, difficulty)
    }

    /// Generate a level for the given word and grid size.
    ///
    /// # Panics
    ///
    /// The method panics if the word is empty or if the grid is too small for the word.
    pub(crate) fn generate_level_with_word(
        &mut self,
        word: &str,
        cols: usize,
        rows: usize,
        difficulty: u32,
    ) -> LevelConfig {
        let word: String = word.to_uppercase();
        assert!(!word.is_empty(), "Cannot generate a level without a word");
        assert!(
            cols * rows > word.chars().count(),
            "Grid {cols}x{rows} too small for {word}"
        );

        self.attempts = 0;
        self.used_fallback = false;

        let candidates: Vec<Position> =
            words::start_candidates(cols, rows, difficulty, &self.settings);
        let mut builder: RandomPath = RandomPath::new(cols, rows, &self.settings);

        for attempt in 1..=self.settings.max_attempts {
            self.attempts = attempt;
            let start: Position = match self.rng.pick(&candidates) {
                Some(p) => *p,
                None => Position::default(),
            };
            match builder.generate(start, &mut self.rng) {
                Ok(path) => {
                    debug!("Path found from {start} at attempt {attempt}");
                    return self.assemble(&word, cols, rows, difficulty, path);
                }
                Err(e) => debug!("Attempt {attempt} from {start} failed: {e:?}"),
            }
        }

        info!(
            "No random path after {} attempts for a {cols}x{rows} grid: using the snake path",
            self.settings.max_attempts
        );
        self.used_fallback = true;
        self.assemble(&word, cols, rows, difficulty, path::Path::snake(cols, rows))
    }

    /// Place the letters and the walls on the given path, and build the level.
    fn assemble(
        &mut self,
        word: &str,
        cols: usize,
        rows: usize,
        difficulty: u32,
        path: path::Path,
    ) -> LevelConfig {
        let letters: Vec<char> = word.chars().collect();
        let indexes: Vec<usize> = letters::place(path.len(), letters.len(), &mut self.rng);

        let mut grid: Vec<Vec<char>> = vec![vec![EMPTY_CELL; cols]; rows];
        let mut letter_order_by_position: BTreeMap<usize, usize> = BTreeMap::new();
        for (order, (letter, index)) in letters.iter().zip(indexes.iter()).enumerate() {
            let p: Position = path.get()[*index];
            grid[p.row][p.col] = *letter;
            letter_order_by_position.insert(p.index(cols), order + 1);
        }

        let num_walls: usize = walls::wall_count(difficulty, &self.settings);
        let walls: Vec<Wall> =
            WallBuilder::new(cols, rows, &path, &self.settings).generate(num_walls, &mut self.rng);

        let start_position: Position = path.get_first().unwrap_or_default();
        LevelConfig {
            word: word.to_string(),
            grid,
            start_position,
            difficulty,
            grid_cols: cols,
            grid_rows: rows,
            letter_order_by_position,
            walls,
            solution: path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use crate::generator::edges::Edge;
    use crate::generator::walls::WallSegment;
    use proptest::prelude::*;

    /// Check all the generator guarantees on a level.
    fn check_level(level: &LevelConfig) {
        let cols = level.grid_cols;
        let path = &level.solution;
        assert!(path.is_hamiltonian(cols, level.grid_rows), "path is not Hamiltonian");
        assert_eq!(path.get_first(), Some(level.start_position));

        // Letters
        let word: Vec<char> = level.word.chars().collect();
        assert_eq!(level.letter_order_by_position.len(), word.len());
        let mut previous_index: Option<usize> = None;
        for order in 1..=word.len() {
            let (cell, _) = level
                .letter_order_by_position
                .iter()
                .find(|(_, o)| **o == order)
                .expect("missing letter order");
            let p = Position::from_index(*cell, cols);
            assert_eq!(level.letter_at(p), Some(word[order - 1]));
            let index = path.cell_index(p).expect("letter outside the path");
            assert!(index > 0, "letter on the starting cell");
            if let Some(prev) = previous_index {
                assert!(index > prev, "letters out of order");
            }
            previous_index = Some(index);
        }
        assert_eq!(previous_index, Some(path.len() - 1), "last letter not pinned");

        // Empty cells
        let letter_cells = level
            .grid
            .iter()
            .flatten()
            .filter(|c| **c != EMPTY_CELL)
            .count();
        assert_eq!(letter_cells, word.len());

        // Walls
        let path_edges = path.edges();
        let mut seen = EdgeSet::new();
        for wall in &level.walls {
            assert!(wall.len() == 2 || wall.len() == 3);
            for pair in wall.segments.windows(2) {
                assert!(pair[0].edge.shared_cell(&pair[1].edge).is_some());
            }
            for seg in &wall.segments {
                assert!(!path_edges.contains(&seg.edge));
                assert!(seen.insert(seg.edge));
            }
        }
    }

    #[test]
    fn remix_on_five_by_six() {
        let mut generator = LevelGenerator::new(Some(12345));
        let level = generator.generate_level_with_word("REMIX", 5, 6, 7);
        assert_eq!(level.solution.len(), 30);
        assert_eq!(level.word, "REMIX");
        check_level(&level);

        let last = level.solution.get_last().unwrap();
        assert_eq!(level.letter_order_at(last), Some(5));
        assert_eq!(level.letter_at(last), Some('X'));

        assert!(!level.walls.is_empty(), "difficulty 7 must have walls");
    }

    #[test]
    fn no_walls_on_early_levels() {
        let mut generator = LevelGenerator::new(Some(1));
        for d in 1..7 {
            let level = generator.generate(d);
            assert!(level.walls.is_empty(), "walls at level {d}");
            check_level(&level);
        }
    }

    #[test]
    fn same_seed_same_level() {
        for d in [1, 7, 13, 25] {
            let a = LevelGenerator::new(Some(777)).generate(d);
            let b = LevelGenerator::new(Some(777)).generate(d);
            assert_eq!(a, b, "level {d} differs");
        }
    }

    #[test]
    fn fallback_uses_the_snake_path() {
        let settings = GeneratorSettings {
            max_attempts: 0,
            ..GeneratorSettings::default()
        };
        let mut generator = LevelGenerator::with_settings(Some(5), settings);
        let level = generator.generate(9);
        assert!(generator.used_fallback);
        assert_eq!(level.solution, path::Path::snake(level.grid_cols, level.grid_rows));
        check_level(&level);
    }

    #[test]
    fn repeated_letters_have_distinct_orders() {
        let mut generator = LevelGenerator::new(Some(3));
        let level = generator.generate_level_with_word("banana", 5, 5, 3);
        assert_eq!(level.word, "BANANA");
        check_level(&level);
        let orders: Vec<usize> = level.letter_order_by_position.values().copied().collect();
        let mut sorted = orders.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn difficulty_zero_is_level_one() {
        let level = LevelGenerator::new(Some(9)).generate(0);
        assert_eq!(level.difficulty, 1);
        check_level(&level);
    }

    #[test]
    fn ascii_drawing_has_one_line_per_row_and_gap() {
        let level = LevelGenerator::new(Some(9)).generate(10);
        let drawing = level.to_string();
        assert_eq!(drawing.lines().count(), level.grid_rows * 2 - 1);
        assert!(drawing.contains('*'));
    }

    #[test]
    fn serialization_round_trip() {
        let level = LevelGenerator::new(Some(21)).generate(15);
        let json = serde_json::to_string(&level).unwrap();
        let restored: LevelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, level);
    }

    #[test]
    fn loaded_reversed_wall_still_blocks() {
        let level = LevelGenerator::new(Some(5)).generate(9);
        assert!(!level.walls.is_empty());
        let (a, b) = level.walls[0].segments[0].edge.cells();

        // Swap the two cells of the first wall segment in the JSON
        let mut value = serde_json::to_value(&level).unwrap();
        let edge = &mut value["walls"][0]["segments"][0]["edge"];
        let (va, vb) = (edge["a"].take(), edge["b"].take());
        edge["a"] = vb;
        edge["b"] = va;

        let restored: LevelConfig = serde_json::from_value(value).unwrap();
        assert_eq!(restored, level);
        let game = Game::new(restored);
        assert!(!game.is_adjacent(a, b));
        assert!(!game.is_adjacent(b, a));
    }

    #[test]
    fn loading_a_non_adjacent_wall_fails() {
        let level = LevelGenerator::new(Some(5)).generate(9);
        let mut value = serde_json::to_value(&level).unwrap();
        value["walls"][0]["segments"][0]["edge"]["b"] =
            serde_json::json!({"row": 40, "col": 40});
        assert!(serde_json::from_value::<LevelConfig>(value).is_err());
    }

    #[test]
    fn loading_inconsistent_dimensions_fails() {
        let level = LevelGenerator::new(Some(8)).generate(4);

        let mut value = serde_json::to_value(&level).unwrap();
        value["grid_cols"] = serde_json::json!(level.grid_cols + 1);
        assert!(serde_json::from_value::<LevelConfig>(value).is_err());

        let mut value = serde_json::to_value(&level).unwrap();
        value["grid"].as_array_mut().unwrap().pop();
        assert!(serde_json::from_value::<LevelConfig>(value).is_err());

        let mut value = serde_json::to_value(&level).unwrap();
        value["start_position"] = serde_json::json!({"row": 99, "col": 0});
        assert!(serde_json::from_value::<LevelConfig>(value).is_err());
    }

    #[test]
    fn wall_outside_the_grid_is_invalid() {
        let mut level = LevelGenerator::new(Some(2)).generate(7);
        let cols = level.grid_cols;
        let edge = Edge::new(Position::new(0, cols), Position::new(0, cols + 1)).unwrap();
        level.walls.push(Wall {
            segments: vec![WallSegment::new(edge)],
        });
        assert!(level.validate().is_err());
    }

    #[test]
    fn wrong_letter_order_is_invalid() {
        let mut level = LevelGenerator::new(Some(2)).generate(8);
        assert!(level.validate().is_ok());
        for order in level.letter_order_by_position.values_mut() {
            *order = 1;
        }
        assert!(level.validate().is_err());
    }

    #[test]
    #[should_panic]
    fn grid_too_small_for_the_word() {
        LevelGenerator::new(Some(1)).generate_level_with_word("PLANET", 2, 3, 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn every_difficulty_gives_a_valid_level(difficulty in 1u32..80, seed in any::<u32>()) {
            let mut generator = LevelGenerator::new(Some(seed));
            let level = generator.generate(difficulty);
            prop_assert!(generator.attempts <= GeneratorSettings::default().max_attempts);
            check_level(&level);
            prop_assert!(level.validate().is_ok());
        }
    }
}
