/*
highscores.rs

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

//! Manage the local high scores.
//!
//! The main object, [`HighScores`], maintains the list of the best run scores.
//! A score is added when a run ends (see [`crate::platform::ScoreReporter`]).
//! See the [`crate::saver::highscores`] module that saves and restores the [`HighScores`]
//! object.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Number of entries in the scoreboard (number of top scores to keep).
const BOARD_SIZE: usize = 10;

/// Object that represent a score.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Score {
    /// Final score of the run.
    pub score: u64,

    /// Completion timestamp.
    pub when: DateTime<Local>,
}

/// Sorted list of the top scores, best first.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct HighScores {
    /// Sorted list of the top scores.
    /// The number of scores in this list is controlled by the [`BOARD_SIZE`] constant.
    top: Vec<Score>,
}

impl HighScores {
    /// Create a [`HighScores`] object.
    pub fn new() -> Self {
        Self {
            top: Vec::with_capacity(BOARD_SIZE),
        }
    }

    /// Add a score to the scoreboard and return the position in the board, or None if the
    /// score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score). A new score goes after the existing
    /// equal scores.
    pub fn add_score(&mut self, score: u64) -> Option<usize> {
        let index: usize = self.top.partition_point(|s| s.score >= score);
        if index >= BOARD_SIZE {
            return None;
        }
        self.top.insert(
            index,
            Score {
                score,
                when: Local::now(),
            },
        );
        self.top.truncate(BOARD_SIZE);
        Some(index + 1)
    }

    /// Return the scores, best first.
    pub fn get_scores(&self) -> &[Score] {
        &self.top
    }

    /// Return the best score, if any.
    pub fn best(&self) -> Option<u64> {
        self.top.first().map(|s| s.score)
    }

    /// Whether the scoreboard is empty.
    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_are_sorted() {
        let mut board = HighScores::new();
        assert_eq!(board.add_score(50), Some(1));
        assert_eq!(board.add_score(80), Some(1));
        assert_eq!(board.add_score(60), Some(2));
        assert_eq!(board.add_score(60), Some(3));
        let scores: Vec<u64> = board.get_scores().iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![80, 60, 60, 50]);
        assert_eq!(board.best(), Some(80));
    }

    #[test]
    fn board_is_bounded() {
        let mut board = HighScores::new();
        for s in 1..=BOARD_SIZE as u64 {
            board.add_score(s * 10);
        }
        assert_eq!(board.add_score(5), None);
        assert_eq!(board.add_score(1000), Some(1));
        assert_eq!(board.get_scores().len(), BOARD_SIZE);
        assert_eq!(board.get_scores().last().unwrap().score, 20);
    }

    #[test]
    fn empty_board() {
        let board = HighScores::default();
        assert!(board.is_empty());
        assert_eq!(board.best(), None);
    }
}
