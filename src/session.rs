/*
session.rs

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

//! State shared by the consecutive levels of a run.
//!
//! The [`Session`] object is created once, when the run starts (or resumes from a saved
//! [`Progress`]), and is passed to whatever plays the levels. Nothing here is global.

use chrono::{DateTime, Local};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::generator::level::LevelConfig;

/// Points for each difficulty level of a won level.
const LEVEL_POINTS: u64 = 100;

/// Points for each letter of the word.
const LETTER_POINTS: u64 = 10;

/// Bonus, in percent, for each consecutive win.
const STREAK_BONUS_PERCENT: u64 = 10;

/// Maximum number of consecutive wins that count for the bonus.
const MAX_STREAK_BONUS: u32 = 5;

/// Saved progress. Levels are not saved: they are generated again from the level number.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Progress {
    /// Accumulated score.
    pub score: u64,

    /// Next level to play.
    pub level: u32,

    /// When the progress was saved.
    pub saved_at: DateTime<Local>,
}

/// Session state.
#[derive(Debug, Clone)]
pub struct Session {
    /// Accumulated score.
    pub score: u64,

    /// Level being played.
    pub level: u32,

    /// Number of consecutive won levels.
    pub streak: u32,

    /// Whether the player has seen the tutorial.
    pub tutorial_seen: bool,

    /// Whether the run is over (a level timed out).
    pub finished: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a [`Session`] object for a new run.
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            streak: 0,
            tutorial_seen: false,
            finished: false,
        }
    }

    /// Create a [`Session`] object that continues a saved run.
    pub fn resume(progress: &Progress) -> Self {
        debug!(
            "Resuming at level {} with {} points (saved {})",
            progress.level, progress.score, progress.saved_at
        );
        Self {
            score: progress.score,
            level: progress.level.max(1),
            // The tutorial is only for new runs
            tutorial_seen: true,
            ..Self::new()
        }
    }

    /// Return the progress to save.
    pub fn progress(&self) -> Progress {
        Progress {
            score: self.score,
            level: self.level,
            saved_at: Local::now(),
        }
    }

    /// Points for winning the given level with the current streak.
    pub fn level_points(&self, level: &LevelConfig) -> u64 {
        let base: u64 =
            LEVEL_POINTS * u64::from(level.difficulty) + LETTER_POINTS * level.word_len() as u64;
        let bonus: u64 = u64::from(self.streak.min(MAX_STREAK_BONUS)) * STREAK_BONUS_PERCENT;
        base + base * bonus / 100
    }

    /// Record a won level, move to the next level, and return the points earned.
    pub fn record_win(&mut self, level: &LevelConfig) -> u64 {
        let points: u64 = self.level_points(level);
        self.score += points;
        self.streak += 1;
        self.level = level.difficulty.saturating_add(1);
        debug!(
            "Level {} won: +{points} points, score {}, streak {}",
            level.difficulty, self.score, self.streak
        );
        points
    }

    /// Record that the time ran out. The run is over.
    pub fn record_timeout(&mut self) {
        debug!("Level {} timed out, final score {}", self.level, self.score);
        self.streak = 0;
        self.finished = true;
    }

    /// Record that the player has seen the tutorial.
    pub fn mark_tutorial_seen(&mut self) {
        self.tutorial_seen = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::level::LevelGenerator;

    #[test]
    fn streak_bonus() {
        let level = LevelGenerator::new(Some(1)).generate(8);
        let mut session = Session::new();
        // Level 8, "REMIX": 800 + 50
        assert_eq!(session.record_win(&level), 850);
        // Second win in a row: +10%
        assert_eq!(session.record_win(&level), 935);
        assert_eq!(session.score, 1785);
        assert_eq!(session.streak, 2);
        assert_eq!(session.level, 9);
    }

    #[test]
    fn bonus_is_capped() {
        let level = LevelGenerator::new(Some(1)).generate(1);
        let mut session = Session::new();
        session.streak = 40;
        // 100 + 30, +50%
        assert_eq!(session.level_points(&level), 195);
    }

    #[test]
    fn win_on_the_last_level_number() {
        let level = LevelGenerator::new(Some(1)).generate(u32::MAX);
        let mut session = Session::new();
        session.level = u32::MAX;
        session.record_win(&level);
        assert_eq!(session.level, u32::MAX);
    }

    #[test]
    fn timeout_ends_the_run() {
        let mut session = Session::new();
        session.streak = 3;
        session.record_timeout();
        assert!(session.finished);
        assert_eq!(session.streak, 0);
    }

    #[test]
    fn resume_from_progress() {
        let progress = Progress {
            score: 4200,
            level: 17,
            saved_at: Local::now(),
        };
        let session = Session::resume(&progress);
        assert_eq!(session.score, 4200);
        assert_eq!(session.level, 17);
        assert_eq!(session.streak, 0);
        assert!(session.tutorial_seen);

        let saved = session.progress();
        assert_eq!((saved.score, saved.level), (4200, 17));
    }

    #[test]
    fn progress_round_trip() {
        let progress = Session::new().progress();
        let json = serde_json::to_string(&progress).unwrap();
        let restored: Progress = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, progress);
    }
}
