/*
game.rs

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

//! Manage the status of a level in progress.
//!
//! The player's path grows from the starting cell, which is connected when the [`Game`] object
//! is created. A cell can be connected only if it is next to the end of the path, without a wall
//! in between, and if its letter (if any) is the next letter of the word.
//! The path shrinks one cell at a time, from its end.
//!
//! Cells are identified by their [`Position`]; the connected status is stored by cell index.

use log::debug;
use std::fmt;

use crate::generator::edges::EdgeSet;
use crate::generator::level::LevelConfig;
use crate::generator::position::Position;
use crate::generator::walls;

/// Reasons for rejecting a move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveRejection {
    /// The level is already won.
    LevelWon,

    /// The cell is outside the grid.
    OutsideGrid,

    /// The cell is already in the path.
    AlreadyConnected,

    /// The cell is not next to the end of the path.
    NotAdjacent,

    /// A wall separates the cell from the end of the path.
    WallBlocked,

    /// The letter of the cell is not the next letter of the word.
    WrongOrder,

    /// The cell holds the last letter, but other cells are not connected yet.
    FinalLetterTooEarly,

    /// Only the cell at the end of the path can be removed.
    NotLastCell,

    /// The starting cell cannot be removed.
    StartCell,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg: &str = match self {
            MoveRejection::LevelWon => "the level is already won",
            MoveRejection::OutsideGrid => "the cell is outside the grid",
            MoveRejection::AlreadyConnected => "the cell is already connected",
            MoveRejection::NotAdjacent => "the cell is not next to the end of the path",
            MoveRejection::WallBlocked => "a wall blocks the move",
            MoveRejection::WrongOrder => "wrong letter order",
            MoveRejection::FinalLetterTooEarly => "the last letter must be the last cell",
            MoveRejection::NotLastCell => "only the end of the path can be removed",
            MoveRejection::StartCell => "the starting cell cannot be removed",
        };
        write!(f, "{msg}")
    }
}

/// Result of an accepted activation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The cell is connected; the level is still in progress.
    Connected,

    /// The cell is connected and completes the level.
    Won,
}

/// Manage the status of the level in progress.
#[derive(Debug, Clone)]
pub struct Game {
    /// Level being played.
    level: LevelConfig,

    /// Connected cells, in order, from the starting cell.
    path: Vec<Position>,

    /// Connected status, indexed by cell index.
    connected: Vec<bool>,

    /// Order (starting at 1) of the next letter to collect.
    next_letter: usize,

    /// Edges that walls block.
    blocked: EdgeSet,

    /// Whether the level is won.
    won: bool,

    /// Number of moves rejected because of the letter order.
    mistakes: usize,
}

impl Game {
    /// Create a [`Game`] object and connect the starting cell.
    pub fn new(level: LevelConfig) -> Self {
        let blocked: EdgeSet = walls::blocked_edges(&level.walls);
        let mut game: Game = Self {
            path: Vec::with_capacity(level.num_cells()),
            connected: vec![false; level.num_cells()],
            next_letter: 1,
            blocked,
            won: false,
            mistakes: 0,
            level,
        };
        game.connect_start();
        game
    }

    /// Restart the level: only the starting cell stays connected.
    pub fn reset(&mut self) {
        self.path.clear();
        self.connected.iter_mut().for_each(|c| *c = false);
        self.next_letter = 1;
        self.won = false;
        self.mistakes = 0;
        self.connect_start();
    }

    fn connect_start(&mut self) {
        let start: Position = self.level.start_position;
        self.path.push(start);
        self.connected[start.index(self.level.grid_cols)] = true;
        // A level always starts on an empty cell, but a letter there would be collected first
        if self.level.letter_order_at(start) == Some(1) {
            self.next_letter = 2;
        }
    }

    /// Return the level being played.
    pub fn level(&self) -> &LevelConfig {
        &self.level
    }

    /// Return the connected cells, in order.
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Return the cell at the end of the path.
    pub fn last_cell(&self) -> Position {
        self.path[self.path.len() - 1]
    }

    /// Return the cell before the end of the path, if any.
    pub fn previous_cell(&self) -> Option<Position> {
        if self.path.len() >= 2 {
            Some(self.path[self.path.len() - 2])
        } else {
            None
        }
    }

    /// Number of connected cells.
    pub fn connected_count(&self) -> usize {
        self.path.len()
    }

    /// Whether the cell is connected.
    pub fn is_connected(&self, cell: Position) -> bool {
        self.level.contains(cell) && self.connected[cell.index(self.level.grid_cols)]
    }

    /// Order (starting at 1) of the next letter to collect. It is the word length plus one when
    /// all the letters are collected.
    pub fn next_expected_letter(&self) -> usize {
        self.next_letter
    }

    /// Whether the letter of the given order has been collected ("lit").
    pub fn is_letter_lit(&self, order: usize) -> bool {
        order > 0 && order < self.next_letter
    }

    /// Return the edges that walls block.
    pub fn blocked_edges(&self) -> &EdgeSet {
        &self.blocked
    }

    /// Whether the level is won.
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Number of moves rejected because of the letter order.
    pub fn mistakes(&self) -> usize {
        self.mistakes
    }

    /// Whether the player can move between the two cells: they share a side and no wall
    /// separates them.
    pub fn is_adjacent(&self, a: Position, b: Position) -> bool {
        a.is_orthogonal_to(&b) && !self.blocked.contains_pair(a, b)
    }

    /// Connect the cell at the end of the path.
    ///
    /// # Errors
    ///
    /// The method returns the reason of the rejection. A rejected move does not change the game.
    pub fn activate(&mut self, cell: Position) -> Result<Activation, MoveRejection> {
        let res: Result<Activation, MoveRejection> = self.try_activate(cell);
        if let Err(e) = res {
            debug!("Move to {cell} rejected: {e}");
            if e == MoveRejection::WrongOrder {
                self.mistakes += 1;
            }
        }
        res
    }

    fn try_activate(&mut self, cell: Position) -> Result<Activation, MoveRejection> {
        if self.won {
            return Err(MoveRejection::LevelWon);
        }
        if !self.level.contains(cell) {
            return Err(MoveRejection::OutsideGrid);
        }
        if self.is_connected(cell) {
            return Err(MoveRejection::AlreadyConnected);
        }

        let last: Position = self.last_cell();
        if !last.is_orthogonal_to(&cell) {
            return Err(MoveRejection::NotAdjacent);
        }
        if !self.is_adjacent(last, cell) {
            return Err(MoveRejection::WallBlocked);
        }

        let letter_order: Option<usize> = self.level.letter_order_at(cell);
        if let Some(order) = letter_order {
            if order != self.next_letter {
                return Err(MoveRejection::WrongOrder);
            }
            // The last letter ends the path, so every other cell must already be connected
            if order == self.level.word_len() && self.path.len() + 1 != self.level.num_cells() {
                return Err(MoveRejection::FinalLetterTooEarly);
            }
            self.next_letter += 1;
        }

        self.path.push(cell);
        self.connected[cell.index(self.level.grid_cols)] = true;

        if self.check_win() {
            debug!("Level {} won", self.level.difficulty);
            self.won = true;
            Ok(Activation::Won)
        } else {
            Ok(Activation::Connected)
        }
    }

    /// Remove the cell at the end of the path. The previous cell becomes the end of the path.
    ///
    /// # Errors
    ///
    /// The method returns the reason of the rejection. A rejected move does not change the game.
    pub fn deactivate(&mut self, cell: Position) -> Result<(), MoveRejection> {
        if self.won {
            return Err(MoveRejection::LevelWon);
        }
        if cell == self.level.start_position {
            return Err(MoveRejection::StartCell);
        }
        if self.path.len() < 2 || self.last_cell() != cell {
            return Err(MoveRejection::NotLastCell);
        }

        self.path.pop();
        self.connected[cell.index(self.level.grid_cols)] = false;
        if self.level.letter_order_at(cell).is_some() {
            // The letter is no longer lit
            self.next_letter -= 1;
        }
        Ok(())
    }

    /// Whether all the cells are connected, ending on the last letter, with all the letters
    /// collected in order.
    fn check_win(&self) -> bool {
        self.path.len() == self.level.num_cells()
            && self.level.letter_at(self.last_cell()) == self.level.word.chars().last()
            && self.next_letter == self.level.word_len() + 1
    }
}
