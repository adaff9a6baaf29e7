/*
player_input.rs

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

//! Manage the player's drag input.
//!
//! The input layer converts the pointer coordinates into a cell and calls
//! [`DragInput::pointer_down`], [`DragInput::pointer_move`], and [`DragInput::pointer_up`].
//! This module turns those events into path extensions and removals on the [`Game`] object:
//!
//! * Moving onto the cell before the end of the path removes the end of the path (undo).
//! * Moving onto any other connected cell does nothing.
//! * Moving onto an unconnected cell tries to extend the path.

use crate::game::{Activation, Game, MoveRejection};
use crate::generator::position::Position;

/// Effect of a pointer event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DragEvent {
    /// The cell was added to the path.
    Activated(Activation),

    /// The given cell was removed from the end of the path.
    Deactivated(Position),

    /// The move was rejected. The presentation layer can use the reason to give feedback.
    Rejected(MoveRejection),

    /// The event has no effect.
    Ignored,
}

/// Drag state.
#[derive(Debug, Default, Clone)]
pub struct DragInput {
    /// Whether the pointer is down.
    dragging: bool,

    /// Last cell the pointer was over, to ignore repeated move events inside the same cell.
    hovered: Option<Position>,
}

impl DragInput {
    /// Create a [`DragInput`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The pointer is pressed over the given cell.
    ///
    /// A drag starts from the end of the path, or from a cell next to it (in which case the
    /// cell is also activated).
    pub fn pointer_down(&mut self, game: &mut Game, cell: Position) -> DragEvent {
        if game.is_won() {
            return DragEvent::Ignored;
        }
        if cell == game.last_cell() {
            self.dragging = true;
            self.hovered = Some(cell);
            return DragEvent::Ignored;
        }
        if game.last_cell().is_orthogonal_to(&cell) {
            self.dragging = true;
            return self.pointer_move(game, cell);
        }
        DragEvent::Ignored
    }

    /// The pointer moves over the given cell.
    pub fn pointer_move(&mut self, game: &mut Game, cell: Position) -> DragEvent {
        if !self.dragging || self.hovered == Some(cell) {
            return DragEvent::Ignored;
        }
        self.hovered = Some(cell);

        if game.is_won() {
            return DragEvent::Ignored;
        }

        // Back onto the previous cell: undo the last step
        if game.previous_cell() == Some(cell) {
            let last: Position = game.last_cell();
            return match game.deactivate(last) {
                Ok(()) => DragEvent::Deactivated(last),
                Err(e) => DragEvent::Rejected(e),
            };
        }

        // Any other connected cell is a no-op
        if game.is_connected(cell) {
            return DragEvent::Ignored;
        }

        match game.activate(cell) {
            Ok(a) => {
                if a == Activation::Won {
                    self.pointer_up();
                }
                DragEvent::Activated(a)
            }
            Err(e) => DragEvent::Rejected(e),
        }
    }

    /// The pointer is released.
    pub fn pointer_up(&mut self) {
        self.dragging = false;
        self.hovered = None;
    }
}
