/*
lib.rs

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

//! Word path puzzle core: procedural level generation and the play-time path state machine.
//!
//! The [`generator`] module builds levels, [`game`] and [`player_input`] track the player's
//! path while they drag over the grid, and [`session`] keeps the run state between levels.

pub mod game;
pub mod generator;
pub mod highscores;
pub mod platform;
pub mod player_input;
pub mod saver;
pub mod session;
