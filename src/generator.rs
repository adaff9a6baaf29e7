/*
generator.rs

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

//! Generate random levels.
//!
//! A level is a rectangular grid, a word, and a starting cell.
//! The player must draw a path that visits every cell exactly once and collects the letters of
//! the word in order, finishing on the last letter.
//!
//! [`level::LevelGenerator::generate`] builds the [`level::LevelConfig`] of a difficulty level
//! in three steps:
//!
//! * A random Hamiltonian path represented by a [`path::Path`] object.
//!   You create this path by creating a [`random_path::RandomPath`] object and by using its
//!   [`random_path::RandomPath::generate`] method.
//!   The method can reach a dead end and return an error. The level generator then retries,
//!   and falls back to the snake path ([`path::Path::snake`]) after too many failures.
//!
//! * The letters of the word, placed along the path with [`letters::place`].
//!   The last letter is always on the last cell of the path.
//!
//! * Walls, generated by [`walls::WallBuilder`], on the edges that the path does not use.
//!
//! All the random decisions come from a single [`rng::LevelRng`] object, so a seed gives
//! reproducible levels.

pub mod edges;
pub mod letters;
pub mod level;
pub mod path;
pub mod position;
pub mod random_path;
pub mod rng;
pub mod settings;
pub mod walls;
pub mod words;
