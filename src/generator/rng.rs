/*
rng.rs

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

//! Seedable random number generator used by the level generator.
//!
//! With a seed, the generator is a linear congruential generator
//! (`state = (state * A + C) mod 2^32`) and every level it drives can be reproduced exactly.
//! Without a seed, the values come from [`rand::rng`].

use rand::Rng;

/// LCG multiplier (Numerical Recipes).
const MULTIPLIER: u32 = 1_664_525;

/// LCG increment.
const INCREMENT: u32 = 1_013_904_223;

/// LCG modulus, as a float, to bring the state into `[0, 1)`.
const MODULUS: f64 = 4_294_967_296.0;

/// [`LevelRng`] object.
#[derive(Debug, Clone)]
pub struct LevelRng {
    /// LCG state, or None when the generator is not seeded.
    state: Option<u32>,
}

impl LevelRng {
    /// Create the object. A seed makes the stream of values reproducible.
    pub fn new(seed: Option<u32>) -> Self {
        Self { state: seed }
    }

    /// Return the next float in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        match self.state.as_mut() {
            Some(state) => {
                // Wrapping arithmetic on u32 is the modulo 2^32
                *state = state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
                f64::from(*state) / MODULUS
            }
            None => rand::rng().random::<f64>(),
        }
    }

    /// Return an integer in `[0, n)`. `n` must not be zero.
    pub fn below(&mut self, n: usize) -> usize {
        assert!(n > 0, "below: the upper bound must be positive");
        // `next()` is strictly lower than 1, but guard against float rounding anyway
        ((self.next() * n as f64) as usize).min(n - 1)
    }

    /// Return `true` with the probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next() < p
    }

    /// Shuffle the slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j: usize = self.below(i + 1);
            items.swap(i, j);
        }
    }

    /// Return a random element of the slice, or None if the slice is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.below(items.len())])
        }
    }
}
