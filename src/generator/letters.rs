/*
letters.rs

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

//! Place the letters of the word along the path.
//!
//! The letters are spread evenly along the path, in order:
//!
//! * The first cell of the path (index 0) is the starting cell and never holds a letter.
//!   The first letter is at index 1 or 2.
//! * The last letter is always on the last cell of the path, so that reaching the end of the
//!   path and finishing the word happen together.
//! * The other letters are evenly spaced between the two, with a jitter of one cell.

use log::debug;

use super::rng::LevelRng;

/// Preferred minimal distance between two letters along the path. When the path is too short,
/// the letters are only required to be in strictly increasing order.
const MIN_LETTER_SPACING: usize = 2;

/// Return the path indexes of the letters of a word of `num_letters` letters, on a path of
/// `path_len` cells.
///
/// The returned indexes are strictly increasing, and the last one is `path_len - 1`.
///
/// # Panics
///
/// The method panics if the word is empty or if the path is too short to hold all the letters
/// after the starting cell. The level generator always grows the grid to fit the word first.
pub fn place(path_len: usize, num_letters: usize, rng: &mut LevelRng) -> Vec<usize> {
    assert!(num_letters > 0, "Cannot place the letters of an empty word");
    assert!(
        path_len > num_letters,
        "Path of {path_len} cells too short for {num_letters} letters"
    );

    let last: usize = path_len - 1;
    if num_letters == 1 {
        return vec![last];
    }

    // Index 1 or 2, but leave room for the other letters
    let first: usize = (1 + rng.below(2)).min(last - (num_letters - 1));

    let spacing: usize = if last - first >= MIN_LETTER_SPACING * (num_letters - 1) {
        MIN_LETTER_SPACING
    } else {
        1
    };

    let mut indexes: Vec<usize> = Vec::with_capacity(num_letters);
    indexes.push(first);

    let span: f64 = (last - first) as f64;
    for i in 1..num_letters - 1 {
        let target: f64 = first as f64 + span * i as f64 / (num_letters - 1) as f64;
        let jitter: isize = rng.below(3) as isize - 1;
        let wanted: isize = target.round() as isize + jitter;

        // After the previous letter, and enough cells left for the following letters
        let min: usize = indexes[i - 1] + spacing;
        let max: usize = last - spacing * (num_letters - 1 - i);
        let index: usize = (wanted.max(0) as usize).clamp(min, max.max(min));
        indexes.push(index);
    }
    indexes.push(last);

    // Repair pass: the clamping cannot break the order, but make sure of it
    for i in 1..num_letters {
        if indexes[i] <= indexes[i - 1] {
            indexes[i] = indexes[i - 1] + 1;
        }
    }
    assert!(
        indexes[num_letters - 1] == last,
        "Letter placement overflowed the path: {indexes:?}"
    );

    debug!("Letter indexes: {indexes:?} (path of {path_len} cells)");
    indexes
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_strictly_increasing(v: &[usize]) -> bool {
        v.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn five_letters_on_thirty_cells() {
        let mut rng = LevelRng::new(Some(2024));
        let indexes = place(30, 5, &mut rng);
        assert_eq!(indexes.len(), 5);
        assert!(indexes[0] == 1 || indexes[0] == 2);
        assert_eq!(indexes[4], 29);
        assert!(is_strictly_increasing(&indexes));
    }

    #[test]
    fn single_letter_is_on_the_last_cell() {
        let mut rng = LevelRng::new(Some(1));
        assert_eq!(place(9, 1, &mut rng), vec![8]);
    }

    #[test]
    fn tightest_path() {
        let mut rng = LevelRng::new(Some(1));
        assert_eq!(place(4, 3, &mut rng), vec![1, 2, 3]);
    }

    #[test]
    #[should_panic]
    fn path_too_short() {
        let mut rng = LevelRng::new(Some(1));
        place(3, 3, &mut rng);
    }

    proptest! {
        #[test]
        fn indexes_are_valid(
            num_letters in 1usize..12,
            extra in 1usize..60,
            seed in any::<u32>(),
        ) {
            let path_len = num_letters + extra;
            let mut rng = LevelRng::new(Some(seed));
            let indexes = place(path_len, num_letters, &mut rng);
            prop_assert_eq!(indexes.len(), num_letters);
            prop_assert!(indexes[0] >= 1);
            prop_assert_eq!(*indexes.last().unwrap(), path_len - 1);
            prop_assert!(is_strictly_increasing(&indexes));
        }
    }
}
