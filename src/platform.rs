/*
platform.rs

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

//! Platform services.
//!
//! The game needs only two things from the platform it runs on: a place to persist the
//! progress, and a way to report the final score. Each platform provides none, one, or both of
//! these capabilities, so both are optional.
//! See [`crate::saver`] for the file-based implementations.

use log::debug;
use std::error::Error;

use crate::session::Progress;

/// Capability to persist the progress blob.
pub trait StateStore {
    /// Persist the serialized progress.
    fn persist_state(&mut self, blob: &str) -> Result<(), Box<dyn Error>>;
}

/// Capability to report the final score of a run.
pub trait ScoreReporter {
    /// Report the score.
    fn report_score(&mut self, score: u64) -> Result<(), Box<dyn Error>>;
}

/// Platform services available to the game.
#[derive(Default)]
pub struct Platform {
    /// Progress persistence, if the platform supports it.
    store: Option<Box<dyn StateStore>>,

    /// Score reporting, if the platform supports it.
    reporter: Option<Box<dyn ScoreReporter>>,
}

impl Platform {
    /// Create a [`Platform`] object with no capabilities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the progress persistence capability.
    pub fn with_state_store(mut self, store: Box<dyn StateStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Add the score reporting capability.
    pub fn with_score_reporter(mut self, reporter: Box<dyn ScoreReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Whether the platform can persist the progress.
    pub fn can_persist(&self) -> bool {
        self.store.is_some()
    }

    /// Whether the platform can report scores.
    pub fn can_report(&self) -> bool {
        self.reporter.is_some()
    }

    /// Persist the progress. Does nothing if the platform cannot persist data.
    pub fn persist(&mut self, progress: &Progress) -> Result<(), Box<dyn Error>> {
        match self.store.as_mut() {
            Some(store) => {
                let blob: String = serde_json::to_string(progress)?;
                store.persist_state(&blob)
            }
            None => {
                debug!("No state store: progress not persisted");
                Ok(())
            }
        }
    }

    /// Report the final score. Does nothing if the platform cannot report scores.
    pub fn report_final_score(&mut self, score: u64) -> Result<(), Box<dyn Error>> {
        match self.reporter.as_mut() {
            Some(reporter) => reporter.report_score(score),
            None => {
                debug!("No score reporter: score {score} not reported");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct MemoryStore(Rc<RefCell<Vec<String>>>);

    impl StateStore for MemoryStore {
        fn persist_state(&mut self, blob: &str) -> Result<(), Box<dyn Error>> {
            self.0.borrow_mut().push(blob.to_string());
            Ok(())
        }
    }

    struct MemoryReporter(Rc<RefCell<Vec<u64>>>);

    impl ScoreReporter for MemoryReporter {
        fn report_score(&mut self, score: u64) -> Result<(), Box<dyn Error>> {
            self.0.borrow_mut().push(score);
            Ok(())
        }
    }

    #[test]
    fn missing_capabilities_are_no_ops() {
        let mut platform = Platform::new();
        assert!(!platform.can_persist());
        assert!(!platform.can_report());
        assert!(platform.persist(&Session::new().progress()).is_ok());
        assert!(platform.report_final_score(10).is_ok());
    }

    #[test]
    fn capabilities_receive_the_data() {
        let blobs = Rc::new(RefCell::new(Vec::new()));
        let scores = Rc::new(RefCell::new(Vec::new()));
        let mut platform = Platform::new()
            .with_state_store(Box::new(MemoryStore(blobs.clone())))
            .with_score_reporter(Box::new(MemoryReporter(scores.clone())));

        let mut session = Session::new();
        session.score = 300;
        session.level = 4;
        platform.persist(&session.progress()).unwrap();
        platform.report_final_score(session.score).unwrap();

        let saved: Progress = serde_json::from_str(&blobs.borrow()[0]).unwrap();
        assert_eq!((saved.score, saved.level), (300, 4));
        assert_eq!(*scores.borrow(), vec![300]);
    }
}
