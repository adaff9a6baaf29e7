/*
progress.rs

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

//! Save and restore the progress of the run.
//!
//! The progress (score and level) is saved in the `progress.json` file after each won level.
//! When Wordtrail is restarted with `--resume`, the run continues from the saved level.
//!
//! The saved object is a serialization of the [`Progress`] object in JSON format by using
//! [`serde`].

use log::debug;
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::platform::StateStore;
use crate::session::Progress;

/// Object to save and restore the progress.
pub struct SaverProgress {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverProgress {
    /// Create a [`SaverProgress`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the progress must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("progress.json");
        debug!("Progress file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the saved [`Progress`] object.
    ///
    /// Return the [`Progress`] object or None if there is no saved progress.
    pub fn get_progress(&self) -> Result<Option<Progress>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.save_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let progress: Progress = serde_json::from_reader(reader)?;
        Ok(Some(progress))
    }

    /// Save the provided [`Progress`] object.
    pub fn save_progress(&self, progress: &Progress) -> Result<(), Box<dyn Error>> {
        let blob: String = serde_json::to_string(progress)?;
        self.write(&blob)
    }

    /// Delete the saved progress.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }

    fn write(&self, blob: &str) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        writer.write_all(blob.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

impl StateStore for SaverProgress {
    fn persist_state(&mut self, blob: &str) -> Result<(), Box<dyn Error>> {
        // Refuse blobs that could not be read back
        let _: Progress = serde_json::from_str(blob)?;
        self.write(blob)
    }
}
