/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers tuning the level generator.
//! In command-line mode, Wordtrail generates levels, verifies them, and prints them.
//!
//! # Examples
//!
//! Print the level 8 for the seed 42:
//!
//! ```
//! $ wordtrail -f 8 -s 42
//! Level 8: REMIX (5x6, 1 walls, 1 attempts)
//! * . . . .
//!
//! . R . . .
//! ...
//! ```
//!
//! Generate 30 consecutive levels, play them with their solution, and save the progress and
//! the high scores:
//!
//! ```
//! $ wordtrail -c 30 --autoplay --data-dir /tmp/wordtrail --summary
//! ```

use clap::Parser;
use log::{debug, warn};
use std::env;
use std::fmt;
use std::path::PathBuf;

use wordtrail::game::Game;
use wordtrail::generator::level::{LevelConfig, LevelGenerator};
use wordtrail::generator::settings::GeneratorSettings;
use wordtrail::platform::Platform;
use wordtrail::player_input::{DragEvent, DragInput};
use wordtrail::saver::highscores::SaverHighScores;
use wordtrail::saver::progress::SaverProgress;
use wordtrail::session::Session;

const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>";

/// Generate and verify Wordtrail levels for developers.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Difficulty level of the first level to generate (default: 1, or the saved level with
    /// --resume)
    #[arg(short = 'f', long, value_parser = clap::value_parser!(u32).range(1..))]
    difficulty: Option<u32>,

    /// Seed for reproducible levels
    #[arg(short, long)]
    seed: Option<u32>,

    /// Number of consecutive levels to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print the levels in JSON format
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// JSON file with generator settings
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Play each level with its solution and keep the score
    #[arg(short, long, default_value_t = false)]
    autoplay: bool,

    /// Directory where the progress and the high scores are saved
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Continue from the saved progress
    #[arg(short, long, default_value_t = false, requires = "data_dir")]
    resume: bool,

    /// Print some statistics after generating the levels
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let settings: GeneratorSettings = match &args.settings {
        Some(path) => match GeneratorSettings::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Cannot load the settings from {path:?}: {e}");
                return 1;
            }
        },
        None => GeneratorSettings::default(),
    };

    //
    // Session and platform services
    //
    let mut platform: Platform = Platform::new();
    let mut session: Session = Session::new();
    if let Some(dir) = &args.data_dir {
        let saver: SaverProgress = SaverProgress::new(dir.clone());
        if args.resume {
            match saver.get_progress() {
                Ok(Some(progress)) => session = Session::resume(&progress),
                Ok(None) => println!("No saved progress, starting a new run"),
                Err(e) => {
                    eprintln!("Cannot read the saved progress: {e}");
                    return 1;
                }
            }
        }
        platform = platform
            .with_state_store(Box::new(saver))
            .with_score_reporter(Box::new(SaverHighScores::new(dir.clone())));
    }
    if let Some(d) = args.difficulty {
        session.level = d;
    }

    //
    // Generate the levels
    //
    let mut generator: LevelGenerator = LevelGenerator::with_settings(args.seed, settings);
    let mut stats: Stats = Stats::default();

    for i in 0..args.count {
        let difficulty: u32 = session.level;
        debug!("Level {i}: difficulty {difficulty}");

        let level: LevelConfig = generator.generate(difficulty);
        stats.add(generator.attempts, generator.used_fallback);

        // Verify that the solution covers the grid
        if !level.solution.is_hamiltonian(level.grid_cols, level.grid_rows) {
            eprintln!("Invalid solution path: {:?}", level.solution.get());
            panic!("Bug: the generated path is not Hamiltonian");
        }

        if args.json {
            match serde_json::to_string_pretty(&level) {
                Ok(s) => println!("{s}"),
                Err(e) => {
                    eprintln!("Cannot serialize the level: {e}");
                    return 1;
                }
            }
        } else {
            println!(
                "Level {}: {} ({}x{}, {} walls, {} attempts)",
                level.difficulty,
                level.word,
                level.grid_cols,
                level.grid_rows,
                level.walls.len(),
                generator.attempts
            );
            println!("{level}");
        }

        if !args.autoplay {
            session.level = difficulty.saturating_add(1);
            continue;
        }

        session.mark_tutorial_seen();
        if autoplay(&level) {
            let points: u64 = session.record_win(&level);
            println!("Won: +{points} points, score {}\n", session.score);
            if let Err(e) = platform.persist(&session.progress()) {
                warn!("Cannot save the progress: {e}");
            }
        } else {
            eprintln!("Solution rejected for level {difficulty}");
            session.record_timeout();
            break;
        }
    }

    if args.autoplay {
        println!("Final score: {}", session.score);
        if let Err(e) = platform.report_final_score(session.score) {
            warn!("Cannot report the score: {e}");
        }
    }

    // Print some stats
    if args.summary && stats.levels > 0 {
        println!("{stats}");
    }

    if session.finished { 1 } else { 0 }
}

/// Generation statistics for the levels actually generated.
#[derive(Debug, Default)]
struct Stats {
    levels: usize,
    total_attempts: usize,
    max_attempts: usize,
    fallbacks: usize,
}

impl Stats {
    /// Record a generated level.
    fn add(&mut self, attempts: usize, used_fallback: bool) {
        self.levels += 1;
        self.total_attempts += attempts;
        self.max_attempts = self.max_attempts.max(attempts);
        if used_fallback {
            self.fallbacks += 1;
        }
    }

    fn average_attempts(&self) -> f32 {
        if self.levels == 0 {
            0.0
        } else {
            self.total_attempts as f32 / self.levels as f32
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "
            levels = {}
    total attempts = {}
  average attempts = {}
      max attempts = {}
         fallbacks = {}",
            self.levels,
            self.total_attempts,
            self.average_attempts(),
            self.max_attempts,
            self.fallbacks
        )
    }
}

/// Drag along the solution of the level and return whether the level is won.
fn autoplay(level: &LevelConfig) -> bool {
    let solution = level.solution.get();
    let mut game: Game = Game::new(level.clone());
    let mut input: DragInput = DragInput::new();

    input.pointer_down(&mut game, solution[0]);
    for cell in &solution[1..] {
        if let DragEvent::Rejected(e) = input.pointer_move(&mut game, *cell) {
            debug!("Move to {cell} rejected: {e}");
            return false;
        }
    }
    input.pointer_up();
    game.is_won()
}
