/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Adventure.

Adventure is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Adventure is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Adventure. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! Both programs accept a `--debug` option that enables the debug messages on the standard
//! error. Without it, the `RUST_LOG` environment variable applies.
//!
//! # Examples
//!
//! Build a graph with a fixed seed and print it:
//!
//! ```text
//! $ buildrooms --seed 42 --print
//! ```
//!
//! Play with the most recent graph of another directory:
//!
//! ```text
//! $ adventure --search-dir /tmp/game
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::config::{self, COPYRIGHT_NOTICE};
use crate::generator::params::GraphParams;

/// Build a random graph of rooms for the adventure game.
#[derive(Parser, Debug)]
#[command(name = "buildrooms", about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
pub struct BuildArgs {
    /// Number of rooms in the graph
    #[arg(short, long, default_value_t = config::NUM_OF_ROOMS)]
    pub rooms: usize,

    /// Minimum number of connections per room
    #[arg(long, default_value_t = config::MIN_CONNECTIONS)]
    pub min_connections: usize,

    /// Maximum number of connections per room
    #[arg(long, default_value_t = config::MAX_CONNECTIONS)]
    pub max_connections: usize,

    /// Seed for the random generator, to build the same graph again
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Directory where the rooms directory is created
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Prefix of the rooms directory name
    #[arg(long, default_value = config::ROOMS_DIR_PREFIX)]
    pub prefix: String,

    /// Print the generated graph in JSON format
    #[arg(short, long, default_value_t = false)]
    pub print: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

impl BuildArgs {
    /// Graph parameters from the command line and the reference room names.
    pub fn graph_params(&self) -> GraphParams {
        GraphParams {
            num_rooms: self.rooms,
            min_connections: self.min_connections,
            max_connections: self.max_connections,
            ..GraphParams::default()
        }
    }
}

/// Find the rooms and play the adventure game.
#[derive(Parser, Debug)]
#[command(name = "adventure", about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
pub struct PlayArgs {
    /// Directory where the most recent rooms directory is searched for
    #[arg(short, long, default_value = ".")]
    pub search_dir: PathBuf,

    /// Prefix of the rooms directory names
    #[arg(long, default_value = config::ROOMS_DIR_PREFIX)]
    pub prefix: String,

    /// Rooms directory to use instead of the most recent one
    #[arg(short, long)]
    pub rooms_dir: Option<PathBuf>,

    /// File where the current time is written
    #[arg(short, long, default_value = config::TIME_FILE)]
    pub time_file: PathBuf,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

/// Initialize the logger.
///
/// Debug messages are enabled when `debug` is true. Otherwise the level comes from the
/// `RUST_LOG` environment variable and defaults to warnings.
pub fn init_logger(debug: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    // A second initialization (in tests) is harmless
    let _ = builder.try_init();
}
