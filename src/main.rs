/*
main.rs

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

use clap::Parser;
use log::{error, info};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use adventure::cli_options::{self, PlayArgs};
use adventure::console::{Console, Outcome};
use adventure::error::Result;
use adventure::game::Game;
use adventure::graph::Graph;
use adventure::saver::discovery;
use adventure::saver::path_log::PathLog;
use adventure::saver::rooms::SaverRooms;
use adventure::saver::time_record::TimeRecord;
use adventure::time_query::TimeKeeper;

fn main() -> ExitCode {
    let args: PlayArgs = PlayArgs::parse();
    cli_options::init_logger(args.debug);

    match run(&args) {
        Ok(Outcome::Finished) => ExitCode::SUCCESS,
        Ok(Outcome::InputClosed) => {
            eprintln!("adventure: input closed before reaching the end room");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e}");
            eprintln!("adventure: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &PlayArgs) -> Result<Outcome> {
    // Start the time thread first, so that it is waiting before the game begins
    let mut time_keeper: TimeKeeper = TimeKeeper::new(TimeRecord::new(&args.time_file))?;

    let rooms_dir: PathBuf = match &args.rooms_dir {
        Some(dir) => dir.clone(),
        None => discovery::find_latest_rooms_dir(&args.search_dir, &args.prefix)?,
    };
    info!("Playing with {rooms_dir:?}");
    let graph: Graph = SaverRooms::open(&rooms_dir).load_graph()?;

    let mut game: Game = Game::new(graph);
    let mut path_log: PathLog = PathLog::create_in(Path::new("."))?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let outcome: Outcome = console.run(&mut game, &mut time_keeper, &mut path_log)?;

    time_keeper.shutdown();
    path_log.close()?;
    Ok(outcome)
}
