/*
buildrooms.rs

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
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::process::ExitCode;

use adventure::cli_options::{self, BuildArgs};
use adventure::error::{AdventureError, Result};
use adventure::generator::random_graph::RandomGraph;
use adventure::graph::Graph;
use adventure::saver::rooms::SaverRooms;

fn main() -> ExitCode {
    let args: BuildArgs = BuildArgs::parse();
    cli_options::init_logger(args.debug);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("buildrooms: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &BuildArgs) -> Result<()> {
    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // The graph is complete before anything is written
    let mut generator: RandomGraph = RandomGraph::new(args.graph_params());
    let graph: Graph = generator.generate(&mut rng)?;
    info!(
        "Graph generated in {} draws, {} attempts, {}s",
        generator.iteration, generator.attempts, generator.duration
    );

    let saver: SaverRooms = SaverRooms::create(&args.output_dir, &args.prefix)?;
    saver.save_graph(&graph)?;
    info!("Rooms written to {:?}", saver.dir());

    if args.print {
        let json: String = serde_json::to_string_pretty(&graph).map_err(|e| {
            AdventureError::io("cannot print the graph", std::io::Error::other(e))
        })?;
        println!("{json}");
    }
    Ok(())
}
