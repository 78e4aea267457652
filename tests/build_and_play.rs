/*
build_and_play.rs

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

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::{HashMap, VecDeque};
use std::io::Cursor;
use std::path::PathBuf;

use adventure::config;
use adventure::console::{Console, Outcome};
use adventure::error::AdventureError;
use adventure::game::Game;
use adventure::generator::params::GraphParams;
use adventure::generator::random_graph::RandomGraph;
use adventure::graph::Graph;
use adventure::saver::discovery;
use adventure::saver::path_log::PathLog;
use adventure::saver::rooms::SaverRooms;
use adventure::saver::time_record::TimeRecord;
use adventure::time_query::TimeKeeper;

fn generate(seed: u64) -> Graph {
    RandomGraph::new(GraphParams::default())
        .generate(&mut StdRng::seed_from_u64(seed))
        .unwrap()
}

/// Shortest list of moves from the start room to the end room.
fn moves_to_end(graph: &Graph) -> Vec<String> {
    let start: &str = graph.start_room().name();
    let end: &str = graph.end_room().name();
    let mut previous: HashMap<&str, &str> = HashMap::new();
    let mut queue: VecDeque<&str> = VecDeque::from([start]);

    while let Some(name) = queue.pop_front() {
        if name == end {
            break;
        }
        for next in graph.find_room(name).unwrap().connections() {
            if next != start && !previous.contains_key(next.as_str()) {
                previous.insert(next.as_str(), name);
                queue.push_back(next.as_str());
            }
        }
    }

    let mut moves: Vec<String> = vec![end.to_string()];
    let mut name: &str = end;
    while let Some(p) = previous.get(name) {
        if *p == start {
            break;
        }
        moves.push(p.to_string());
        name = *p;
    }
    moves.reverse();
    moves
}

#[test]
fn saved_graph_loads_back_identical() {
    for seed in 0..20 {
        let tmp = tempfile::tempdir().unwrap();
        let graph: Graph = generate(seed);
        let saver: SaverRooms = SaverRooms::create(tmp.path(), config::ROOMS_DIR_PREFIX).unwrap();
        saver.save_graph(&graph).unwrap();

        let loaded: Graph = SaverRooms::open(saver.dir()).load_graph().unwrap();
        assert_eq!(loaded.len(), graph.len());
        for room in graph.rooms() {
            let other = loaded.find_room(room.name()).unwrap();
            assert_eq!(other.room_type(), room.room_type());
            assert_eq!(other.connections(), room.connections());
        }
        loaded
            .check_invariants(config::MIN_CONNECTIONS, config::MAX_CONNECTIONS)
            .unwrap();
    }
}

#[test]
fn discover_and_play_to_the_end() {
    let tmp = tempfile::tempdir().unwrap();
    let graph: Graph = generate(2025);
    let saver: SaverRooms = SaverRooms::create(tmp.path(), config::ROOMS_DIR_PREFIX).unwrap();
    saver.save_graph(&graph).unwrap();

    let found: PathBuf =
        discovery::find_latest_rooms_dir(tmp.path(), config::ROOMS_DIR_PREFIX).unwrap();
    assert_eq!(found, saver.dir());
    let loaded: Graph = SaverRooms::open(&found).load_graph().unwrap();

    let moves: Vec<String> = moves_to_end(&loaded);
    let input: String = format!("Nowhere\ntime\n{}\n", moves.join("\n"));

    let mut game: Game = Game::new(loaded);
    let mut time_keeper: TimeKeeper =
        TimeKeeper::new(TimeRecord::new(&tmp.path().join(config::TIME_FILE))).unwrap();
    let mut path_log: PathLog = PathLog::create_in(tmp.path()).unwrap();

    let mut console = Console::new(Cursor::new(input), Vec::new());
    let outcome: Outcome = console
        .run(&mut game, &mut time_keeper, &mut path_log)
        .unwrap();
    assert_eq!(outcome, Outcome::Finished);
    assert_eq!(game.steps(), moves.len());
    assert_eq!(game.path().len(), moves.len() + 1);
    assert_eq!(game.path()[0], graph.start_room().name());

    let out: String = String::from_utf8(console.into_output()).unwrap();
    assert!(out.contains("HUH? I DON'T UNDERSTAND THAT ROOM. TRY AGAIN"));
    assert!(out.contains(&format!("YOU TOOK {} STEPS.", moves.len())));
    assert!(out.ends_with(&format!("{}\n", game.path().join("\n"))));

    let time: String = std::fs::read_to_string(tmp.path().join(config::TIME_FILE)).unwrap();
    assert!(out.contains(&format!("\n{time}\n\n")));

    let log_file: PathBuf = path_log.path().to_path_buf();
    path_log.close().unwrap();
    assert!(!log_file.exists());
}

#[test]
fn no_rooms_directory() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir(tmp.path().join("other.1")).unwrap();
    let ret = discovery::find_latest_rooms_dir(tmp.path(), config::ROOMS_DIR_PREFIX);
    assert!(matches!(ret, Err(AdventureError::Discovery { .. })));
}
