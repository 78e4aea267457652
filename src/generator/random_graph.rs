/*
random_graph.rs

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

//! Generate a random room graph.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use std::time::Instant;

use super::params::GraphParams;
use crate::config;
use crate::error::{AdventureError, Result};
use crate::graph::Graph;
use crate::room::{Room, RoomType};

/// [`RandomGraph`] object.
pub struct RandomGraph {
    /// Parameters of the graph to build.
    pub params: GraphParams,

    /// Number of random draws it took to generate the last graph.
    pub iteration: usize,

    /// Number of graphs built for the last generation. A graph is built again when its end room
    /// cannot be reached from its start room.
    pub attempts: usize,

    /// Duration in seconds it took to generate the last graph.
    pub duration: f32,
}

impl RandomGraph {
    /// Create the object.
    pub fn new(params: GraphParams) -> Self {
        Self {
            params,
            iteration: 0,
            attempts: 0,
            duration: 0.0,
        }
    }

    /// Generate and return a random graph.
    ///
    /// # Errors
    ///
    /// The method returns a [`AdventureError::Configuration`] error if the parameters are not
    /// valid, or if no complete graph with a reachable end room is found after
    /// [`config::MAX_GRAPH_ATTEMPTS`] tries.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Graph> {
        self.params.validate()?;

        self.iteration = 0;
        self.attempts = 0;
        self.duration = 0.0;
        let start: Instant = Instant::now();

        debug!(
            "Number of rooms = {}  Connections = {}..{}  Names = {}",
            self.params.num_rooms,
            self.params.min_connections,
            self.params.max_connections,
            self.params.names.len()
        );

        while self.attempts < config::MAX_GRAPH_ATTEMPTS {
            self.attempts += 1;

            let mut rooms: Vec<Room> = self.pick_rooms(rng);
            let mut stuck: bool = false;
            while !self.is_graph_full(&rooms) {
                if !self.add_random_connection(&mut rooms, rng)? {
                    stuck = true;
                    break;
                }
            }
            if stuck {
                debug!("    Back: no connection left for the rooms that need one");
                continue;
            }

            let graph: Graph = Graph::from_rooms(rooms).map_err(AdventureError::Configuration)?;
            if graph.is_end_reachable() {
                self.duration = start.elapsed().as_secs_f32();
                debug!(
                    "Iterations = {}  Attempts = {}  Duration = {}",
                    self.iteration, self.attempts, self.duration
                );
                return Ok(graph);
            }
            debug!(
                "    Back: {} cannot be reached from {}",
                graph.end_room().name(),
                graph.start_room().name()
            );
        }

        self.duration = start.elapsed().as_secs_f32();
        Err(AdventureError::Configuration(format!(
            "no complete graph with a reachable end room after {} attempts",
            self.attempts
        )))
    }

    /// Pick the room identities and assign the room types.
    ///
    /// The names are shuffled (Fisher-Yates) and the first ones are kept, so that the rooms are
    /// a random subset of the names. The first room is the start room and the last one is the
    /// end room.
    fn pick_rooms<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Room> {
        let mut names: Vec<&str> = self.params.names.iter().map(String::as_str).collect();
        names.shuffle(rng);

        let last: usize = self.params.num_rooms - 1;
        names
            .iter()
            .take(self.params.num_rooms)
            .enumerate()
            .map(|(i, name)| {
                let room_type: RoomType = match i {
                    0 => RoomType::Start,
                    i if i == last => RoomType::End,
                    _ => RoomType::Mid,
                };
                Room::new(name, room_type)
            })
            .collect()
    }

    /// Whether all the rooms have the minimum number of connections.
    fn is_graph_full(&self, rooms: &[Room]) -> bool {
        rooms
            .iter()
            .all(|r| r.degree() >= self.params.min_connections)
    }

    /// Whether two rooms that are not full and not connected yet remain.
    fn has_free_pair(&self, rooms: &[Room]) -> bool {
        let max: usize = self.params.max_connections;
        rooms.iter().enumerate().any(|(i, a)| {
            a.degree() < max
                && rooms[i + 1..]
                    .iter()
                    .any(|b| b.degree() < max && !a.is_connected_to(b.name()))
        })
    }

    /// Connect two random rooms that are not full and not connected yet.
    ///
    /// The first room is drawn among the rooms that are not full. The second room is drawn
    /// among the other rooms that are not full and not yet connected to the first one. If no
    /// second room is found after a few draws, then another first room is drawn.
    ///
    /// Return false, without drawing, when no such pair of rooms remains. The graph under
    /// construction is then a dead end.
    fn add_random_connection<R: Rng + ?Sized>(
        &mut self,
        rooms: &mut [Room],
        rng: &mut R,
    ) -> Result<bool> {
        if !self.has_free_pair(rooms) {
            return Ok(false);
        }

        let max: usize = self.params.max_connections;
        let num_rooms: usize = rooms.len();
        let draws_per_room: usize = num_rooms * num_rooms;
        let mut draws: usize = 0;

        while draws < config::MAX_DRAWS {
            // First room
            let a: usize = rng.random_range(0..num_rooms);
            draws += 1;
            self.iteration += 1;
            if rooms[a].degree() >= max {
                continue;
            }

            // Second room
            for _ in 0..draws_per_room {
                let b: usize = rng.random_range(0..num_rooms);
                draws += 1;
                self.iteration += 1;
                if b == a || rooms[b].degree() >= max || rooms[a].is_connected_to(rooms[b].name())
                {
                    continue;
                }

                let name_a: String = rooms[a].name().to_string();
                let name_b: String = rooms[b].name().to_string();
                rooms[a].add_connection(&name_b, max)?;
                rooms[b].add_connection(&name_a, max)?;
                return Ok(true);
            }
            debug!("    No room found for {}", rooms[a].name());
        }

        debug!("    Back: no connection drawn after {draws} random draws");
        Ok(false)
    }
}
