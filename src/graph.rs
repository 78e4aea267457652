/*
graph.rs

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

//! Graph of rooms.
//!
//! A [`Graph`] is an ordered list of [`Room`] objects.
//! The connections are logically undirected: when room A lists room B, room B lists room A.
//! Each direction is stored in the corresponding room.
//!
//! [`Graph::from_rooms`] only verifies the structure that the game needs (unique identities,
//! one start room, one end room, known connection targets).
//! [`Graph::check_invariants`] verifies the stronger properties that the room builder
//! guarantees (degree bounds, no self connection, no duplicate, symmetry).

use serde::Serialize;
use std::collections::{HashMap, HashSet, VecDeque};

use crate::room::{Room, RoomType};

#[derive(Serialize, Debug, Clone)]
pub struct Graph {
    rooms: Vec<Room>,

    /// Position of each room in [`Graph::rooms`], indexed by the room identity.
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.rooms == other.rooms
    }
}

impl Graph {
    /// Create a [`Graph`] object from its rooms.
    ///
    /// # Errors
    ///
    /// Return a message describing the first structural defect found.
    pub fn from_rooms(rooms: Vec<Room>) -> Result<Self, String> {
        let mut index: HashMap<String, usize> = HashMap::with_capacity(rooms.len());
        for (i, room) in rooms.iter().enumerate() {
            if index.insert(room.name().to_string(), i).is_some() {
                return Err(format!("room {} is defined more than once", room.name()));
            }
        }

        for room_type in [RoomType::Start, RoomType::End] {
            let count: usize = rooms.iter().filter(|r| r.room_type() == room_type).count();
            if count != 1 {
                return Err(format!("expected one {room_type}, found {count}"));
            }
        }

        for room in &rooms {
            if let Some(unknown) = room.connections().iter().find(|c| !index.contains_key(*c)) {
                return Err(format!(
                    "room {} is connected to the unknown room {unknown}",
                    room.name()
                ));
            }
        }

        Ok(Self { rooms, index })
    }

    /// Rooms in their original order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Return the room with the given identity.
    pub fn find_room(&self, name: &str) -> Option<&Room> {
        self.index.get(name).map(|i| &self.rooms[*i])
    }

    /// Return the identities of the rooms that the given room connects to, in insertion order.
    pub fn outbound_targets<'a>(&self, room: &'a Room) -> &'a [String] {
        room.connections()
    }

    /// Return the start room.
    pub fn start_room(&self) -> &Room {
        self.room_of_type(RoomType::Start)
    }

    /// Return the end room.
    pub fn end_room(&self) -> &Room {
        self.room_of_type(RoomType::End)
    }

    fn room_of_type(&self, room_type: RoomType) -> &Room {
        // `from_rooms` guarantees that the start and end rooms exist
        self.rooms
            .iter()
            .find(|r| r.room_type() == room_type)
            .unwrap_or(&self.rooms[0])
    }

    /// Whether the end room can be reached from the start room.
    pub fn is_end_reachable(&self) -> bool {
        let start: &str = self.start_room().name();
        let end: &str = self.end_room().name();
        let mut visited: HashSet<&str> = HashSet::with_capacity(self.rooms.len());
        let mut queue: VecDeque<&str> = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);
        while let Some(name) = queue.pop_front() {
            if name == end {
                return true;
            }
            if let Some(room) = self.find_room(name) {
                for next in room.connections() {
                    if visited.insert(next.as_str()) {
                        queue.push_back(next.as_str());
                    }
                }
            }
        }
        false
    }

    /// Verify the properties of a generated graph.
    ///
    /// # Errors
    ///
    /// Return a message describing the first violated property.
    pub fn check_invariants(
        &self,
        min_connections: usize,
        max_connections: usize,
    ) -> Result<(), String> {
        for room in &self.rooms {
            let degree: usize = room.degree();
            if degree < min_connections || degree > max_connections {
                return Err(format!(
                    "room {} has {degree} connections, expected {min_connections} to \
                     {max_connections}",
                    room.name()
                ));
            }

            let mut seen: HashSet<&str> = HashSet::with_capacity(degree);
            for target in room.connections() {
                if target == room.name() {
                    return Err(format!("room {} is connected to itself", room.name()));
                }
                if !seen.insert(target.as_str()) {
                    return Err(format!(
                        "room {} lists {target} more than once",
                        room.name()
                    ));
                }
                match self.find_room(target) {
                    Some(other) if other.is_connected_to(room.name()) => (),
                    _ => {
                        return Err(format!(
                            "room {} lists {target} but {target} does not list it back",
                            room.name()
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a graph from `(name, type, connections)` descriptions.
    pub(crate) fn graph_from(desc: &[(&str, RoomType, &[&str])]) -> Graph {
        let rooms: Vec<Room> = desc
            .iter()
            .map(|(name, room_type, connections)| {
                let mut room = Room::new(name, *room_type);
                for c in connections.iter() {
                    room.add_connection(c, usize::MAX).unwrap();
                }
                room
            })
            .collect();
        Graph::from_rooms(rooms).unwrap()
    }

    /// The small house used by the game tests.
    pub(crate) fn house() -> Graph {
        graph_from(&[
            ("Kitchen", RoomType::Start, &["Attic", "Library"]),
            ("Attic", RoomType::Mid, &["Kitchen"]),
            ("Library", RoomType::Mid, &["Kitchen", "Study"]),
            ("Study", RoomType::End, &["Library"]),
        ])
    }

    #[test]
    fn lookup() {
        let g: Graph = house();
        assert_eq!(g.len(), 4);
        assert_eq!(g.start_room().name(), "Kitchen");
        assert_eq!(g.end_room().name(), "Study");
        let library: &Room = g.find_room("Library").unwrap();
        assert_eq!(g.outbound_targets(library), ["Kitchen", "Study"]);
        assert!(g.find_room("library").is_none());
    }

    #[test]
    fn structural_defects() {
        let dup = vec![
            Room::new("Kitchen", RoomType::Start),
            Room::new("Kitchen", RoomType::End),
        ];
        assert!(Graph::from_rooms(dup).is_err());

        let no_end = vec![
            Room::new("Kitchen", RoomType::Start),
            Room::new("Attic", RoomType::Mid),
        ];
        assert_eq!(
            Graph::from_rooms(no_end).unwrap_err(),
            "expected one END_ROOM, found 0"
        );

        let mut start = Room::new("Kitchen", RoomType::Start);
        start.add_connection("Cellar", 6).unwrap();
        let unknown = vec![start, Room::new("Attic", RoomType::End)];
        assert!(Graph::from_rooms(unknown).unwrap_err().contains("Cellar"));
    }

    #[test]
    fn reachability() {
        assert!(house().is_end_reachable());

        let split: Graph = graph_from(&[
            ("Kitchen", RoomType::Start, &["Attic"]),
            ("Attic", RoomType::Mid, &["Kitchen"]),
            ("Library", RoomType::Mid, &["Study"]),
            ("Study", RoomType::End, &["Library"]),
        ]);
        assert!(!split.is_end_reachable());
    }

    #[test]
    fn invariants() {
        let g: Graph = house();
        assert!(g.check_invariants(1, 2).is_ok());
        assert!(g.check_invariants(2, 6).unwrap_err().contains("Attic"));

        let one_way: Graph = graph_from(&[
            ("Kitchen", RoomType::Start, &["Study"]),
            ("Study", RoomType::End, &[]),
        ]);
        assert!(one_way.check_invariants(0, 6).unwrap_err().contains("does not list it back"));
    }
}
