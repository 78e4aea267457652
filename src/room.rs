/*
room.rs

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

//! Rooms and their types.

use serde::Serialize;
use std::str::FromStr;
use strum_macros::Display;

use crate::error::{AdventureError, Result};

/// Role of a room in the graph.
///
/// A graph has exactly one [`RoomType::Start`] room and one [`RoomType::End`] room.
/// The displayed names are the tokens used in the room files.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
pub enum RoomType {
    #[strum(serialize = "START_ROOM")]
    #[serde(rename = "START_ROOM")]
    Start,

    #[strum(serialize = "MID_ROOM")]
    #[serde(rename = "MID_ROOM")]
    Mid,

    #[strum(serialize = "END_ROOM")]
    #[serde(rename = "END_ROOM")]
    End,
}

/// Token that [`RoomType::from_str`] does not recognize.
#[derive(Debug, PartialEq)]
pub struct UnknownRoomType(pub String);

impl FromStr for RoomType {
    type Err = UnknownRoomType;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "START_ROOM" => Ok(RoomType::Start),
            "MID_ROOM" => Ok(RoomType::Mid),
            "END_ROOM" => Ok(RoomType::End),
            _ => Err(UnknownRoomType(s.to_string())),
        }
    }
}

/// A room: its identity, its type, and its outbound connections.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,

    #[serde(rename = "type")]
    room_type: RoomType,

    /// Identities of the connected rooms, in insertion order.
    connections: Vec<String>,
}

impl Room {
    /// Create a [`Room`] object without connections.
    pub fn new(name: &str, room_type: RoomType) -> Self {
        Self {
            name: name.to_string(),
            room_type,
            connections: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn set_room_type(&mut self, room_type: RoomType) {
        self.room_type = room_type;
    }

    /// Outbound connections in the order they were added.
    pub fn connections(&self) -> &[String] {
        &self.connections
    }

    /// Number of outbound connections.
    pub fn degree(&self) -> usize {
        self.connections.len()
    }

    pub fn is_connected_to(&self, name: &str) -> bool {
        self.connections.iter().any(|c| c == name)
    }

    /// Append an outbound connection.
    ///
    /// # Errors
    ///
    /// The connection is refused when it targets the room itself, when it already exists, or
    /// when the room already has `max_connections` connections.
    pub fn add_connection(&mut self, name: &str, max_connections: usize) -> Result<()> {
        if name == self.name {
            return Err(AdventureError::Configuration(format!(
                "room {} cannot connect to itself",
                self.name
            )));
        }
        if self.is_connected_to(name) {
            return Err(AdventureError::Configuration(format!(
                "room {} is already connected to {name}",
                self.name
            )));
        }
        if self.connections.len() >= max_connections {
            return Err(AdventureError::Configuration(format!(
                "room {} already has {max_connections} connections",
                self.name
            )));
        }
        self.connections.push(name.to_string());
        Ok(())
    }

    /// Whether the room is the end of the game.
    pub fn is_end(&self) -> bool {
        self.room_type == RoomType::End
    }
}
