/*
params.rs

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

//! Parameters of the room graph.

use std::collections::HashSet;

use crate::config;
use crate::error::{AdventureError, Result};

/// Description of the graph to generate.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphParams {
    /// Identities to pick the rooms from.
    pub names: Vec<String>,

    /// Number of rooms in the graph.
    pub num_rooms: usize,

    /// Minimum number of connections per room.
    pub min_connections: usize,

    /// Maximum number of connections per room.
    pub max_connections: usize,
}

impl Default for GraphParams {
    fn default() -> Self {
        Self {
            names: config::ROOM_NAMES.iter().map(|n| n.to_string()).collect(),
            num_rooms: config::NUM_OF_ROOMS,
            min_connections: config::MIN_CONNECTIONS,
            max_connections: config::MAX_CONNECTIONS,
        }
    }
}

impl GraphParams {
    /// Verify that the parameters can produce a graph.
    ///
    /// # Errors
    ///
    /// Return a [`AdventureError::Configuration`] error that describes the first problem found.
    pub fn validate(&self) -> Result<()> {
        let fail = |msg: String| Err(AdventureError::Configuration(msg));

        if self.num_rooms < 2 {
            return fail(format!("a graph needs at least 2 rooms, not {}", self.num_rooms));
        }
        if self.num_rooms > self.names.len() {
            return fail(format!(
                "cannot pick {} rooms from {} names",
                self.num_rooms,
                self.names.len()
            ));
        }
        if self.min_connections > self.max_connections {
            return fail(format!(
                "minimum connections ({}) is greater than maximum connections ({})",
                self.min_connections, self.max_connections
            ));
        }
        if self.min_connections > self.num_rooms - 1 {
            return fail(format!(
                "a room cannot have {} connections in a graph of {} rooms",
                self.min_connections, self.num_rooms
            ));
        }
        if self.max_connections > self.num_rooms - 1 {
            return fail(format!(
                "maximum connections ({}) must be lower than the number of rooms ({})",
                self.max_connections, self.num_rooms
            ));
        }
        // Every connection adds one to the count of two rooms
        if self.min_connections == self.max_connections
            && self.num_rooms * self.min_connections % 2 == 1
        {
            return fail(format!(
                "{} rooms cannot all have exactly {} connections",
                self.num_rooms, self.min_connections
            ));
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(self.names.len());
        for name in &self.names {
            if name.is_empty() {
                return fail("empty room name".to_string());
            }
            if name.chars().any(char::is_whitespace) {
                return fail(format!("room name \"{name}\" contains a space"));
            }
            if name.chars().count() > config::MAX_NAME_CHARS {
                return fail(format!(
                    "room name \"{name}\" is longer than {} characters",
                    config::MAX_NAME_CHARS
                ));
            }
            if !seen.insert(name) {
                return fail(format!("room name \"{name}\" is listed twice"));
            }
        }
        Ok(())
    }
}
