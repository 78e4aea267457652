/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The player starts in the start room and moves from room to room by following connections.
//! The game is finished when the player enters the end room.

use log::debug;

use crate::error::{AdventureError, Result};
use crate::graph::Graph;
use crate::room::Room;

/// State of the game.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    /// The player is not in the end room yet.
    InTransit,

    /// The player reached the end room. No more moves are accepted.
    Finished,
}

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    /// The rooms, read-only for the duration of the game.
    graph: Graph,

    /// Identity of the room where the player is.
    current: String,

    /// Identities of the visited rooms, starting with the start room.
    path: Vec<String>,

    /// Number of valid moves.
    steps: usize,
}

impl Game {
    /// Create a [`Game`] object with the player in the start room.
    pub fn new(graph: Graph) -> Self {
        let start: String = graph.start_room().name().to_string();
        Self {
            graph,
            current: start.clone(),
            path: vec![start],
            steps: 0,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Return the room where the player is.
    pub fn current_room(&self) -> &Room {
        self.graph
            .find_room(&self.current)
            .unwrap_or_else(|| self.graph.start_room())
    }

    /// Identities of the rooms the player can go to, in display order.
    pub fn connections(&self) -> &[String] {
        self.graph.outbound_targets(self.current_room())
    }

    pub fn state(&self) -> GameState {
        if self.current_room().is_end() {
            GameState::Finished
        } else {
            GameState::InTransit
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state() == GameState::Finished
    }

    /// Visited rooms, including the start room and the current room.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Number of valid moves so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Move the player to the given room.
    ///
    /// # Errors
    ///
    /// Return a [`AdventureError::InvalidInput`] error, and leave the game unchanged, if the
    /// given name is not exactly one of the connections of the current room, or if the game is
    /// finished.
    pub fn move_to(&mut self, name: &str) -> Result<&Room> {
        if self.is_finished() || !self.current_room().is_connected_to(name) {
            return Err(AdventureError::InvalidInput(name.to_string()));
        }
        let room: &Room = self
            .graph
            .find_room(name)
            .ok_or_else(|| AdventureError::InvalidInput(name.to_string()))?;

        debug!("Move {} -> {}", self.current, room.name());
        self.current = room.name().to_string();
        self.path.push(self.current.clone());
        self.steps += 1;
        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::house;

    #[test]
    fn start_in_start_room() {
        let game: Game = Game::new(house());
        assert_eq!(game.current_room().name(), "Kitchen");
        assert_eq!(game.connections(), ["Attic", "Library"]);
        assert_eq!(game.path(), ["Kitchen"]);
        assert_eq!(game.steps(), 0);
        assert_eq!(game.state(), GameState::InTransit);
    }

    #[test]
    fn valid_then_invalid_move() {
        let mut game: Game = Game::new(house());

        assert_eq!(game.move_to("Library").unwrap().name(), "Library");
        assert_eq!(game.steps(), 1);
        assert_eq!(game.path(), ["Kitchen", "Library"]);

        // Attic is a connection of Kitchen, not of Library
        assert!(matches!(
            game.move_to("Attic"),
            Err(AdventureError::InvalidInput(_))
        ));
        assert_eq!(game.steps(), 1);
        assert_eq!(game.path(), ["Kitchen", "Library"]);
        assert_eq!(game.current_room().name(), "Library");
    }

    #[test]
    fn invalid_input_leaves_game_unchanged() {
        let mut game: Game = Game::new(house());
        for input in ["", "library", " Library", "Library ", "Study", "Kitchen", "time"] {
            assert!(game.move_to(input).is_err(), "{input:?} accepted");
            assert_eq!(game.current_room().name(), "Kitchen");
            assert_eq!(game.path(), ["Kitchen"]);
            assert_eq!(game.steps(), 0);
        }
    }

    #[test]
    fn reach_end_room() {
        let mut game: Game = Game::new(house());
        game.move_to("Library").unwrap();
        game.move_to("Study").unwrap();

        assert!(game.is_finished());
        assert_eq!(game.steps(), 2);
        assert_eq!(game.path(), ["Kitchen", "Library", "Study"]);

        // No more moves once finished
        assert!(game.move_to("Library").is_err());
        assert_eq!(game.steps(), 2);
    }
}
