/*
lib.rs

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

//! Build random graphs of rooms and explore them.
//!
//! The `buildrooms` program picks random rooms, connects them (see [`generator`]), and writes
//! them to a new rooms directory (see [`saver::rooms`]).
//!
//! The `adventure` program loads the most recent rooms directory (see [`saver::discovery`]) and
//! lets the player walk from the start room to the end room (see [`game`] and [`console`]).
//! At the prompt, the player can also ask for the current time, which a background thread
//! records (see [`time_query`]).

pub mod cli_options;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod generator;
pub mod graph;
pub mod room;
pub mod saver;
pub mod time_query;
