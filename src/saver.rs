/*
saver.rs

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

//! Files shared between the room builder and the game.
//!
//! * [`rooms::SaverRooms`] creates the rooms directory and writes one file per room, or loads
//!   the graph back from such a directory.
//!   [`room_file`] defines the format of these files.
//! * [`discovery`] finds the most recent rooms directory.
//! * [`path_log::PathLog`] records the rooms that the player visits in a temporary file.
//! * [`time_record::TimeRecord`] is the file where the background task writes the current time.

pub mod discovery;
pub mod path_log;
pub mod room_file;
pub mod rooms;
pub mod time_record;
