/*
config.rs

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

//! Reference constants for building and playing the rooms.
//!
//! Every value here is a default: the command-line options in [`crate::cli_options`] can
//! override them.

/// Identities that the room builder picks from.
pub const ROOM_NAMES: [&str; 10] = [
    "Basement", "Attic", "Ballroom", "Dining", "Kitchen", "Library", "Bathroom", "Bedroom",
    "Trophy", "Study",
];

/// Number of rooms in a generated graph.
pub const NUM_OF_ROOMS: usize = 7;

/// Minimum number of outbound connections of every room.
pub const MIN_CONNECTIONS: usize = 3;

/// Maximum number of outbound connections of every room.
pub const MAX_CONNECTIONS: usize = 6;

/// Maximum number of characters in a room identity.
pub const MAX_NAME_CHARS: usize = 8;

/// Prefix of the directories that hold the room files.
pub const ROOMS_DIR_PREFIX: &str = "rooms.";

/// Suffix appended to the room identity to build the room file name.
pub const ROOM_FILE_SUFFIX: &str = "_room";

/// Prefix of the temporary file that records the player path.
pub const PATH_FILE_PREFIX: &str = "tmpfile.";

/// File where the background task writes the current time.
pub const TIME_FILE: &str = "currentTime.txt";

/// Number of random draws allowed when picking one end of a new connection.
///
/// Reaching that number means the parameters leave no room for a valid connection.
pub const MAX_DRAWS: usize = 10_000;

/// Number of complete graphs to try before giving up on a connected one.
pub const MAX_GRAPH_ATTEMPTS: usize = 100;

pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";
