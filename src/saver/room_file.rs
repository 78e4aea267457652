/*
room_file.rs

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

//! Format of the room files.
//!
//! A room file is a list of lines:
//!
//! ```text
//! ROOM NAME: Kitchen
//! CONNECTION 1: Attic
//! CONNECTION 2: Library
//! CONNECTION 3: Study
//! ROOM TYPE: START_ROOM
//! ```
//!
//! The value of each line is the word after the last space.
//! The connection lines are in the order the connections were created.
//! The first line that is not a connection line must be the room type line.

use std::fmt::Write;
use std::path::Path;

use crate::error::{AdventureError, Result};
use crate::room::{Room, RoomType};

const NAME_LABEL: &str = "ROOM NAME:";
const CONNECTION_LABEL: &str = "CONNECTION ";
const TYPE_LABEL: &str = "ROOM TYPE:";

/// Return the content of the file for the given room.
pub fn format_room(room: &Room) -> String {
    let mut s: String = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(s, "{NAME_LABEL} {}", room.name());
    for (i, c) in room.connections().iter().enumerate() {
        let _ = writeln!(s, "{CONNECTION_LABEL}{}: {c}", i + 1);
    }
    let _ = writeln!(s, "{TYPE_LABEL} {}", room.room_type());
    s
}

/// Return the word after the last space of the line.
fn last_word(line: &str) -> &str {
    line.rsplit(' ').next().unwrap_or(line)
}

/// Build a [`Room`] object from the content of a room file.
///
/// The `file` parameter is only used in error messages.
///
/// # Errors
///
/// Return a [`AdventureError::Parse`] error when a line is missing or malformed.
pub fn parse_room(file: &Path, content: &str) -> Result<Room> {
    let mut lines = content.lines().enumerate().map(|(i, l)| (i + 1, l.trim_end()));

    // Room name
    let (num, line) = lines
        .next()
        .ok_or_else(|| AdventureError::parse(file, 1, "empty file"))?;
    if !line.starts_with(NAME_LABEL) {
        return Err(AdventureError::parse(
            file,
            num,
            format!("expected \"{NAME_LABEL}\", found \"{line}\""),
        ));
    }
    let name: &str = last_word(line);
    if name.is_empty() || line.len() <= NAME_LABEL.len() {
        return Err(AdventureError::parse(file, num, "missing room name"));
    }

    // Connections, until the room type line
    let mut connections: Vec<&str> = Vec::new();
    let mut last_num: usize = num;
    let room_type: RoomType = loop {
        let (num, line) = lines.next().ok_or_else(|| {
            AdventureError::parse(file, last_num + 1, format!("missing \"{TYPE_LABEL}\" line"))
        })?;
        last_num = num;

        if line.starts_with(CONNECTION_LABEL) {
            let target: &str = last_word(line);
            if target.is_empty() || target.ends_with(':') {
                return Err(AdventureError::parse(file, num, "missing connection name"));
            }
            if target == name {
                return Err(AdventureError::parse(
                    file,
                    num,
                    format!("room {name} is connected to itself"),
                ));
            }
            if connections.contains(&target) {
                return Err(AdventureError::parse(
                    file,
                    num,
                    format!("connection {target} is listed twice"),
                ));
            }
            connections.push(target);
            continue;
        }

        if !line.starts_with(TYPE_LABEL) {
            return Err(AdventureError::parse(
                file,
                num,
                format!("expected \"{CONNECTION_LABEL}\" or \"{TYPE_LABEL}\", found \"{line}\""),
            ));
        }
        let word: &str = last_word(line);
        break word.parse::<RoomType>().map_err(|e| {
            AdventureError::parse(file, num, format!("unknown room type \"{}\"", e.0))
        })?;
    };

    if let Some((num, line)) = lines.find(|(_, l)| !l.is_empty()) {
        return Err(AdventureError::parse(
            file,
            num,
            format!("unexpected line after the room type: \"{line}\""),
        ));
    }

    let mut room: Room = Room::new(name, room_type);
    for c in connections {
        room.add_connection(c, usize::MAX)?;
    }
    Ok(room)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KITCHEN: &str = "ROOM NAME: Kitchen
CONNECTION 1: Attic
CONNECTION 2: Library
CONNECTION 3: Study
ROOM TYPE: START_ROOM
";

    fn parse(content: &str) -> Result<Room> {
        parse_room(Path::new("rooms.1/Kitchen_room"), content)
    }

    #[test]
    fn parse_and_format() {
        let room: Room = parse(KITCHEN).unwrap();
        assert_eq!(room.name(), "Kitchen");
        assert_eq!(room.room_type(), RoomType::Start);
        assert_eq!(room.connections(), ["Attic", "Library", "Study"]);
        assert_eq!(format_room(&room), KITCHEN);
    }

    #[test]
    fn crlf_line_endings() {
        let room: Room = parse(&KITCHEN.replace('\n', "\r\n")).unwrap();
        assert_eq!(room.connections(), ["Attic", "Library", "Study"]);
    }

    fn parse_error_line(content: &str) -> usize {
        match parse(content) {
            Err(AdventureError::Parse { line, .. }) => line,
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_files() {
        assert_eq!(parse_error_line(""), 1);
        assert_eq!(parse_error_line("NAME: Kitchen\n"), 1);
        assert_eq!(parse_error_line("ROOM NAME: Kitchen\nCONNECTION 1: Attic\n"), 3);
        assert_eq!(
            parse_error_line("ROOM NAME: Kitchen\nCONNECTION 1: Attic\nROOM TYPE: BIG_ROOM\n"),
            3
        );
        assert_eq!(
            parse_error_line("ROOM NAME: Kitchen\nDOOR 1: Attic\nROOM TYPE: MID_ROOM\n"),
            2
        );
        assert_eq!(
            parse_error_line("ROOM NAME: Kitchen\nCONNECTION 1: Kitchen\nROOM TYPE: MID_ROOM\n"),
            2
        );
        assert_eq!(
            parse_error_line(
                "ROOM NAME: Kitchen\nCONNECTION 1: Attic\nCONNECTION 2: Attic\n\
                 ROOM TYPE: MID_ROOM\n"
            ),
            3
        );
        assert_eq!(
            parse_error_line("ROOM NAME: Kitchen\nROOM TYPE: MID_ROOM\nCONNECTION 1: Attic\n"),
            3
        );
    }

    #[test]
    fn trailing_blank_lines_are_ignored() {
        let room: Room = parse(&format!("{KITCHEN}\n\n")).unwrap();
        assert_eq!(room.room_type(), RoomType::Start);
    }
}
