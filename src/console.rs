/*
console.rs

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

//! Line-oriented interface of the game.
//!
//! The [`Console`] object displays the current room and its connections, prompts the player,
//! and processes one line of input at a time:
//!
//! * the name of a connection moves the player to that room,
//! * `time` displays the current time without changing the game,
//! * anything else displays an error and the same room again.
//!
//! The loop ends when the player reaches the end room, or when the input is closed.

use log::{debug, warn};
use std::io::{BufRead, Write};

use crate::error::{AdventureError, Result};
use crate::game::Game;
use crate::saver::path_log::PathLog;
use crate::time_query::TimeKeeper;

/// Input that asks for the current time.
pub const TIME_COMMAND: &str = "time";

/// How the session ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The player reached the end room.
    Finished,

    /// The input was closed before the player reached the end room.
    InputClosed,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Return the output, for inspecting what was displayed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn print(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(|e| AdventureError::io("cannot write to the console", e))
    }

    /// Read one line, without its line terminator. Return None at the end of the input.
    ///
    /// Bytes that are not valid UTF-8 are replaced, so that such a line never matches a room.
    fn read_choice(&mut self) -> Result<Option<String>> {
        let mut buf: Vec<u8> = Vec::new();
        let n: usize = self
            .input
            .read_until(b'\n', &mut buf)
            .map_err(|e| AdventureError::io("cannot read the player input", e))?;
        if n == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Display the current room and its connections.
    fn display_room(&mut self, game: &Game) -> Result<()> {
        let text: String = format!(
            "CURRENT ROOM: {}\nPOSSIBLE CONNECTIONS: {}.\nWHERE TO? >",
            game.current_room().name(),
            game.connections().join(", ")
        );
        self.print(&text)
    }

    /// Play the game until the player reaches the end room.
    ///
    /// Every visited room, starting with the start room, is recorded in `path_log`, which is
    /// read back to display the path at the end.
    ///
    /// # Errors
    ///
    /// Invalid room names and time query failures are reported to the player and the game
    /// continues. Console and path file errors are returned.
    pub fn run(
        &mut self,
        game: &mut Game,
        time_keeper: &mut TimeKeeper,
        path_log: &mut PathLog,
    ) -> Result<Outcome> {
        path_log.record(game.current_room().name())?;

        while !game.is_finished() {
            self.display_room(game)?;

            let choice: String = match self.read_choice()? {
                Some(c) => c,
                None => {
                    debug!("Input closed in room {}", game.current_room().name());
                    self.print("\n")?;
                    return Ok(Outcome::InputClosed);
                }
            };

            if choice == TIME_COMMAND {
                match time_keeper.query() {
                    Ok(time) => self.print(&format!("\n{time}\n\n"))?,
                    Err(e) => {
                        warn!("Time query failed: {e}");
                        self.print(&format!("\nCANNOT GET THE TIME: {e}\n\n"))?;
                    }
                }
                continue;
            }

            match game.move_to(&choice) {
                Ok(room) => {
                    path_log.record(room.name())?;
                    self.print("\n")?;
                }
                Err(e) if e.is_recoverable() => {
                    debug!("{e}");
                    self.print("\nHUH? I DON'T UNDERSTAND THAT ROOM. TRY AGAIN\n\n")?;
                }
                Err(e) => return Err(e),
            }
        }

        let mut text: String = format!(
            "YOU HAVE FOUND THE END ROOM. CONGRATULATIONS!\n\
             YOU TOOK {} STEPS. YOUR PATH TO VICTORY WAS:\n",
            game.steps()
        );
        for name in path_log.read()? {
            text.push_str(&name);
            text.push('\n');
        }
        self.print(&text)?;
        Ok(Outcome::Finished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::house;
    use crate::saver::time_record::TimeRecord;
    use std::io::Cursor;
    use tempfile::TempDir;

    struct Session {
        _tmp: TempDir,
        game: Game,
        time_keeper: TimeKeeper,
        path_log: PathLog,
    }

    fn session() -> Session {
        let tmp: TempDir = tempfile::tempdir().unwrap();
        let time_keeper =
            TimeKeeper::new(TimeRecord::new(&tmp.path().join("currentTime.txt"))).unwrap();
        let path_log: PathLog = PathLog::create_in(tmp.path()).unwrap();
        Session {
            _tmp: tmp,
            game: Game::new(house()),
            time_keeper,
            path_log,
        }
    }

    fn play(s: &mut Session, input: impl AsRef<[u8]>) -> (Outcome, String) {
        let mut console = Console::new(Cursor::new(input.as_ref().to_vec()), Vec::new());
        let outcome: Outcome = console
            .run(&mut s.game, &mut s.time_keeper, &mut s.path_log)
            .unwrap();
        (outcome, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn walk_to_the_end() {
        let mut s: Session = session();
        let (outcome, out) = play(&mut s, "Library\nAttic\nStudy\n");

        assert_eq!(outcome, Outcome::Finished);
        assert_eq!(
            out,
            "CURRENT ROOM: Kitchen\nPOSSIBLE CONNECTIONS: Attic, Library.\nWHERE TO? >\n\
             CURRENT ROOM: Library\nPOSSIBLE CONNECTIONS: Kitchen, Study.\nWHERE TO? >\
             \nHUH? I DON'T UNDERSTAND THAT ROOM. TRY AGAIN\n\n\
             CURRENT ROOM: Library\nPOSSIBLE CONNECTIONS: Kitchen, Study.\nWHERE TO? >\n\
             YOU HAVE FOUND THE END ROOM. CONGRATULATIONS!\n\
             YOU TOOK 2 STEPS. YOUR PATH TO VICTORY WAS:\n\
             Kitchen\nLibrary\nStudy\n"
        );
        assert_eq!(s.game.steps(), 2);
        assert_eq!(s.game.path(), ["Kitchen", "Library", "Study"]);
    }

    #[test]
    fn time_does_not_move() {
        let mut s: Session = session();
        let (outcome, out) = play(&mut s, "time\ntime\n");

        assert_eq!(outcome, Outcome::InputClosed);
        assert_eq!(out.matches("CURRENT ROOM: Kitchen\n").count(), 3);
        assert_eq!(out.matches("\n\n").count(), 2);
        assert_eq!(s.game.steps(), 0);
        assert_eq!(s.game.path(), ["Kitchen"]);
        assert_eq!(s.path_log.read().unwrap(), ["Kitchen"]);
    }

    #[test]
    fn windows_line_endings() {
        let mut s: Session = session();
        let (outcome, _) = play(&mut s, "Library\r\nStudy\r\n");
        assert_eq!(outcome, Outcome::Finished);
    }

    #[test]
    fn invalid_utf8_is_not_a_room() {
        let mut s: Session = session();
        let (outcome, out) = play(&mut s, b"Caf\xe9\nLibrary\nStudy\n");

        assert_eq!(outcome, Outcome::Finished);
        assert_eq!(out.matches("HUH? I DON'T UNDERSTAND THAT ROOM").count(), 1);
        assert_eq!(out.matches("CURRENT ROOM: Kitchen\n").count(), 2);
        assert_eq!(s.game.path(), ["Kitchen", "Library", "Study"]);
    }

    #[test]
    fn input_closed() {
        let mut s: Session = session();
        let (outcome, out) = play(&mut s, "Library");
        assert_eq!(outcome, Outcome::InputClosed);
        assert!(out.ends_with(
            "CURRENT ROOM: Library\nPOSSIBLE CONNECTIONS: Kitchen, Study.\nWHERE TO? >\n"
        ));
        assert_eq!(s.game.current_room().name(), "Library");
    }
}
