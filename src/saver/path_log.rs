/*
path_log.rs

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

//! Record the path of the player.
//!
//! Each visited room is appended to a temporary file, one identity per line.
//! The file is read back when the player reaches the end room, and it is deleted when the
//! [`PathLog`] object is dropped.

use log::debug;
use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::config;
use crate::error::{AdventureError, Result};

pub struct PathLog {
    file: NamedTempFile,
}

impl PathLog {
    /// Create the temporary file in the given directory.
    ///
    /// The file name starts with the [`config::PATH_FILE_PREFIX`] prefix and the process
    /// identifier.
    pub fn create_in(dir: &Path) -> Result<Self> {
        let prefix: String = format!("{}{}.", config::PATH_FILE_PREFIX, std::process::id());
        let file: NamedTempFile = tempfile::Builder::new()
            .prefix(&prefix)
            .tempfile_in(dir)
            .map_err(|e| {
                AdventureError::io(format!("cannot create a path file in {}", dir.display()), e)
            })?;
        debug!("Path file: {:?}", file.path());
        Ok(Self { file })
    }

    /// Path to the temporary file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Append a room identity.
    pub fn record(&mut self, name: &str) -> Result<()> {
        writeln!(self.file, "{name}")
            .and_then(|()| self.file.flush())
            .map_err(|e| AdventureError::io(format!("cannot write {:?}", self.file.path()), e))
    }

    /// Read the recorded room identities, in the order they were recorded.
    pub fn read(&self) -> Result<Vec<String>> {
        let content: String = fs::read_to_string(self.file.path())
            .map_err(|e| AdventureError::io(format!("cannot read {:?}", self.file.path()), e))?;
        Ok(content.lines().map(str::to_string).collect())
    }

    /// Delete the temporary file.
    pub fn close(self) -> Result<()> {
        let path = self.file.path().to_path_buf();
        self.file
            .close()
            .map_err(|e| AdventureError::io(format!("cannot delete {path:?}"), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_read_close() {
        let tmp = tempfile::tempdir().unwrap();
        let mut log: PathLog = PathLog::create_in(tmp.path()).unwrap();
        let file_name: String = log.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(file_name.starts_with(&format!("tmpfile.{}.", std::process::id())));

        log.record("Kitchen").unwrap();
        log.record("Library").unwrap();
        assert_eq!(log.read().unwrap(), ["Kitchen", "Library"]);

        let path = log.path().to_path_buf();
        log.close().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn dropped_log_is_deleted() {
        let tmp = tempfile::tempdir().unwrap();
        let path = {
            let log: PathLog = PathLog::create_in(tmp.path()).unwrap();
            log.path().to_path_buf()
        };
        assert!(!path.exists());
    }
}
