/*
rooms.rs

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

//! Save and load a room graph as a directory of room files.
//!
//! The room builder creates a new directory for each graph, named after the process identifier
//! and the creation time, and writes one `<identity>_room` file per room in it.
//! The game loads every regular file of the directory back into a [`Graph`] object.

use log::debug;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use super::room_file;
use crate::config;
use crate::error::{AdventureError, Result};
use crate::graph::Graph;
use crate::room::Room;

/// Object to save and load the room files of a graph.
pub struct SaverRooms {
    /// Path to the rooms directory.
    dir: PathBuf,
}

impl SaverRooms {
    /// Create a new, uniquely named rooms directory under `parent`.
    ///
    /// # Errors
    ///
    /// The directory is never reused: if it already exists, an error is returned.
    pub fn create(parent: &Path, prefix: &str) -> Result<Self> {
        let dir: PathBuf = parent.join(unique_dir_name(prefix));
        fs::create_dir(&dir)
            .map_err(|e| AdventureError::io(format!("cannot create {}", dir.display()), e))?;
        debug!("Rooms directory: {dir:?}");
        Ok(Self { dir })
    }

    /// Use an existing rooms directory.
    pub fn open(dir: &Path) -> Self {
        debug!("Rooms directory: {dir:?}");
        Self {
            dir: dir.to_path_buf(),
        }
    }

    /// Path to the rooms directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path to the file of the given room.
    pub fn room_file(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}{}", config::ROOM_FILE_SUFFIX))
    }

    /// Write one file per room.
    pub fn save_graph(&self, graph: &Graph) -> Result<()> {
        for room in graph.rooms() {
            let path: PathBuf = self.room_file(room.name());
            let write = || -> std::io::Result<()> {
                let file: File = File::create(&path)?;
                let mut writer: BufWriter<File> = BufWriter::new(file);
                writer.write_all(room_file::format_room(room).as_bytes())?;
                writer.flush()
            };
            write().map_err(|e| AdventureError::io(format!("cannot write {}", path.display()), e))?;
        }
        Ok(())
    }

    /// Read all the regular files of the directory and build the graph.
    ///
    /// The files are read in the order of their names, which gives the order of the rooms in
    /// the graph.
    pub fn load_graph(&self) -> Result<Graph> {
        let context = || format!("cannot read {}", self.dir.display());

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(|e| AdventureError::io(context(), e))? {
            let entry = entry.map_err(|e| AdventureError::io(context(), e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| AdventureError::io(context(), e))?;
            if file_type.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();

        let mut rooms: Vec<Room> = Vec::with_capacity(files.len());
        for path in &files {
            let content: String = fs::read_to_string(path)
                .map_err(|e| AdventureError::io(format!("cannot read {}", path.display()), e))?;
            rooms.push(room_file::parse_room(path, &content)?);
        }
        debug!("Loaded {} rooms from {:?}", rooms.len(), self.dir);

        Graph::from_rooms(rooms).map_err(|reason| AdventureError::parse(&self.dir, 0, reason))
    }
}

/// Format of the creation time in the rooms directory names.
const DIR_TIME_FORMAT: &str = "%Y%m%d%H%M%S%9f";

/// Return a directory name that no other run produces: the prefix, the process identifier, and
/// the local creation time down to the nanosecond.
pub fn unique_dir_name(prefix: &str) -> String {
    format!(
        "{prefix}{}.{}",
        std::process::id(),
        Local::now().format(DIR_TIME_FORMAT)
    )
}
