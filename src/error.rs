/*
error.rs

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

//! Errors raised while building, loading, and playing the rooms.
//!
//! Only [`AdventureError::InvalidInput`] is recoverable: the prompt loop reports it and asks
//! again. All the other errors stop the program when they occur at startup.
//! The time query is the exception: its I/O errors are displayed and the game goes on.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Shorthand for results that carry an [`AdventureError`].
pub type Result<T> = std::result::Result<T, AdventureError>;

#[derive(Debug, Error)]
pub enum AdventureError {
    /// The graph parameters cannot produce a valid graph.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// No rooms directory could be found.
    #[error("no directory starting with \"{prefix}\" in {}", dir.display())]
    Discovery { dir: PathBuf, prefix: String },

    /// A room file does not follow the expected format.
    #[error("{}:{line}: {reason}", file.display())]
    Parse {
        file: PathBuf,
        line: usize,
        reason: String,
    },

    /// A file or a directory cannot be created, read, or written.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// The player typed a room name that is not a connection of the current room.
    #[error("\"{0}\" is not a connection of the current room")]
    InvalidInput(String),
}

impl AdventureError {
    /// Build an [`AdventureError::Io`] error that names the file involved.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        AdventureError::Io {
            context: context.into(),
            source,
        }
    }

    /// Build an [`AdventureError::Parse`] error.
    pub fn parse(file: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        AdventureError::Parse {
            file: file.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Whether the prompt loop can recover from the error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AdventureError::InvalidInput(_))
    }
}
