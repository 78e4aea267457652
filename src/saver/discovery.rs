/*
discovery.rs

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

//! Find the most recent rooms directory.
//!
//! The selection itself, [`select_latest`], works on `(name, modification time)` pairs so that
//! it does not depend on the file system.
//! [`find_latest_rooms_dir`] collects these pairs from a directory and applies the selection.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{AdventureError, Result};

/// Return the name of the most recently modified entry whose name starts with `prefix`.
///
/// An entry replaces the current selection only if its modification time is strictly greater,
/// so the first of several entries with the same time wins.
pub fn select_latest<I>(entries: I, prefix: &str) -> Option<String>
where
    I: IntoIterator<Item = (String, SystemTime)>,
{
    let mut latest: Option<(String, SystemTime)> = None;

    for (name, modified) in entries {
        if !name.starts_with(prefix) {
            continue;
        }
        let newer: bool = match &latest {
            Some((_, t)) => modified > *t,
            None => true,
        };
        if newer {
            latest = Some((name, modified));
        }
    }
    latest.map(|(name, _)| name)
}

/// Return the path of the most recently modified directory of `search_dir` whose name starts
/// with `prefix`.
///
/// # Errors
///
/// Return a [`AdventureError::Discovery`] error if there is no such directory, or a
/// [`AdventureError::Io`] error if `search_dir` or one of the candidates cannot be examined.
pub fn find_latest_rooms_dir(search_dir: &Path, prefix: &str) -> Result<PathBuf> {
    let context = || format!("cannot list {}", search_dir.display());
    let mut candidates: Vec<(String, SystemTime)> = Vec::new();

    for entry in fs::read_dir(search_dir).map_err(|e| AdventureError::io(context(), e))? {
        let entry = entry.map_err(|e| AdventureError::io(context(), e))?;
        let name: String = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with(prefix) {
            continue;
        }

        // Follow symbolic links, like stat(2)
        let path: PathBuf = entry.path();
        let metadata = fs::metadata(&path)
            .map_err(|e| AdventureError::io(format!("cannot examine {}", path.display()), e))?;
        if !metadata.is_dir() {
            continue;
        }
        let modified: SystemTime = metadata
            .modified()
            .map_err(|e| AdventureError::io(format!("cannot examine {}", path.display()), e))?;
        debug!("Candidate {name} modified at {modified:?}");
        candidates.push((name, modified));
    }

    match select_latest(candidates, prefix) {
        Some(name) => Ok(search_dir.join(name)),
        None => Err(AdventureError::Discovery {
            dir: search_dir.to_path_buf(),
            prefix: prefix.to_string(),
        }),
    }
}
