/*
time_record.rs

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

//! File that holds the last formatted time.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AdventureError, Result};

/// Format of the recorded time, for example `1:03pm, Tuesday, October 20, 2026`.
pub const TIME_FORMAT: &str = "%-I:%M%P, %A, %B %d, %Y";

/// Return the formatted time.
pub fn format_time<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format(TIME_FORMAT).to_string()
}

/// The time record file. Each write replaces the previous content.
#[derive(Debug, Clone)]
pub struct TimeRecord {
    file: PathBuf,
}

impl TimeRecord {
    pub fn new(file: &Path) -> Self {
        Self {
            file: file.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file
    }

    /// Replace the content of the file with the given time.
    pub fn write(&self, time: &str) -> Result<()> {
        fs::write(&self.file, time)
            .map_err(|e| AdventureError::io(format!("cannot write {}", self.file.display()), e))
    }

    /// Return the first line of the file.
    pub fn read(&self) -> Result<String> {
        let content: String = fs::read_to_string(&self.file)
            .map_err(|e| AdventureError::io(format!("cannot read {}", self.file.display()), e))?;
        Ok(content.lines().next().unwrap_or_default().to_string())
    }
}
