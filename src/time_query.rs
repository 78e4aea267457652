/*
time_query.rs

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

//! Report the current time from a background thread.
//!
//! A [`TimeKeeper`] object always keeps one background thread waiting on a single-use gate (a
//! bounded [`async_channel`] of capacity one).
//! When the player asks for the time, [`TimeKeeper::query`] opens the gate, waits for the
//! thread to finish (the thread writes the formatted time to the [`TimeRecord`] file), reads the
//! file back, and then starts the next waiting thread.
//!
//! Because the main loop joins the thread before reading the file, the write always happens
//! before the read. The two threads share no memory: the time only goes through the file.
//! At most one background thread exists at any time.

use async_channel::{Receiver, Sender};
use chrono::Local;
use log::debug;
use std::io;
use std::thread::{self, JoinHandle};

use crate::error::{AdventureError, Result};
use crate::saver::time_record::{self, TimeRecord};

/// Background thread waiting for its gate to open.
struct TimeTask {
    gate: Sender<()>,
    handle: JoinHandle<Result<()>>,
}

impl TimeTask {
    /// Start the thread. It blocks until the gate opens, then writes the time and exits.
    ///
    /// If the gate is closed without being opened, then the thread exits without writing.
    fn spawn(record: TimeRecord, cycle: usize) -> Result<Self> {
        let (gate, receiver): (Sender<()>, Receiver<()>) = async_channel::bounded(1);

        let handle = thread::Builder::new()
            .name(format!("time-query-{cycle}"))
            .spawn(move || -> Result<()> {
                if receiver.recv_blocking().is_err() {
                    debug!("Time query {cycle} cancelled");
                    return Ok(());
                }
                let now: String = time_record::format_time(&Local::now());
                debug!("Time query {cycle}: {now}");
                record.write(&now)
            })
            .map_err(|e| AdventureError::io("cannot start the time thread", e))?;

        Ok(Self { gate, handle })
    }

    /// Open the gate and wait for the thread to finish.
    fn complete(self) -> Result<()> {
        // The receiver only goes away if the thread died, which join() reports below
        let _ = self.gate.send_blocking(());
        self.handle.join().map_err(|_| {
            AdventureError::io(
                "the time thread stopped unexpectedly",
                io::Error::other("thread panicked"),
            )
        })?
    }

    /// Close the gate without opening it and wait for the thread to exit.
    fn cancel(self) {
        self.gate.close();
        let _ = self.handle.join();
    }
}

/// Object that answers the time queries.
pub struct TimeKeeper {
    record: TimeRecord,

    /// The waiting thread. None only if it could not be started.
    task: Option<TimeTask>,

    /// Number of started threads.
    cycle: usize,
}

impl TimeKeeper {
    /// Create the object and start the first waiting thread.
    pub fn new(record: TimeRecord) -> Result<Self> {
        let mut keeper = Self {
            record,
            task: None,
            cycle: 0,
        };
        keeper.arm()?;
        Ok(keeper)
    }

    /// Start the next waiting thread.
    fn arm(&mut self) -> Result<()> {
        self.cycle += 1;
        self.task = Some(TimeTask::spawn(self.record.clone(), self.cycle)?);
        Ok(())
    }

    /// Path to the time record file.
    pub fn record(&self) -> &TimeRecord {
        &self.record
    }

    /// Release the waiting thread, wait for it to record the time, and return that time.
    ///
    /// A new thread is started for the next query, even when this one failed.
    ///
    /// # Errors
    ///
    /// Return a [`AdventureError::Io`] error if the time cannot be written or read back.
    /// The error does not prevent later queries.
    pub fn query(&mut self) -> Result<String> {
        let ret: Result<String> = match self.task.take() {
            Some(task) => task.complete().and_then(|()| self.record.read()),
            None => Err(AdventureError::io(
                "no time thread is running",
                io::Error::other("not started"),
            )),
        };
        let armed: Result<()> = self.arm();
        let time: String = ret?;
        armed?;
        Ok(time)
    }

    /// Stop the waiting thread.
    pub fn shutdown(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }
}

impl Drop for TimeKeeper {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn query_twice() {
        let tmp = tempfile::tempdir().unwrap();
        let file: PathBuf = tmp.path().join("currentTime.txt");
        let mut keeper: TimeKeeper = TimeKeeper::new(TimeRecord::new(&file)).unwrap();

        // Nothing is written until the first query
        assert!(!file.exists());

        let t1: String = keeper.query().unwrap();
        assert!(!t1.is_empty());
        assert_eq!(std::fs::read_to_string(&file).unwrap(), t1);

        let t2: String = keeper.query().unwrap();
        assert!(t2.contains(", "));
        assert_eq!(keeper.cycle, 3);
    }

    #[test]
    fn failure_is_recoverable() {
        let tmp = tempfile::tempdir().unwrap();
        let dir: PathBuf = tmp.path().join("later");
        let mut keeper: TimeKeeper =
            TimeKeeper::new(TimeRecord::new(&dir.join("currentTime.txt"))).unwrap();

        assert!(matches!(keeper.query(), Err(AdventureError::Io { .. })));

        std::fs::create_dir(&dir).unwrap();
        assert!(keeper.query().is_ok());
    }

    #[test]
    fn shutdown_without_query_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let file: PathBuf = tmp.path().join("currentTime.txt");
        let mut keeper: TimeKeeper = TimeKeeper::new(TimeRecord::new(&file)).unwrap();
        keeper.shutdown();
        assert!(!file.exists());
        assert!(keeper.query().is_err());
    }
}
