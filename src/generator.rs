/*
generator.rs

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

//! Generate random room graphs.
//!
//! A [`params::GraphParams`] object describes the graph to build: the pool of identities to pick
//! from, the number of rooms, and the bounds on the number of connections per room.
//! [`params::GraphParams::validate`] rejects the parameters that cannot produce a graph before
//! any random draw.
//!
//! To build a graph, create a [`random_graph::RandomGraph`] object and use its
//! [`random_graph::RandomGraph::generate`] method.
//! The method picks the room identities, assigns the room types, and adds random connections
//! until every room has enough of them.
//! The random draws are bounded: when a build is stuck with rooms that still need connections,
//! the method starts over, and returns an error only after a fixed number of builds.

pub mod params;
pub mod random_graph;
