// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

#![forbid(unsafe_code)]

//! Shortest paths from a virtual start node and greedy set cover.
//!
//! The crate contains two independent algorithms:
//!
//! - [`shortestpath`]: Dijkstra's algorithm on a weighted [`Digraph`]
//!   whose costs and parents are seeded by the caller, together with the
//!   reconstruction of a path from the resulting parent map,
//! - [`setcover`]: the greedy approximation algorithm for the set cover
//!   problem.
//!
//! All maps and sets are insertion ordered, so whenever an algorithm has to
//! choose between equally good alternatives it picks the first one in the
//! order given by the caller.

mod num {
    pub use num_traits as traits;
}

pub mod error;
pub use self::error::{Error, Result};

// # Data structures

pub mod graph;
pub use self::graph::Digraph;

pub mod collections;

// # Algorithms

pub mod setcover;
pub mod shortestpath;
