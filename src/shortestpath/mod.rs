/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Shortest path algorithms.
//!
//! The algorithms in this module compute shortest paths from a virtual
//! origin node. The origin itself does not take part in the computation:
//! the caller seeds the cost map with the direct successors of the origin
//! (all other nodes at [`Cost::Infinite`]) and the parent map with the
//! origin as parent of these successors. The helper [`seed`] builds both
//! maps from a graph.
//!
//! The result of a computation is the final cost map and the parent map.
//! The latter is turned into a path by [`reconstruct_path`].

pub mod dijkstra;
pub use self::dijkstra::{compute_shortest_paths, find_path, lowest_cost_node, ShortestPaths};

pub mod heap;

use crate::error::{Error, Result};
use crate::graph::Digraph;

use crate::num::traits::Zero;

use indexmap::IndexMap;

use std::fmt::{self, Debug, Display};
use std::hash::Hash;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The currently best known distance of a node.
///
/// `Finite(_)` is always smaller than `Infinite`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Cost<W> {
    /// The node has been reached with this distance.
    Finite(W),
    /// The node has not been reached (yet).
    Infinite,
}

impl<W> Cost<W> {
    /// Return `true` iff the node has been reached.
    pub fn is_finite(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    /// Return the distance if the node has been reached.
    pub fn finite(self) -> Option<W> {
        match self {
            Cost::Finite(w) => Some(w),
            Cost::Infinite => None,
        }
    }
}

impl<W> Default for Cost<W> {
    fn default() -> Self {
        Cost::Infinite
    }
}

impl<W> From<W> for Cost<W> {
    fn from(w: W) -> Self {
        Cost::Finite(w)
    }
}

impl<W: Display> Display for Cost<W> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cost::Finite(w) => w.fmt(fmt),
            Cost::Infinite => write!(fmt, "inf"),
        }
    }
}

/// The cost of each known node.
pub type Costs<N, W> = IndexMap<N, Cost<W>>;

/// The node from which each reached node has been reached.
pub type Parents<N> = IndexMap<N, N>;

/// Build the initial costs and parents for a search from `origin`.
///
/// The costs contain every node of the graph except the origin, in graph
/// order. The successors of the origin get the weight of the connecting
/// edge and the origin as parent, all other nodes are
/// [`Cost::Infinite`].
///
/// Fails with [`Error::UnknownNode`] if `origin` is not a node of the graph.
///
/// # Example
///
/// ```
/// use route_cover::Digraph;
/// use route_cover::shortestpath::{seed, Cost};
///
/// let g = Digraph::from_adjacencies(vec![
///     ("Start", vec![("A", 5), ("B", 2)]),
///     ("A", vec![("C", 4)]),
///     ("B", vec![]),
///     ("C", vec![]),
/// ]);
/// let (costs, parents) = seed(&g, &"Start").unwrap();
///
/// assert_eq!(
///     costs.into_iter().collect::<Vec<_>>(),
///     vec![("A", Cost::Finite(5)), ("B", Cost::Finite(2)), ("C", Cost::Infinite)]
/// );
/// assert_eq!(parents.into_iter().collect::<Vec<_>>(), vec![("A", "Start"), ("B", "Start")]);
/// ```
pub fn seed<N, W>(g: &Digraph<N, W>, origin: &N) -> Result<(Costs<N, W>, Parents<N>)>
where
    N: Hash + Eq + Clone + Debug,
    W: Copy,
{
    let succs = g.successors(origin).ok_or_else(|| Error::unknown_node(origin, None))?;

    let mut costs: Costs<N, W> = g
        .nodes()
        .filter(|u| *u != origin)
        .map(|u| (u.clone(), Cost::Infinite))
        .collect();
    let mut parents = Parents::new();

    for (v, &w) in succs.filter(|(v, _)| *v != origin) {
        costs.insert(v.clone(), Cost::Finite(w));
        parents.insert(v.clone(), origin.clone());
    }

    Ok((costs, parents))
}

/// Compute the path from `origin` to `destination` from a parent map.
///
/// The returned nodes start with `origin` and end with `destination`. If
/// `destination` equals `origin` the path consists of the origin only.
///
/// Fails with [`Error::PathNotFound`] if the parent links starting at
/// `destination` do not lead back to `origin`, i.e. the destination has
/// never been reached.
///
/// # Example
///
/// ```
/// use route_cover::shortestpath::{reconstruct_path, Parents};
///
/// let parents: Parents<_> = vec![("A", "Start"), ("D", "A"), ("Finish", "D")].into_iter().collect();
///
/// assert_eq!(reconstruct_path(&parents, &"Start", &"Finish").unwrap(), vec!["Start", "A", "D", "Finish"]);
/// assert_eq!(reconstruct_path(&parents, &"Start", &"Start").unwrap(), vec!["Start"]);
/// assert!(reconstruct_path(&parents, &"Start", &"B").is_err());
/// ```
pub fn reconstruct_path<N>(parents: &Parents<N>, origin: &N, destination: &N) -> Result<Vec<N>>
where
    N: Hash + Eq + Clone + Debug,
{
    let mut path = vec![destination.clone()];
    let mut u = destination;
    while u != origin {
        // a path without repeated nodes uses each parent link at most once
        if path.len() > parents.len() {
            return Err(Error::path_not_found(origin, destination));
        }
        u = parents.get(u).ok_or_else(|| Error::path_not_found(origin, destination))?;
        path.push(u.clone());
    }
    path.reverse();
    Ok(path)
}

/// Return the total weight of the edges along `path`.
///
/// Returns `None` if two consecutive nodes of the path are not connected
/// by an edge. The empty path and a path consisting of one node have
/// weight zero.
pub fn path_cost<N, W>(g: &Digraph<N, W>, path: &[N]) -> Option<W>
where
    N: Hash + Eq + Clone,
    W: Copy + Zero,
{
    path.windows(2)
        .try_fold(W::zero(), |sum, uv| g.weight(&uv[0], &uv[1]).map(|w| sum + w))
}
