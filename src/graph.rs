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

//! A weighted directed graph stored as nested adjacency maps.
//!
//! The graph maps each node to a map from its successors to the weight of
//! the connecting edge. Nodes and successors keep their insertion order, so
//! iterating over a graph is deterministic.
//!
//! # Example
//!
//! ```
//! use route_cover::Digraph;
//!
//! let mut g = Digraph::new();
//! g.add_edge("Start", "A", 5);
//! g.add_edge("A", "Finish", 1);
//!
//! assert_eq!(g.num_nodes(), 3);
//! assert_eq!(g.num_edges(), 2);
//! assert_eq!(g.weight(&"A", &"Finish"), Some(1));
//! assert_eq!(g.nodes().cloned().collect::<Vec<_>>(), vec!["Start", "A", "Finish"]);
//! assert!(g.check().is_ok());
//! ```

use crate::error::{Error, Result};

use indexmap::map::{Iter as MapIter, Keys};
use indexmap::IndexMap;

use std::fmt::Debug;
use std::hash::Hash;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A directed graph with weighted edges.
///
/// Every node referenced as a successor should itself be a node of the
/// graph (possibly with no successors). Graphs built with
/// [`Digraph::add_edge`] always satisfy this; graphs created from raw
/// adjacency data may not, which can be tested with [`Digraph::check`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(transparent))]
pub struct Digraph<N, W>
where
    N: Hash + Eq,
{
    adj: IndexMap<N, IndexMap<N, W>>,
}

impl<N, W> Default for Digraph<N, W>
where
    N: Hash + Eq,
{
    fn default() -> Self {
        Digraph { adj: IndexMap::new() }
    }
}

impl<N, W> From<IndexMap<N, IndexMap<N, W>>> for Digraph<N, W>
where
    N: Hash + Eq,
{
    fn from(adj: IndexMap<N, IndexMap<N, W>>) -> Self {
        Digraph { adj }
    }
}

impl<N, W> Digraph<N, W>
where
    N: Hash + Eq + Clone,
{
    /// Create a new, empty graph.
    pub fn new() -> Self {
        Default::default()
    }

    /// Create a graph from a list of nodes with their successors.
    ///
    /// The successors are *not* added as nodes automatically, i.e. a node
    /// without outgoing edges must be listed with an empty successor list.
    ///
    /// # Example
    ///
    /// ```
    /// use route_cover::Digraph;
    ///
    /// let g = Digraph::from_adjacencies(vec![
    ///     ("Start", vec![("A", 5), ("B", 2)]),
    ///     ("A", vec![("B", 1)]),
    ///     ("B", vec![]),
    /// ]);
    /// assert_eq!(g.num_edges(), 3);
    /// assert!(g.check().is_ok());
    /// ```
    pub fn from_adjacencies<I, J>(adjacencies: I) -> Self
    where
        I: IntoIterator<Item = (N, J)>,
        J: IntoIterator<Item = (N, W)>,
    {
        Digraph {
            adj: adjacencies
                .into_iter()
                .map(|(u, succs)| (u, succs.into_iter().collect()))
                .collect(),
        }
    }

    /// Add a node without edges.
    ///
    /// Return `true` iff `u` had not been contained in the graph before.
    pub fn add_node(&mut self, u: N) -> bool {
        let mut new = false;
        self.adj.entry(u).or_insert_with(|| {
            new = true;
            IndexMap::new()
        });
        new
    }

    /// Add an edge from `u` to `v`.
    ///
    /// Both end nodes are added to the graph if necessary. If the edge
    /// already exists its weight is replaced and the old weight is
    /// returned.
    pub fn add_edge(&mut self, u: N, v: N, weight: W) -> Option<W> {
        let old = self.adj.entry(u).or_default().insert(v.clone(), weight);
        self.add_node(v);
        old
    }

    /// Return `true` iff `u` is a node of the graph.
    pub fn contains(&self, u: &N) -> bool {
        self.adj.contains_key(u)
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    /// Return the number of edges.
    pub fn num_edges(&self) -> usize {
        self.adj.values().map(IndexMap::len).sum()
    }

    /// Return an iterator over all nodes in insertion order.
    pub fn nodes(&self) -> Keys<'_, N, IndexMap<N, W>> {
        self.adj.keys()
    }

    /// Return the successors of `u` with the edge weights.
    ///
    /// Returns `None` if `u` is not a node of the graph.
    pub fn successors(&self, u: &N) -> Option<MapIter<'_, N, W>> {
        self.adj.get(u).map(IndexMap::iter)
    }

    /// Return the weight of the edge from `u` to `v` if it exists.
    pub fn weight(&self, u: &N, v: &N) -> Option<W>
    where
        W: Copy,
    {
        self.adj.get(u).and_then(|succs| succs.get(v)).copied()
    }

    /// Verify that every successor is a node of the graph.
    ///
    /// The first successor (in iteration order) that is not a node is
    /// reported as [`Error::UnknownNode`].
    pub fn check(&self) -> Result<()>
    where
        N: Debug,
    {
        for (u, succs) in &self.adj {
            if let Some(v) = succs.keys().find(|v| !self.adj.contains_key(*v)) {
                return Err(Error::unknown_node(v, Some(u)));
            }
        }
        Ok(())
    }
}
