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

//! Dijkstra's shortest path algorithm.
//!
//! Dijkstra's algorithm computes the shortest paths from some origin node to
//! all other nodes of a directed graph with non-negative edge weights.
//!
//! This implementation selects the next node by a linear scan over the cost
//! map, i.e. one search takes $O(n^2 + m)$ time. Among several unprocessed
//! nodes with the same smallest cost the first one in the cost map is
//! selected. See [`heap`][crate::shortestpath::heap] for a variant based on a
//! priority queue.
//!
//! # Example
//!
//! ```
//! use route_cover::Digraph;
//! use route_cover::shortestpath::{dijkstra, reconstruct_path, seed, Cost};
//!
//! let g = Digraph::from_adjacencies(vec![
//!     ("Start", vec![("A", 5), ("B", 2)]),
//!     ("A", vec![("C", 4), ("D", 2)]),
//!     ("B", vec![("A", 8), ("D", 7)]),
//!     ("C", vec![("Finish", 3), ("D", 6)]),
//!     ("D", vec![("Finish", 1)]),
//!     ("Finish", vec![]),
//! ]);
//!
//! let (costs, parents) = seed(&g, &"Start").unwrap();
//! let (costs, parents) = dijkstra::compute_shortest_paths(&g, costs, parents).unwrap();
//!
//! assert_eq!(costs[&"Finish"], Cost::Finite(8));
//! assert_eq!(
//!     reconstruct_path(&parents, &"Start", &"Finish").unwrap(),
//!     vec!["Start", "A", "D", "Finish"]
//! );
//! ```

use super::{reconstruct_path, seed, Cost, Costs, Parents};
use crate::error::{Error, Result};
use crate::graph::Digraph;

use crate::num::traits::Zero;

use indexmap::IndexSet;
use log::{debug, trace};

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Return the unprocessed node with the smallest finite cost.
///
/// If several nodes have the same smallest cost, the first one in `costs`
/// is returned. Returns `None` if all unprocessed nodes have infinite
/// cost.
pub fn lowest_cost_node<'c, N, W>(costs: &'c Costs<N, W>, processed: &IndexSet<N>) -> Option<(&'c N, W)>
where
    N: Hash + Eq,
    W: Copy + PartialOrd,
{
    let mut lowest: Option<(&N, W)> = None;
    for (u, &cost) in costs {
        if let Cost::Finite(cost) = cost {
            if lowest.map_or(true, |(_, c)| cost < c) && !processed.contains(u) {
                lowest = Some((u, cost));
            }
        }
    }
    lowest
}

/// Verify the graph and that every node in `costs` belongs to it.
pub(crate) fn check_input<N, W>(g: &Digraph<N, W>, costs: &Costs<N, W>) -> Result<()>
where
    N: Hash + Eq + Clone + Debug,
{
    g.check()?;
    match costs.keys().find(|u| !g.contains(u)) {
        Some(u) => Err(Error::unknown_node(u, None)),
        None => Ok(()),
    }
}

/// Return the origins of a search: the parents that are not in `costs`.
///
/// An origin has distance zero, so no edge leading back into it is ever
/// relaxed.
pub(crate) fn origins<N, W>(costs: &Costs<N, W>, parents: &Parents<N>) -> HashSet<N>
where
    N: Hash + Eq + Clone,
{
    parents.values().filter(|u| !costs.contains_key(*u)).cloned().collect()
}

/// Dijkstra search iterator.
///
/// Each call to `next` processes one node: the unprocessed node with the
/// smallest cost is selected, its outgoing edges are relaxed and the node
/// together with its final cost is returned. The iterator ends when no
/// unprocessed node with finite cost remains.
///
/// Edges leading back into an origin (a parent of the initial parent map
/// that is not contained in the initial cost map) are ignored, so the
/// origin never gets a cost or a parent.
pub struct ShortestPaths<'a, N, W>
where
    N: Hash + Eq,
{
    graph: &'a Digraph<N, W>,
    costs: Costs<N, W>,
    parents: Parents<N>,
    origins: HashSet<N>,
    processed: IndexSet<N>,
}

impl<'a, N, W> ShortestPaths<'a, N, W>
where
    N: Hash + Eq + Clone + Debug,
    W: Copy + PartialOrd + Zero + Debug,
{
    /// Start a search with the given initial costs and parents.
    ///
    /// Nodes missing in `costs` are treated as having infinite cost.
    ///
    /// Fails with [`Error::UnknownNode`] if some edge of the graph leads to
    /// a node that is not contained in the graph or if some node in `costs`
    /// is not contained in the graph.
    pub fn start(g: &'a Digraph<N, W>, costs: Costs<N, W>, parents: Parents<N>) -> Result<Self> {
        check_input(g, &costs)?;
        Ok(ShortestPaths {
            graph: g,
            origins: origins(&costs, &parents),
            costs,
            parents,
            processed: IndexSet::new(),
        })
    }

    /// Run the search completely.
    pub fn run(&mut self) {
        while self.next().is_some() {}
    }

    /// Return the current costs.
    pub fn costs(&self) -> &Costs<N, W> {
        &self.costs
    }

    /// Return the current parents.
    pub fn parents(&self) -> &Parents<N> {
        &self.parents
    }

    /// Return the processed nodes in the order they have been processed.
    pub fn processed(&self) -> &IndexSet<N> {
        &self.processed
    }

    /// Return the current cost of node `u`.
    pub fn cost(&self, u: &N) -> Cost<W> {
        self.costs.get(u).copied().unwrap_or(Cost::Infinite)
    }

    /// Return the final (or current) costs and parents.
    pub fn into_parts(self) -> (Costs<N, W>, Parents<N>) {
        (self.costs, self.parents)
    }
}

impl<'a, N, W> Iterator for ShortestPaths<'a, N, W>
where
    N: Hash + Eq + Clone + Debug,
    W: Copy + PartialOrd + Zero + Debug,
{
    type Item = (N, W);

    fn next(&mut self) -> Option<(N, W)> {
        let (u, cost) = lowest_cost_node(&self.costs, &self.processed).map(|(u, cost)| (u.clone(), cost))?;
        debug!("Process {:?} at cost {:?}", u, cost);

        let g = self.graph;
        for (v, &weight) in g.successors(&u).into_iter().flatten() {
            if self.origins.contains(v) {
                continue;
            }
            let newcost = cost + weight;
            let improves = match self.costs.get(v) {
                Some(&old) => Cost::Finite(newcost) < old,
                None => true,
            };
            if improves {
                trace!("  relax {:?} -> {:?}: {:?}", u, v, newcost);
                self.costs.insert(v.clone(), Cost::Finite(newcost));
                self.parents.insert(v.clone(), u.clone());
            }
        }

        self.processed.insert(u.clone());
        Some((u, cost))
    }
}

/// Run Dijkstra's algorithm with the given initial costs and parents.
///
/// `costs` should contain the direct successors of the origin with the
/// weight of the connecting edge and all other nodes with
/// [`Cost::Infinite`], `parents` should contain the origin as parent of the
/// direct successors (see [`seed`]).
///
/// Returns the final costs and parents. Nodes that cannot be reached keep
/// infinite cost (or remain missing from the cost map) and have no parent.
///
/// Fails with [`Error::UnknownNode`] if the graph is malformed (see
/// [`ShortestPaths::start`]).
pub fn compute_shortest_paths<N, W>(
    g: &Digraph<N, W>,
    costs: Costs<N, W>,
    parents: Parents<N>,
) -> Result<(Costs<N, W>, Parents<N>)>
where
    N: Hash + Eq + Clone + Debug,
    W: Copy + PartialOrd + Zero + Debug,
{
    let mut search = ShortestPaths::start(g, costs, parents)?;
    search.run();
    Ok(search.into_parts())
}

/// Compute a shortest path from `origin` to `destination`.
///
/// This is a convenience wrapper around [`seed`], [`compute_shortest_paths`]
/// and [`reconstruct_path`]. It returns the nodes on the path and the
/// length of the path.
///
/// Fails with [`Error::PathNotFound`] if `destination` cannot be reached
/// from `origin`.
///
/// # Example
///
/// ```
/// use route_cover::Digraph;
/// use route_cover::shortestpath::find_path;
///
/// let mut g = Digraph::new();
/// g.add_edge("Start", "a", 1.5);
/// g.add_edge("a", "b", 0.5);
/// g.add_edge("Start", "b", 2.5);
/// g.add_node("c");
///
/// let (path, dist) = find_path(&g, &"Start", &"b").unwrap();
/// assert_eq!(path, vec!["Start", "a", "b"]);
/// assert_eq!(dist, 2.0);
///
/// assert!(find_path(&g, &"Start", &"c").is_err());
/// ```
pub fn find_path<N, W>(g: &Digraph<N, W>, origin: &N, destination: &N) -> Result<(Vec<N>, W)>
where
    N: Hash + Eq + Clone + Debug,
    W: Copy + PartialOrd + Zero + Debug,
{
    let (costs, parents) = seed(g, origin)?;
    let (costs, parents) = compute_shortest_paths(g, costs, parents)?;

    if destination == origin {
        return Ok((vec![origin.clone()], W::zero()));
    }

    match costs.get(destination) {
        Some(&Cost::Finite(dist)) => Ok((reconstruct_path(&parents, origin, destination)?, dist)),
        _ => Err(Error::path_not_found(origin, destination)),
    }
}
