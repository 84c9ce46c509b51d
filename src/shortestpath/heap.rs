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

//! Dijkstra's algorithm with a priority queue.
//!
//! This variant computes the same costs as
//! [`dijkstra::compute_shortest_paths`][crate::shortestpath::dijkstra::compute_shortest_paths]
//! but selects the next node from a priority queue, which takes
//! $O((n + m) \log n)$ time. If several shortest paths to a node exist, the
//! parent may differ from the one found by the linear scan because nodes
//! with equal cost are not necessarily processed in cost map order.
//!
//! # Example
//!
//! ```
//! use route_cover::Digraph;
//! use route_cover::shortestpath::{heap, reconstruct_path, seed, Cost};
//!
//! let mut g = Digraph::new();
//! for &(u, v, w) in &[("Start", "a", 4), ("Start", "b", 1), ("b", "a", 2), ("a", "t", 1)] {
//!     g.add_edge(u, v, w);
//! }
//!
//! let (costs, parents) = seed(&g, &"Start").unwrap();
//! let (costs, parents) = heap::compute_shortest_paths(&g, costs, parents).unwrap();
//!
//! assert_eq!(costs[&"t"], Cost::Finite(4));
//! assert_eq!(reconstruct_path(&parents, &"Start", &"t").unwrap(), vec!["Start", "b", "a", "t"]);
//! ```

use super::dijkstra::{check_input, origins};
use super::{Cost, Costs, Parents};
use crate::collections::{BinHeap, ItemPriQueue};
use crate::error::Result;
use crate::graph::Digraph;

use crate::num::traits::Zero;

use log::{debug, trace};

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Run Dijkstra's algorithm using a binary heap.
///
/// The parameters and the result are the same as for
/// [`dijkstra::compute_shortest_paths`][crate::shortestpath::dijkstra::compute_shortest_paths].
pub fn compute_shortest_paths<N, W>(
    g: &Digraph<N, W>,
    costs: Costs<N, W>,
    parents: Parents<N>,
) -> Result<(Costs<N, W>, Parents<N>)>
where
    N: Hash + Eq + Clone + Debug,
    W: Copy + PartialOrd + Zero + Debug,
{
    compute_shortest_paths_with_queue(g, costs, parents, BinHeap::new())
}

/// Run Dijkstra's algorithm with a custom priority queue.
///
/// The queue is cleared before it is used, so it may be reused for several
/// computations.
pub fn compute_shortest_paths_with_queue<N, W, P>(
    g: &Digraph<N, W>,
    mut costs: Costs<N, W>,
    mut parents: Parents<N>,
    mut pqueue: P,
) -> Result<(Costs<N, W>, Parents<N>)>
where
    N: Hash + Eq + Clone + Debug,
    W: Copy + PartialOrd + Zero + Debug,
    P: ItemPriQueue<N, W>,
{
    check_input(g, &costs)?;
    pqueue.clear();

    let origins = origins(&costs, &parents);
    let mut items = HashMap::new();
    for (u, &cost) in &costs {
        if let Cost::Finite(cost) = cost {
            items.insert(u.clone(), pqueue.push(u.clone(), cost));
        }
    }

    let mut processed = HashSet::new();
    while let Some((u, cost)) = pqueue.pop_min() {
        items.remove(&u);
        debug!("Process {:?} at cost {:?}", u, cost);

        for (v, &weight) in g.successors(&u).into_iter().flatten() {
            if processed.contains(v) || origins.contains(v) {
                continue;
            }
            let newcost = cost + weight;
            let improves = match costs.get(v) {
                Some(&old) => Cost::Finite(newcost) < old,
                None => true,
            };
            if improves {
                trace!("  relax {:?} -> {:?}: {:?}", u, v, newcost);
                costs.insert(v.clone(), Cost::Finite(newcost));
                parents.insert(v.clone(), u.clone());
                match items.get_mut(v) {
                    Some(item) => {
                        pqueue.decrease_key(item, newcost);
                    }
                    None => {
                        items.insert(v.clone(), pqueue.push(v.clone(), newcost));
                    }
                }
            }
        }

        processed.insert(u);
    }

    Ok((costs, parents))
}
