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

//! Greedy algorithm for the set cover problem.
//!
//! Given a universe of elements and a family of candidates, each covering
//! some set of elements, the *set cover problem* asks for a smallest
//! number of candidates that together cover the whole universe.
//!
//! The greedy algorithm repeatedly picks the candidate covering the most
//! elements that are still uncovered. The result is a feasible cover
//! (whenever one exists) whose size is within a factor of $H(k) \le \ln k +
//! 1$ of the optimum, where $k$ is the size of the largest candidate set. It
//! is *not* necessarily a minimum cover.
//!
//! # Example
//!
//! ```
//! use route_cover::setcover::{compute_minimal_cover, is_cover, Connections};
//!
//! let stations: Connections<_, _> = vec![
//!     ("kone", vec!["id", "nv", "ut"]),
//!     ("ktwo", vec!["wa", "id", "mt"]),
//!     ("kthree", vec!["or", "nv", "ca"]),
//!     ("kfour", vec!["nv", "ut"]),
//!     ("kfive", vec!["ca", "az"]),
//! ]
//! .into_iter()
//! .map(|(c, states)| (c, states.into_iter().collect()))
//! .collect();
//!
//! let states = vec!["mt", "wa", "or", "id", "nv", "ut", "ca", "az"];
//! let cover = compute_minimal_cover(states.clone(), &stations).unwrap();
//!
//! assert_eq!(cover.iter().cloned().collect::<Vec<_>>(), vec!["kone", "ktwo", "kthree", "kfive"]);
//! assert!(is_cover(&states.into_iter().collect(), &stations, &cover));
//! ```

use crate::error::{Error, Result};

use indexmap::{IndexMap, IndexSet};
use log::debug;

use std::fmt::Debug;
use std::hash::Hash;

/// The elements covered by each candidate.
pub type Connections<C, E> = IndexMap<C, IndexSet<E>>;

/// Greedy set cover iterator.
///
/// Each call to `next` picks the candidate covering the largest number of
/// uncovered elements and returns it together with the newly covered
/// elements. If several candidates cover the same number of elements, the
/// first one in the connections map is picked. The iterator ends when all
/// elements are covered or when no candidate covers any of the remaining
/// elements.
pub struct GreedyCover<'a, C, E>
where
    C: Hash + Eq,
    E: Hash + Eq,
{
    connections: &'a Connections<C, E>,
    remaining: IndexSet<E>,
    picked: IndexSet<C>,
}

impl<'a, C, E> GreedyCover<'a, C, E>
where
    C: Hash + Eq + Clone + Debug,
    E: Hash + Eq + Clone + Debug,
{
    /// Start the greedy algorithm on the given universe.
    pub fn start<U>(universe: U, connections: &'a Connections<C, E>) -> Self
    where
        U: IntoIterator<Item = E>,
    {
        GreedyCover {
            connections,
            remaining: universe.into_iter().collect(),
            picked: IndexSet::new(),
        }
    }

    /// Run the algorithm completely.
    pub fn run(&mut self) {
        while self.next().is_some() {}
    }

    /// Return the elements that are not covered, yet.
    pub fn remaining(&self) -> &IndexSet<E> {
        &self.remaining
    }

    /// Return the candidates picked so far in the order they have been
    /// picked.
    pub fn picked(&self) -> &IndexSet<C> {
        &self.picked
    }

    /// Return the picked candidates.
    pub fn into_picked(self) -> IndexSet<C> {
        self.picked
    }
}

impl<'a, C, E> Iterator for GreedyCover<'a, C, E>
where
    C: Hash + Eq + Clone + Debug,
    E: Hash + Eq + Clone + Debug,
{
    type Item = (C, IndexSet<E>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }

        let mut best = None;
        let mut best_count = 0;
        for (c, elems) in self.connections {
            let count = elems.iter().filter(|e| self.remaining.contains(*e)).count();
            if count > best_count {
                best = Some((c, elems));
                best_count = count;
            }
        }

        let (c, elems) = best?;
        let mut covered = IndexSet::with_capacity(best_count);
        for e in elems {
            if self.remaining.shift_remove(e) {
                covered.insert(e.clone());
            }
        }
        debug!("Pick {:?} covering {} elements, {} remaining", c, covered.len(), self.remaining.len());

        self.picked.insert(c.clone());
        Some((c.clone(), covered))
    }
}

/// Compute a set cover with the greedy algorithm.
///
/// The universe is consumed. Returns the picked candidates in the order
/// they have been picked. An empty universe yields an empty cover.
///
/// Fails with [`Error::UnsatisfiableCover`] if some elements are not covered
/// by any candidate.
pub fn compute_minimal_cover<C, E, U>(universe: U, connections: &Connections<C, E>) -> Result<IndexSet<C>>
where
    C: Hash + Eq + Clone + Debug,
    E: Hash + Eq + Clone + Debug,
    U: IntoIterator<Item = E>,
{
    let mut cover = GreedyCover::start(universe, connections);
    cover.run();
    if cover.remaining().is_empty() {
        Ok(cover.into_picked())
    } else {
        Err(Error::unsatisfiable_cover(cover.remaining()))
    }
}

/// Return `true` iff the picked candidates cover the whole universe.
///
/// Picked candidates that do not appear in `connections` cover nothing.
pub fn is_cover<C, E>(universe: &IndexSet<E>, connections: &Connections<C, E>, picked: &IndexSet<C>) -> bool
where
    C: Hash + Eq,
    E: Hash + Eq,
{
    universe.iter().all(|e| {
        picked
            .iter()
            .filter_map(|c| connections.get(c))
            .any(|elems| elems.contains(e))
    })
}
