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

//! Errors reported by the solvers.

use std::fmt::Debug;

use thiserror::Error;

/// Error of a shortest path or set cover computation.
///
/// Node, element and candidate identifiers are stored in their `Debug`
/// representation so that the error type does not depend on the identifier
/// types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A node is referenced but not defined in the graph.
    #[error("unknown node {node}{}", referenced_from(.from))]
    UnknownNode { node: String, from: Option<String> },

    /// The destination has not been reached from the origin.
    #[error("no path found for {origin} -> {destination}")]
    PathNotFound { origin: String, destination: String },

    /// Some elements are not covered by any candidate.
    #[error("no candidate covers the remaining elements {}", comma_separated(.uncovered))]
    UnsatisfiableCover { uncovered: Vec<String> },
}

impl Error {
    pub(crate) fn unknown_node<N: Debug>(node: &N, from: Option<&N>) -> Self {
        Error::UnknownNode {
            node: format!("{:?}", node),
            from: from.map(|u| format!("{:?}", u)),
        }
    }

    pub(crate) fn path_not_found<N: Debug>(origin: &N, destination: &N) -> Self {
        Error::PathNotFound {
            origin: format!("{:?}", origin),
            destination: format!("{:?}", destination),
        }
    }

    pub(crate) fn unsatisfiable_cover<'a, E, I>(uncovered: I) -> Self
    where
        E: 'a + Debug,
        I: IntoIterator<Item = &'a E>,
    {
        Error::UnsatisfiableCover {
            uncovered: uncovered.into_iter().map(|e| format!("{:?}", e)).collect(),
        }
    }
}

fn referenced_from(from: &Option<String>) -> String {
    from.as_ref()
        .map(|u| format!(" (referenced from {})", u))
        .unwrap_or_default()
}

fn comma_separated(items: &[String]) -> String {
    items.join(", ")
}

pub type Result<T> = std::result::Result<T, Error>;
