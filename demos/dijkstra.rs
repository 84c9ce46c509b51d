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

use flexi_logger::Logger;
use rustop::opts;
use serde_derive::Deserialize;
use time::OffsetDateTime;

use route_cover::shortestpath::{dijkstra, heap, reconstruct_path, seed, Cost};
use route_cover::Digraph;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;

/// A shortest path instance as read from a JSON file.
///
/// ```json
/// { "origin": "Start", "graph": { "Start": { "A": 5 }, "A": {} } }
/// ```
#[derive(Deserialize)]
struct Instance {
    origin: String,
    graph: Digraph<String, f64>,
}

fn sample() -> Instance {
    let mut graph = Digraph::new();
    for &(u, v, w) in &[
        ("Start", "A", 5.0),
        ("Start", "B", 2.0),
        ("A", "C", 4.0),
        ("A", "D", 2.0),
        ("B", "A", 8.0),
        ("B", "D", 7.0),
        ("C", "Finish", 3.0),
        ("C", "D", 6.0),
        ("D", "Finish", 1.0),
    ] {
        graph.add_edge(u.to_string(), v.to_string(), w);
    }
    Instance {
        origin: "Start".to_string(),
        graph,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let (args, _) = opts! {
        synopsis "Compute a shortest path from the origin node with Dijkstra's algorithm.";
        opt destination:Option<String>, desc:"The destination node (default: Finish).";
        opt heap:bool, desc:"Select nodes with a binary heap instead of a linear scan.";
        opt num:usize=1, desc:"Number of times the algorithm is repeated.";
        param file:Option<String>, desc:"Instance file name (JSON).";
    }
    .parse_or_exit();

    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let instance = match &args.file {
        Some(file) => serde_json::from_reader(BufReader::new(File::open(file)?))?,
        None => sample(),
    };
    let Instance { origin, graph: g } = instance;
    let destination = args.destination.unwrap_or_else(|| "Finish".to_string());

    println!("  number of nodes: {}", g.num_nodes());
    println!("  number of edges: {}", g.num_edges());

    let (costs, parents) = seed(&g, &origin)?;

    let tstart = OffsetDateTime::now_utc();
    let mut solution = (costs.clone(), parents.clone());
    for _ in 0..args.num {
        solution = if args.heap {
            heap::compute_shortest_paths(&g, costs.clone(), parents.clone())?
        } else {
            dijkstra::compute_shortest_paths(&g, costs.clone(), parents.clone())?
        };
    }
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());

    let (costs, parents) = solution;
    match costs.get(&destination).copied().unwrap_or_default() {
        Cost::Finite(dist) => {
            println!("Total cost of {} -> {} = {}", origin, destination, dist);
            let path = reconstruct_path(&parents, &origin, &destination)?;
            println!("Path of {} -> {} = {}", origin, destination, path.join(" -> "));
        }
        Cost::Infinite => println!("No path found for {} -> {}", origin, destination),
    }

    Ok(())
}
