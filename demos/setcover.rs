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

use route_cover::setcover::{compute_minimal_cover, is_cover, Connections};

use std::error::Error;
use std::fs::File;
use std::io::BufReader;

/// A set cover instance as read from a JSON file.
///
/// ```json
/// { "universe": ["a", "b"], "connections": { "x": ["a"], "y": ["a", "b"] } }
/// ```
#[derive(Deserialize)]
struct Instance {
    universe: Vec<String>,
    connections: Connections<String, String>,
}

fn sample() -> Instance {
    let friends = [
        ("nick", &["peter", "jim", "george"][..]),
        ("mary", &["helen", "jim", "eva"][..]),
        ("peter", &["nick", "eva", "helen"][..]),
        ("helen", &["mary", "eva", "jill"][..]),
        ("jim", &["nick", "mary"][..]),
        ("eva", &["mary", "peter", "helen", "jill"][..]),
        ("jill", &["helen", "eva"][..]),
        ("george", &["nick"][..]),
    ];
    Instance {
        universe: friends.iter().map(|(p, _)| p.to_string()).collect(),
        connections: friends
            .iter()
            .map(|(p, fs)| (p.to_string(), fs.iter().map(|f| f.to_string()).collect()))
            .collect(),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let (args, _) = opts! {
        synopsis "Compute a set cover with the greedy algorithm.";
        opt num:usize=1, desc:"Number of times the algorithm is repeated.";
        param file:Option<String>, desc:"Instance file name (JSON).";
    }
    .parse_or_exit();

    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let instance = match &args.file {
        Some(file) => serde_json::from_reader(BufReader::new(File::open(file)?))?,
        None => sample(),
    };

    println!("  number of elements: {}", instance.universe.len());
    println!("  number of candidates: {}", instance.connections.len());

    let tstart = OffsetDateTime::now_utc();
    let mut result = compute_minimal_cover(instance.universe.clone(), &instance.connections);
    for _ in 1..args.num {
        result = compute_minimal_cover(instance.universe.clone(), &instance.connections);
    }
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());

    match result {
        Ok(cover) => {
            let universe = instance.universe.into_iter().collect();
            let feasible = is_cover(&universe, &instance.connections, &cover);
            let names: Vec<_> = cover.into_iter().collect();
            println!("Picked {} candidates: {}", names.len(), names.join(", "));
            println!("Feasible: {}", feasible);
        }
        Err(err) => println!("No cover found: {}", err),
    }

    Ok(())
}
