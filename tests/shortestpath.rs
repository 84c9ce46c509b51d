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

use route_cover::collections::BinHeap;
use route_cover::shortestpath::{
    dijkstra, find_path, heap, path_cost, reconstruct_path, seed, Cost, Costs, Parents, ShortestPaths,
};
use route_cover::{Digraph, Error};

use std::error;

fn routes() -> Digraph<&'static str, u32> {
    Digraph::from_adjacencies(vec![
        ("Start", vec![("A", 5), ("B", 2)]),
        ("A", vec![("C", 4), ("D", 2)]),
        ("B", vec![("A", 8), ("D", 7)]),
        ("C", vec![("Finish", 3), ("D", 6)]),
        ("D", vec![("Finish", 1)]),
        ("Finish", vec![]),
    ])
}

/// The initial costs and parents with all non-origin nodes given explicitly.
fn routes_seed() -> (Costs<&'static str, u32>, Parents<&'static str>) {
    let costs = vec![
        ("A", Cost::Finite(5)),
        ("B", Cost::Finite(2)),
        ("C", Cost::Infinite),
        ("D", Cost::Infinite),
        ("Finish", Cost::Infinite),
    ]
    .into_iter()
    .collect();
    let parents = vec![("A", "Start"), ("B", "Start")].into_iter().collect();
    (costs, parents)
}

/// A few instances with all edge weights non-negative.
fn instances() -> Vec<Digraph<usize, u32>> {
    let edge_lists: &[&[(usize, usize, u32)]] = &[
        &[(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5), (3, 4, 3)],
        &[(0, 1, 7), (0, 2, 9), (0, 5, 14), (1, 2, 10), (1, 3, 15), (2, 3, 11), (2, 5, 2), (3, 4, 6), (5, 4, 9)],
        &[(0, 1, 0), (1, 2, 0), (2, 0, 0), (2, 3, 1), (3, 1, 1), (4, 3, 2)],
        &[(0, 1, 1), (1, 2, 1), (0, 2, 2), (2, 3, 1), (1, 3, 2), (0, 3, 3)],
        &[(0, 1, 5), (1, 0, 3), (1, 2, 1), (2, 0, 1), (2, 3, 4)],
    ];

    edge_lists
        .iter()
        .map(|edges| {
            let mut g = Digraph::new();
            g.add_node(0);
            for &(u, v, w) in edges.iter() {
                g.add_edge(u, v, w);
            }
            g.add_node(99);
            g
        })
        .collect()
}

#[test]
fn test_routes() -> Result<(), Box<dyn error::Error>> {
    let g = routes();
    let (costs, parents) = routes_seed();
    assert_eq!(seed(&g, &"Start")?, (costs.clone(), parents.clone()));

    let (costs, parents) = dijkstra::compute_shortest_paths(&g, costs, parents)?;

    assert_eq!(costs[&"A"], Cost::Finite(5));
    assert_eq!(costs[&"B"], Cost::Finite(2));
    assert_eq!(costs[&"C"], Cost::Finite(9));
    assert_eq!(costs[&"D"], Cost::Finite(7));
    assert_eq!(costs[&"Finish"], Cost::Finite(8));

    let path = reconstruct_path(&parents, &"Start", &"Finish")?;
    assert_eq!(path, vec!["Start", "A", "D", "Finish"]);
    assert_eq!(path_cost(&g, &path), Some(8));

    assert_eq!(find_path(&g, &"Start", &"Finish")?, (path, 8));

    Ok(())
}

#[test]
fn test_processed_once_in_cost_order() -> Result<(), Box<dyn error::Error>> {
    let g = routes();
    let (costs, parents) = routes_seed();
    let search = ShortestPaths::start(&g, costs, parents)?;

    let order: Vec<_> = search.collect();
    assert_eq!(order, vec![("B", 2), ("A", 5), ("D", 7), ("Finish", 8), ("C", 9)]);

    Ok(())
}

#[test]
fn test_costs_never_increase() -> Result<(), Box<dyn error::Error>> {
    for g in instances() {
        let (costs, parents) = seed(&g, &0)?;
        let mut search = ShortestPaths::start(&g, costs, parents)?;

        let mut before = search.costs().clone();
        while search.next().is_some() {
            for (u, &cost) in search.costs() {
                assert!(cost >= Cost::Finite(0));
                if let Some(&old) = before.get(u) {
                    assert!(cost <= old, "cost of {} increased from {:?} to {:?}", u, old, cost);
                }
            }
            before = search.costs().clone();
        }
    }

    Ok(())
}

#[test]
fn test_path_lengths_match_costs() -> Result<(), Box<dyn error::Error>> {
    for g in instances() {
        let (costs, parents) = seed(&g, &0)?;
        let (costs, parents) = dijkstra::compute_shortest_paths(&g, costs, parents)?;

        for (u, cost) in &costs {
            if let Cost::Finite(dist) = *cost {
                let path = reconstruct_path(&parents, &0, u)?;
                assert_eq!(path.first(), Some(&0));
                assert_eq!(path.last(), Some(u));
                assert_eq!(path_cost(&g, &path), Some(dist));
            }
        }
    }

    Ok(())
}

#[test]
fn test_fixed_point() -> Result<(), Box<dyn error::Error>> {
    for g in instances() {
        let (costs, parents) = seed(&g, &0)?;
        let (costs, parents) = dijkstra::compute_shortest_paths(&g, costs, parents)?;
        let again = dijkstra::compute_shortest_paths(&g, costs.clone(), parents.clone())?;
        assert_eq!(again, (costs, parents));
    }

    Ok(())
}

#[test]
fn test_heap_variant() -> Result<(), Box<dyn error::Error>> {
    let mut graphs: Vec<Digraph<String, u32>> = vec![];
    for g in instances() {
        let mut h = Digraph::new();
        for u in g.nodes() {
            h.add_node(u.to_string());
            for (v, &w) in g.successors(u).into_iter().flatten() {
                h.add_edge(u.to_string(), v.to_string(), w);
            }
        }
        graphs.push(h);
    }

    for g in &graphs {
        let origin = "0".to_string();
        let (costs, parents) = seed(g, &origin)?;
        let (lin_costs, _) = dijkstra::compute_shortest_paths(g, costs.clone(), parents.clone())?;
        let (heap_costs, heap_parents) = heap::compute_shortest_paths(g, costs, parents)?;

        assert_eq!(lin_costs.len(), heap_costs.len());
        for (u, cost) in &lin_costs {
            assert_eq!(heap_costs.get(u), Some(cost), "node {}", u);
            if let Cost::Finite(dist) = *cost {
                let path = reconstruct_path(&heap_parents, &origin, u)?;
                assert_eq!(path_cost(g, &path), Some(dist));
            }
        }
    }

    Ok(())
}

#[test]
fn test_heap_reused() -> Result<(), Box<dyn error::Error>> {
    let mut pqueue: BinHeap<usize, u32> = BinHeap::new();
    for g in instances() {
        let (costs, parents) = seed(&g, &0)?;
        let (lin_costs, _) = dijkstra::compute_shortest_paths(&g, costs.clone(), parents.clone())?;

        for _ in 0..2 {
            let (heap_costs, _) =
                heap::compute_shortest_paths_with_queue(&g, costs.clone(), parents.clone(), &mut pqueue)?;
            assert_eq!(heap_costs, lin_costs);
        }
    }

    Ok(())
}

#[test]
fn test_edge_into_origin() -> Result<(), Box<dyn error::Error>> {
    let g = Digraph::from_adjacencies(vec![
        ("Start", vec![("A", 5)]),
        ("A", vec![("Start", 3), ("Finish", 1)]),
        ("Finish", vec![]),
    ]);

    let (costs, parents) = seed(&g, &"Start")?;
    let lin = dijkstra::compute_shortest_paths(&g, costs.clone(), parents.clone())?;
    let with_heap = heap::compute_shortest_paths(&g, costs, parents)?;

    for (costs, parents) in vec![lin, with_heap] {
        assert!(!costs.contains_key(&"Start"), "origin got cost {:?}", costs.get(&"Start"));
        assert!(!parents.contains_key(&"Start"));
        assert!(costs.values().all(Cost::is_finite));
        assert_eq!(costs[&"Finish"], Cost::Finite(6));
        assert_eq!(reconstruct_path(&parents, &"Start", &"Finish")?, vec!["Start", "A", "Finish"]);
    }

    assert_eq!(find_path(&g, &"Start", &"Start")?, (vec!["Start"], 0));

    Ok(())
}

#[test]
fn test_unreachable() -> Result<(), Box<dyn error::Error>> {
    let mut g = routes();
    g.add_node("Island");
    g.add_edge("Island", "Finish", 1);

    let (costs, parents) = seed(&g, &"Start")?;
    let (costs, parents) = dijkstra::compute_shortest_paths(&g, costs, parents)?;

    assert_eq!(costs[&"Island"], Cost::Infinite);
    assert!(!parents.contains_key(&"Island"));
    assert_eq!(
        reconstruct_path(&parents, &"Start", &"Island"),
        Err(Error::PathNotFound {
            origin: "\"Start\"".to_string(),
            destination: "\"Island\"".to_string(),
        })
    );
    assert!(matches!(
        find_path(&g, &"Start", &"Island"),
        Err(Error::PathNotFound { .. })
    ));
    assert!(matches!(
        find_path(&g, &"Start", &"Nowhere"),
        Err(Error::PathNotFound { .. })
    ));

    Ok(())
}

#[test]
fn test_malformed_graph() {
    let g = Digraph::from_adjacencies(vec![
        ("Start", vec![("A", 5), ("B", 2)]),
        ("A", vec![("Finish", 1)]),
        ("B", vec![("Ghost", 3)]),
        ("Finish", vec![]),
    ]);

    let expected = Error::UnknownNode {
        node: "\"Ghost\"".to_string(),
        from: Some("\"B\"".to_string()),
    };

    let (costs, parents) = seed(&g, &"Start").unwrap();
    assert_eq!(
        dijkstra::compute_shortest_paths(&g, costs.clone(), parents.clone()).map(|_| ()),
        Err(expected.clone())
    );
    assert_eq!(heap::compute_shortest_paths(&g, costs, parents).map(|_| ()), Err(expected.clone()));
    assert_eq!(find_path(&g, &"Start", &"Finish").map(|_| ()), Err(expected));
}

#[test]
fn test_float_weights() -> Result<(), Box<dyn error::Error>> {
    let mut g = Digraph::new();
    g.add_edge("Start", "x", 0.25);
    g.add_edge("Start", "y", 1.0);
    g.add_edge("x", "y", 0.5);
    g.add_edge("y", "z", 0.125);

    let (path, dist) = find_path(&g, &"Start", &"z")?;
    assert_eq!(path, vec!["Start", "x", "y", "z"]);
    assert_eq!(dist, 0.875);

    Ok(())
}
