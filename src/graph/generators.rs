use crate::graph::{MutableGraph, UndirectedGraph};
use crate::Result;
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// The reference delivery map: a restaurant, a crossroads, a gas station and a
/// customer's house joined by five roads.
pub fn delivery_city() -> Result<UndirectedGraph<OrderedFloat<f64>>> {
    UndirectedGraph::from_edges([
        ("Restaurant", "Crossroads", OrderedFloat(4.0)),
        ("Restaurant", "GasStation", OrderedFloat(8.0)),
        ("Crossroads", "GasStation", OrderedFloat(2.0)),
        ("Crossroads", "CustomerHouse", OrderedFloat(10.0)),
        ("GasStation", "CustomerHouse", OrderedFloat(5.0)),
    ])
}

/// Name given to the i-th node of generated graphs
pub fn node_name(i: usize) -> String {
    format!("n{}", i)
}

/// Generates a connected random graph with n nodes.
///
/// A random spanning tree guarantees connectivity, then `extra_edges` further
/// edges (possibly parallel) are sprinkled on top. Weights are drawn from
/// `1.0..100.0`. The same seed always yields the same graph.
pub fn generate_random_connected(
    n: usize,
    extra_edges: usize,
    seed: u64,
) -> Result<UndirectedGraph<OrderedFloat<f64>>> {
    let mut graph = UndirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);
    let names: Vec<String> = (0..n).map(node_name).collect();

    for i in 1..n {
        let parent = rng.gen_range(0..i);
        let weight = OrderedFloat(rng.gen_range(1.0..100.0));
        graph.add_edge(&names[parent], &names[i], weight)?;
    }

    if n > 1 {
        for _ in 0..extra_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            // Avoid self-loops
            if u != v {
                let weight = OrderedFloat(rng.gen_range(1.0..100.0));
                graph.add_edge(&names[u], &names[v], weight)?;
            }
        }
    }

    Ok(graph)
}

/// Generates a random graph where each pair is joined with probability `p`.
///
/// The result may be disconnected, and nodes that received no edge are absent.
/// Integer weights in `0..=9` keep distance comparisons exact.
pub fn generate_random_sparse(
    n: usize,
    p: f64,
    seed: u64,
) -> Result<UndirectedGraph<OrderedFloat<f64>>> {
    let mut graph = UndirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen_bool(p) {
                let weight = OrderedFloat(rng.gen_range(0..10) as f64);
                graph.add_edge(&node_name(u), &node_name(v), weight)?;
            }
        }
    }

    Ok(graph)
}

/// Generates a width x height street grid with unit-weight roads.
/// Intersections are named `"{x},{y}"`.
pub fn generate_grid(width: usize, height: usize) -> Result<UndirectedGraph<OrderedFloat<f64>>> {
    let mut graph = UndirectedGraph::with_capacity(width * height);
    let name = |x: usize, y: usize| format!("{},{}", x, y);

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                graph.add_edge(&name(x, y), &name(x + 1, y), OrderedFloat(1.0))?;
            }
            if y + 1 < height {
                graph.add_edge(&name(x, y), &name(x, y + 1), OrderedFloat(1.0))?;
            }
        }
    }

    Ok(graph)
}
