use route_finder::algorithm::batch::find_paths_parallel;
use route_finder::algorithm::dijkstra::Dijkstra;
use route_finder::algorithm::traits::PathFinder;
use route_finder::graph::generators::{
    delivery_city, generate_grid, generate_random_connected, generate_random_sparse,
};
use route_finder::graph::{MutableGraph, UndirectedGraph};
use route_finder::{find_shortest_path, Error, PathOutcome, PathResult};
use ordered_float::OrderedFloat;
use std::collections::HashSet;

type RoadGraph = UndirectedGraph<OrderedFloat<f64>>;

fn names(path: &[&str]) -> Vec<String> {
    path.iter().map(|s| s.to_string()).collect()
}

// Cheapest edge weight between two adjacent nodes
fn edge_weight(graph: &RoadGraph, a: &str, b: &str) -> Option<f64> {
    graph
        .neighbors(a)
        .into_iter()
        .filter(|(n, _)| *n == b)
        .map(|(_, w)| w.into_inner())
        .reduce(f64::min)
}

// Every consecutive pair must be joined by an edge and the weights must add up
fn assert_valid_path(graph: &RoadGraph, result: &PathResult<OrderedFloat<f64>>) {
    let mut total = 0.0;
    for pair in result.path.windows(2) {
        let weight = edge_weight(graph, &pair[0], &pair[1])
            .unwrap_or_else(|| panic!("{} and {} are not adjacent", pair[0], pair[1]));
        total += weight;
    }
    assert_eq!(total, result.distance.into_inner(), "path weights must sum to the distance");
}

// Minimum over all simple paths, by exhaustive search
fn brute_force_distance(graph: &RoadGraph, start: &str, end: &str) -> Option<f64> {
    fn walk(
        graph: &RoadGraph,
        current: &str,
        end: &str,
        so_far: f64,
        visited: &mut HashSet<String>,
        best: &mut Option<f64>,
    ) {
        if current == end {
            *best = Some(best.map_or(so_far, |b| b.min(so_far)));
            return;
        }
        for (next, weight) in graph.neighbors(current) {
            if visited.insert(next.to_string()) {
                walk(graph, next, end, so_far + weight.into_inner(), visited, best);
                visited.remove(next);
            }
        }
    }

    if !graph.nodes().contains(&start) || !graph.nodes().contains(&end) {
        return None;
    }
    let mut best = None;
    let mut visited = HashSet::from([start.to_string()]);
    walk(graph, start, end, 0.0, &mut visited, &mut best);
    best
}

#[test]
fn test_delivery_route_prefers_gas_station_detour() {
    let graph = delivery_city().unwrap();

    let outcome = find_shortest_path(&graph, "Restaurant", "CustomerHouse").unwrap();

    assert_eq!(
        outcome,
        PathOutcome::Found(PathResult {
            path: names(&["Restaurant", "Crossroads", "GasStation", "CustomerHouse"]),
            distance: OrderedFloat(11.0),
        })
    );
}

#[test]
fn test_delivery_route_beats_direct_edge() {
    let graph = delivery_city().unwrap();

    let outcome = find_shortest_path(&graph, "Restaurant", "GasStation").unwrap();

    assert_eq!(outcome.path(), Some(&names(&["Restaurant", "Crossroads", "GasStation"])[..]));
    assert_eq!(outcome.distance(), Some(OrderedFloat(6.0)));
}

#[test]
fn test_unknown_destination_is_no_path() {
    let graph = delivery_city().unwrap();

    assert_eq!(find_shortest_path(&graph, "Restaurant", "Nowhere").unwrap(), PathOutcome::NoPath);
    assert_eq!(find_shortest_path(&graph, "Nowhere", "Restaurant").unwrap(), PathOutcome::NoPath);
}

#[test]
fn test_trivial_path_is_not_no_path() {
    let graph = delivery_city().unwrap();

    for node in graph.nodes() {
        let outcome = find_shortest_path(&graph, node, node).unwrap();
        assert_eq!(
            outcome,
            PathOutcome::Found(PathResult {
                path: vec![node.to_string()],
                distance: OrderedFloat(0.0),
            })
        );
    }
}

#[test]
fn test_same_unknown_start_and_end_is_no_path() {
    let graph = delivery_city().unwrap();

    assert_eq!(find_shortest_path(&graph, "Nowhere", "Nowhere").unwrap(), PathOutcome::NoPath);
    assert_eq!(find_shortest_path(&RoadGraph::new(), "X", "X").unwrap(), PathOutcome::NoPath);
}

#[test]
fn test_overflowing_route_is_reported_as_error() {
    let mut graph = RoadGraph::new();
    graph.add_edge("A", "B", OrderedFloat(f64::MAX)).unwrap();
    graph.add_edge("B", "C", OrderedFloat(f64::MAX)).unwrap();

    let result = find_shortest_path(&graph, "A", "C");

    assert!(matches!(result, Err(Error::DistanceOverflow { .. })));
}

#[test]
fn test_empty_endpoints_are_invalid_input() {
    let graph = delivery_city().unwrap();

    assert!(matches!(find_shortest_path(&graph, "", "Restaurant"), Err(Error::InvalidInput(_))));
    assert!(matches!(find_shortest_path(&graph, "Restaurant", ""), Err(Error::InvalidInput(_))));

    let empty = RoadGraph::new();
    assert!(matches!(find_shortest_path(&empty, "", ""), Err(Error::InvalidInput(_))));
}

#[test]
fn test_disconnected_components() {
    let mut graph = RoadGraph::new();
    graph.add_edge("A", "B", OrderedFloat(1.0)).unwrap();
    graph.add_edge("C", "D", OrderedFloat(1.0)).unwrap();

    assert_eq!(find_shortest_path(&graph, "A", "D").unwrap(), PathOutcome::NoPath);
    assert_eq!(find_shortest_path(&graph, "A", "B").unwrap().distance(), Some(OrderedFloat(1.0)));
}

#[test]
fn test_parallel_edges_both_take_part() {
    let mut graph = RoadGraph::new();
    graph.add_edge("A", "B", OrderedFloat(9.0)).unwrap();
    graph.add_edge("A", "B", OrderedFloat(3.0)).unwrap();

    assert_eq!(find_shortest_path(&graph, "B", "A").unwrap().distance(), Some(OrderedFloat(3.0)));
}

#[test]
fn test_equal_cost_routes_are_deterministic() {
    // Two routes of cost 2; the one discovered first wins every time
    let mut graph = RoadGraph::new();
    graph.add_edge("S", "X", OrderedFloat(1.0)).unwrap();
    graph.add_edge("S", "Y", OrderedFloat(1.0)).unwrap();
    graph.add_edge("X", "T", OrderedFloat(1.0)).unwrap();
    graph.add_edge("Y", "T", OrderedFloat(1.0)).unwrap();

    for _ in 0..10 {
        let outcome = find_shortest_path(&graph, "S", "T").unwrap();
        assert_eq!(outcome.path(), Some(&names(&["S", "X", "T"])[..]));
    }
}

#[test]
fn test_matches_brute_force_on_small_graphs() {
    for seed in 0..60 {
        let graph = generate_random_sparse(8, 0.35, seed).unwrap();
        let nodes = graph.nodes();

        for &start in &nodes {
            for &end in &nodes {
                let outcome = find_shortest_path(&graph, start, end).unwrap();
                let expected = brute_force_distance(&graph, start, end);

                assert_eq!(
                    outcome.distance().map(|d| d.into_inner()),
                    expected,
                    "seed {} query {} -> {}",
                    seed,
                    start,
                    end
                );
                if let PathOutcome::Found(result) = &outcome {
                    assert_eq!(result.path.first().map(String::as_str), Some(start));
                    assert_eq!(result.path.last().map(String::as_str), Some(end));
                    assert_valid_path(&graph, result);
                }
            }
        }
    }
}

#[test]
fn test_symmetric_distances() {
    let graph = generate_random_connected(60, 80, 3).unwrap();
    let nodes = graph.nodes();

    for (i, &a) in nodes.iter().enumerate().step_by(7) {
        for &b in nodes.iter().skip(i) {
            let forward = find_shortest_path(&graph, a, b).unwrap().distance().unwrap();
            let backward = find_shortest_path(&graph, b, a).unwrap().distance().unwrap();
            assert!(
                (forward.into_inner() - backward.into_inner()).abs() < 1e-9,
                "{} <-> {}: {} vs {}",
                a,
                b,
                forward,
                backward
            );
        }
    }
}

#[test]
fn test_grid_corner_to_corner() {
    let graph = generate_grid(10, 10).unwrap();

    let outcome = find_shortest_path(&graph, "0,0", "9,9").unwrap();
    let result = outcome.into_found().expect("grid is connected");

    assert_eq!(result.distance, OrderedFloat(18.0));
    assert_eq!(result.path.len(), 19);
    assert_valid_path(&graph, &result);
}

#[test]
fn test_path_finder_trait_matches_free_function() {
    let graph = delivery_city().unwrap();
    let dijkstra = Dijkstra::new();

    let via_trait = dijkstra.find_path(&graph, "CustomerHouse", "Restaurant").unwrap();
    let via_fn = find_shortest_path(&graph, "CustomerHouse", "Restaurant").unwrap();

    assert_eq!(via_trait, via_fn);
    assert_eq!(
        <Dijkstra as PathFinder<OrderedFloat<f64>, RoadGraph>>::name(&dijkstra),
        "Dijkstra"
    );
}

#[test]
fn test_parallel_batch_keeps_query_order() {
    let graph = delivery_city().unwrap();
    let queries = vec![
        ("Restaurant", "CustomerHouse"),
        ("Restaurant", "Nowhere"),
        ("", "GasStation"),
        ("GasStation", "GasStation"),
    ];

    let outcomes = find_paths_parallel(&graph, &queries[..]);

    assert_eq!(outcomes.len(), 4);
    assert_eq!(outcomes[0].as_ref().unwrap().distance(), Some(OrderedFloat(11.0)));
    assert_eq!(outcomes[1].as_ref().unwrap(), &PathOutcome::NoPath);
    assert!(matches!(outcomes[2], Err(Error::InvalidInput(_))));
    assert_eq!(outcomes[3].as_ref().unwrap().distance(), Some(OrderedFloat(0.0)));
}
