use std::time::{Duration, Instant};
use rand::prelude::*;
use rand::rngs::StdRng;
use route_finder::algorithm::batch::find_paths_parallel;
use route_finder::algorithm::dijkstra::{Dijkstra, SearchStats};
use route_finder::graph::generators::{generate_random_connected, node_name};
use route_finder::graph::{Graph, UndirectedGraph};
use ordered_float::OrderedFloat;

// Random (start, end) pairs over the generated node names
fn random_queries(num_nodes: usize, count: usize, seed: u64) -> Vec<(String, String)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let start = rng.gen_range(0..num_nodes);
            let end = rng.gen_range(0..num_nodes);
            (node_name(start), node_name(end))
        })
        .collect()
}

// Runs every query one after another and sums the search counters
fn benchmark_sequential(
    graph: &UndirectedGraph<OrderedFloat<f64>>,
    queries: &[(String, String)],
) -> Result<(Duration, SearchStats), route_finder::Error> {
    let dijkstra = Dijkstra::new();
    let mut totals = SearchStats::default();

    let start = Instant::now();
    for (from, to) in queries {
        let report = dijkstra.search(graph, from, to)?;
        totals.nodes_settled += report.stats.nodes_settled;
        totals.edges_relaxed += report.stats.edges_relaxed;
        totals.stale_entries_skipped += report.stats.stale_entries_skipped;
        totals.peak_frontier = totals.peak_frontier.max(report.stats.peak_frontier);
    }

    Ok((start.elapsed(), totals))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000];

    // Extra edges on top of the spanning tree, per node
    let edge_factor = 2;
    let queries_per_graph = 200;

    println!("=====================================================");
    println!("Benchmark: Dijkstra point-to-point queries");
    println!("Edge factor: {} extra edges per node", edge_factor);
    println!("Queries per graph: {}", queries_per_graph);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random connected graph with {} nodes...", size);
        let graph = generate_random_connected(size, size * edge_factor, size as u64)?;
        println!("Graph has {} nodes and {} edges", graph.node_count(), graph.edge_count());

        let queries = random_queries(size, queries_per_graph, 42);

        let (sequential_time, totals) = benchmark_sequential(&graph, &queries)?;
        println!(
            "  - Sequential: {:?} ({} settled, {} relaxed, {} stale, peak frontier {})",
            sequential_time,
            totals.nodes_settled,
            totals.edges_relaxed,
            totals.stale_entries_skipped,
            totals.peak_frontier
        );

        let start = Instant::now();
        let outcomes = find_paths_parallel(&graph, &queries[..]);
        let parallel_time = start.elapsed();
        let found = outcomes
            .iter()
            .filter(|outcome| matches!(outcome, Ok(o) if o.is_found()))
            .count();
        println!("  - Parallel:   {:?} ({} of {} paths found)", parallel_time, found, queries.len());

        results.push((size, sequential_time, parallel_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Nodes", "Sequential (ms)", "Parallel (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, sequential_time, parallel_time) in &results {
        let speedup = sequential_time.as_secs_f64() / parallel_time.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            sequential_time.as_millis(),
            parallel_time.as_millis(),
            speedup
        );
    }

    Ok(())
}
