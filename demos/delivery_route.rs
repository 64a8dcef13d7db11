use colored::*;
use route_finder::algorithm::dijkstra::Dijkstra;
use route_finder::graph::generators::delivery_city;
use route_finder::graph::loader::load_graph_file;
use route_finder::graph::{list_topology, UndirectedGraph};
use route_finder::PathOutcome;
use ordered_float::OrderedFloat;
use std::env;

type RoadGraph = UndirectedGraph<OrderedFloat<f64>>;

/// Prints the roads of the map, one line per road
fn print_map(graph: &RoadGraph) {
    let topology = list_topology(graph);

    println!("{}", "🗺️  DELIVERY MAP  🗺️".bright_cyan().bold());
    println!("Locations: {}", topology.nodes.join(", ").bright_white());
    for edge in &topology.edges {
        println!(
            "  {} {} {} ({})",
            edge.source.bright_blue(),
            "──".dimmed(),
            edge.target.bright_blue(),
            format!("{:.1}", edge.weight).yellow()
        );
    }
}

fn print_route(graph: &RoadGraph, from: &str, to: &str) -> route_finder::Result<()> {
    let report = Dijkstra::new().search(graph, from, to)?;

    match report.outcome {
        PathOutcome::Found(result) => {
            let route = result
                .path
                .iter()
                .map(|n| n.bright_green().bold().to_string())
                .collect::<Vec<_>>()
                .join(" → ");
            println!(
                "{} {} → {}: {} (distance {})",
                "✅".bright_green(),
                from,
                to,
                route,
                format!("{:.1}", result.distance.into_inner()).bright_yellow().bold()
            );
            println!(
                "   settled {} nodes, relaxed {} edges, skipped {} stale entries",
                report.stats.nodes_settled, report.stats.edges_relaxed, report.stats.stale_entries_skipped
            );
        }
        PathOutcome::NoPath => {
            println!("{} No path found from {} to {}!", "❌".bright_red(), from, to);
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: delivery_route [graph.json] [start end]
    let args: Vec<String> = env::args().skip(1).collect();
    let (graph, query_args) = match args.first() {
        Some(path) if path.ends_with(".json") => (load_graph_file(path)?, &args[1..]),
        _ => (delivery_city()?, &args[..]),
    };

    print_map(&graph);
    println!();

    if let [from, to, ..] = query_args {
        print_route(&graph, from, to)?;
        return Ok(());
    }

    println!("{}", "Routes from every location:".bright_white().bold());
    let nodes: Vec<String> = graph.nodes().iter().map(|n| n.to_string()).collect();
    for from in &nodes {
        for to in &nodes {
            if from != to {
                print_route(&graph, from, to)?;
            }
        }
    }
    print_route(&graph, "Restaurant", "Nowhere")?;

    Ok(())
}
