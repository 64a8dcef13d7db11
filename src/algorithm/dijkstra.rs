use std::fmt::Debug;
use num_traits::Float;

use crate::algorithm::traits::{reconstruct_path, validate_endpoints};
use crate::algorithm::{PathFinder, PathOutcome, PathResult};
use crate::data_structures::Frontier;
use crate::graph::{Graph, NodeId};
use crate::{Error, Result};

/// Counters collected while answering a single query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose distance was finalized
    pub nodes_settled: usize,
    /// Successful relaxations, i.e. frontier insertions after the start node
    pub edges_relaxed: usize,
    /// Outdated frontier entries discarded on dequeue
    pub stale_entries_skipped: usize,
    /// Largest frontier size observed
    pub peak_frontier: usize,
}

/// Query outcome together with the work it took
#[derive(Debug, Clone)]
pub struct SearchReport<W>
where
    W: Float + Debug + Copy,
{
    pub outcome: PathOutcome<W>,
    pub stats: SearchStats,
}

/// Classic Dijkstra's algorithm with a lazy-deletion frontier
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Runs a single query and reports the counters alongside the outcome.
    ///
    /// Endpoints unknown to the graph resolve to `NoPath` without traversal.
    /// Empty endpoint names are rejected with `Error::InvalidInput`.
    pub fn search<W, G>(&self, graph: &G, start: &str, end: &str) -> Result<SearchReport<W>>
    where
        W: Float + Debug + Copy + Ord,
        G: Graph<W>,
    {
        validate_endpoints(start, end)?;

        let mut stats = SearchStats::default();

        let (source, target) = match (graph.node_id(start), graph.node_id(end)) {
            (Some(source), Some(target)) => (source, target),
            _ => {
                log::debug!("No path: {:?} or {:?} is not in the graph", start, end);
                return Ok(SearchReport { outcome: PathOutcome::NoPath, stats });
            }
        };

        let n = graph.node_count();

        // Initialize distances and parents
        let mut distances: Vec<W> = vec![W::infinity(); n];
        let mut parents: Vec<Option<NodeId>> = vec![None; n];
        let mut visited = vec![false; n];

        distances[source] = W::zero();

        let mut frontier = Frontier::with_capacity(n);
        frontier.enqueue(source, W::zero());
        stats.peak_frontier = 1;

        while let Some((current, current_distance)) = frontier.dequeue_min() {
            // A shorter entry for this node was already settled
            if visited[current] {
                stats.stale_entries_skipped += 1;
                continue;
            }
            visited[current] = true;
            stats.nodes_settled += 1;

            if current == target {
                let path = reconstruct_path(graph, &parents, target)?;
                log::debug!(
                    "Found path {} -> {} over {} nodes ({:?})",
                    start,
                    end,
                    path.len(),
                    stats
                );
                return Ok(SearchReport {
                    outcome: PathOutcome::Found(PathResult {
                        path,
                        distance: distances[target],
                    }),
                    stats,
                });
            }

            // Relax all incident edges
            for (neighbor, weight) in graph.adjacent(current) {
                if visited[neighbor] {
                    continue;
                }

                let candidate = current_distance + weight;
                if !candidate.is_finite() {
                    log::warn!("Distance overflow while routing {} -> {}", start, end);
                    return Err(Error::DistanceOverflow {
                        start: start.to_string(),
                        end: end.to_string(),
                    });
                }
                if candidate < distances[neighbor] {
                    distances[neighbor] = candidate;
                    parents[neighbor] = Some(current);
                    frontier.enqueue(neighbor, candidate);
                    stats.edges_relaxed += 1;
                    stats.peak_frontier = stats.peak_frontier.max(frontier.len());
                }
            }
        }

        log::debug!("No path between {} and {} ({:?})", start, end, stats);
        Ok(SearchReport { outcome: PathOutcome::NoPath, stats })
    }
}

impl<W, G> PathFinder<W, G> for Dijkstra
where
    W: Float + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn find_path(&self, graph: &G, start: &str, end: &str) -> Result<PathOutcome<W>> {
        self.search(graph, start, end).map(|report| report.outcome)
    }
}
