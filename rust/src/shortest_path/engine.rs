//! Single-source shortest paths with a lazy-deletion binary heap.
//!
//! Every improvement pushes a fresh frontier entry instead of decreasing an
//! existing key. Entries whose distance is worse than the recorded best are
//! stale and are dropped when popped.

use std::collections::{BinaryHeap, HashMap};

use crate::config::PathConfig;
use crate::interner::{VertexId, VertexInterner};
use crate::models::DistanceTable;
use crate::{log_decisions, log_summary, log_trace};

use super::frontier::FrontierEntry;
use super::graph::{validate_weights, Graph, PathError};

/// Result of a shortest-path query: distances plus the predecessor that
/// produced each best distance.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    vertices: VertexInterner,
    start: VertexId,
    distances: Vec<f64>,
    predecessors: Vec<Option<VertexId>>,
    frontier_pops: usize,
    stale_pops: usize,
}

impl ShortestPathTree {
    pub fn start(&self) -> &str {
        self.vertices.resolve(self.start).unwrap_or_default()
    }

    /// Distance to `vertex`; `f64::INFINITY` if unreachable, `None` if unknown.
    pub fn distance(&self, vertex: &str) -> Option<f64> {
        let id = self.vertices.get(vertex)?;
        Some(self.distances[id as usize])
    }

    /// Vertex preceding `vertex` on its shortest path.
    pub fn predecessor(&self, vertex: &str) -> Option<&str> {
        let id = self.vertices.get(vertex)?;
        let pred = self.predecessors[id as usize]?;
        self.vertices.resolve(pred)
    }

    /// Vertices from the start to `target`, inclusive.
    ///
    /// Returns `None` when `target` is unknown or unreachable.
    pub fn path_to(&self, target: &str) -> Option<Vec<String>> {
        let target_id = self.vertices.get(target)?;
        if !self.distances[target_id as usize].is_finite() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = Some(target_id);
        while let Some(id) = current {
            path.push(self.vertices.resolve(id)?.to_string());
            if id == self.start {
                break;
            }
            current = self.predecessors[id as usize];
        }
        path.reverse();
        Some(path)
    }

    /// Frontier entries popped during the search, stale ones included.
    pub fn frontier_pops(&self) -> usize {
        self.frontier_pops
    }

    /// Popped entries discarded because a shorter distance was already known.
    pub fn stale_pops(&self) -> usize {
        self.stale_pops
    }

    /// Number of vertices with a finite distance (the start included).
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }

    pub fn distances(&self) -> DistanceTable {
        DistanceTable::from_map(self.distance_map())
    }

    pub fn into_distances(self) -> DistanceTable {
        DistanceTable::from_map(self.distance_map())
    }

    fn distance_map(&self) -> HashMap<String, f64> {
        self.vertices
            .iter()
            .map(|(id, name)| (name.to_string(), self.distances[id as usize]))
            .collect()
    }
}

/// Graph converted to dense vertex IDs.
struct IndexedGraph {
    vertices: VertexInterner,
    adjacency: Vec<Vec<(VertexId, f64)>>,
}

impl IndexedGraph {
    /// Collect every vertex named as a key, as a neighbor, or as the start.
    fn build(graph: &Graph, start: &str) -> Self {
        let names = graph
            .iter()
            .flat_map(|(from, edges)| {
                std::iter::once(from.as_str()).chain(edges.keys().map(String::as_str))
            })
            .chain(std::iter::once(start));
        let vertices = VertexInterner::from_sorted(names);

        let mut adjacency: Vec<Vec<(VertexId, f64)>> = vec![Vec::new(); vertices.len()];
        for (from, edges) in graph {
            let Some(from_id) = vertices.get(from) else {
                continue;
            };
            let list = &mut adjacency[from_id as usize];
            list.extend(
                edges
                    .iter()
                    .filter_map(|(to, &w)| vertices.get(to).map(|to_id| (to_id, w))),
            );
            // Sort for determinism
            list.sort_by_key(|&(to_id, _)| to_id);
        }

        Self {
            vertices,
            adjacency,
        }
    }
}

/// Compute shortest distances from `start` with the default configuration.
///
/// # Returns
/// * `Ok(DistanceTable)` with one entry per vertex known to the graph
/// * `Err(PathError::InvalidWeight)` if any edge weight is negative or non-finite
pub fn shortest_paths(graph: &Graph, start: &str) -> Result<DistanceTable, PathError> {
    shortest_paths_with_config(graph, start, &PathConfig::default())
}

pub fn shortest_paths_with_config(
    graph: &Graph,
    start: &str,
    config: &PathConfig,
) -> Result<DistanceTable, PathError> {
    Ok(shortest_path_tree(graph, start, config)?.into_distances())
}

/// Run the search and keep predecessors for path reconstruction.
///
/// A `start` that is not a key of `graph` is treated as an isolated vertex.
/// With `validate_weights` disabled, negative weights are not rejected and
/// the returned distances are meaningless. A negative cycle (e.g.
/// `A->B 1, B->A -3`) keeps producing strictly smaller candidates until
/// float rounding stops it, on the order of 2^52 iterations, so the call
/// effectively never returns.
pub fn shortest_path_tree(
    graph: &Graph,
    start: &str,
    config: &PathConfig,
) -> Result<ShortestPathTree, PathError> {
    if config.validate_weights {
        validate_weights(graph)?;
    }

    let verbosity = config.verbosity;
    let IndexedGraph {
        vertices,
        adjacency,
    } = IndexedGraph::build(graph, start);

    let n = vertices.len();
    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors: Vec<Option<VertexId>> = vec![None; n];
    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();

    // start is always interned by IndexedGraph::build
    let start_id = vertices.get(start).unwrap_or_default();
    distances[start_id as usize] = 0.0;
    frontier.push(FrontierEntry {
        distance: 0.0,
        vertex: start_id,
    });

    let mut pops = 0usize;
    let mut stale = 0usize;

    while let Some(FrontierEntry { distance, vertex }) = frontier.pop() {
        pops += 1;
        let name = vertices.resolve(vertex).unwrap_or_default();

        if distance > distances[vertex as usize] {
            stale += 1;
            log_trace!(
                verbosity,
                "  stale ({}, {}), best is {}",
                distance,
                name,
                distances[vertex as usize]
            );
            continue;
        }
        log_trace!(verbosity, "pop ({}, {})", distance, name);

        for &(neighbor, weight) in &adjacency[vertex as usize] {
            let candidate = distance + weight;
            if candidate < distances[neighbor as usize] {
                log_decisions!(
                    verbosity,
                    "  relax {} -> {}: {} -> {}",
                    name,
                    vertices.resolve(neighbor).unwrap_or_default(),
                    distances[neighbor as usize],
                    candidate
                );
                distances[neighbor as usize] = candidate;
                predecessors[neighbor as usize] = Some(vertex);
                frontier.push(FrontierEntry {
                    distance: candidate,
                    vertex: neighbor,
                });
            }
        }
    }

    let tree = ShortestPathTree {
        vertices,
        start: start_id,
        distances,
        predecessors,
        frontier_pops: pops,
        stale_pops: stale,
    };
    log_summary!(
        verbosity,
        "shortest paths from {}: {}/{} reachable, {} pops ({} stale)",
        start,
        tree.reachable_count(),
        n,
        pops,
        stale
    );
    Ok(tree)
}
