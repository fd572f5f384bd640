//! Single-source shortest paths over non-negative weighted graphs.
//!
//! The search keeps a binary-heap frontier that tolerates duplicate entries
//! for the same vertex. Outdated entries are skipped when popped instead of
//! being updated in place.

mod engine;
mod frontier;
mod graph;

pub use engine::{
    shortest_path_tree, shortest_paths, shortest_paths_with_config, ShortestPathTree,
};
pub use graph::{undirected_graph, validate_weights, Graph, PathError};
