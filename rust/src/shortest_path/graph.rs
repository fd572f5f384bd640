//! Weighted graph representation and input validation.

use std::collections::HashMap;

use thiserror::Error;

/// Adjacency map: vertex -> (neighbor -> edge weight).
///
/// Directed. An undirected graph is one where every edge appears in both
/// directions with the same weight (see [`undirected_graph`]).
pub type Graph = HashMap<String, HashMap<String, f64>>;

/// Errors raised before a shortest-path query starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("Invalid edge weight {weight} on {from} -> {to}: weights must be finite and non-negative")]
    InvalidWeight { from: String, to: String, weight: f64 },
}

/// Reject any negative, NaN or infinite edge weight.
///
/// Vertices are checked in sorted order so the reported edge does not depend
/// on `HashMap` iteration order.
pub fn validate_weights(graph: &Graph) -> Result<(), PathError> {
    let mut vertices: Vec<&String> = graph.keys().collect();
    vertices.sort();

    for from in vertices {
        let mut edges: Vec<(&String, &f64)> = graph[from].iter().collect();
        edges.sort_by(|a, b| a.0.cmp(b.0));
        for (to, &weight) in edges {
            if !weight.is_finite() || weight < 0.0 {
                return Err(PathError::InvalidWeight {
                    from: from.clone(),
                    to: to.clone(),
                    weight,
                });
            }
        }
    }
    Ok(())
}

/// Build a symmetric graph from `(a, b, weight)` edges.
///
/// Each edge is stored in both directions. Repeated pairs keep the smaller
/// weight.
pub fn undirected_graph<'a>(edges: impl IntoIterator<Item = (&'a str, &'a str, f64)>) -> Graph {
    let mut graph = Graph::new();
    for (a, b, weight) in edges {
        insert_min(&mut graph, a, b, weight);
        insert_min(&mut graph, b, a, weight);
    }
    graph
}

fn insert_min(graph: &mut Graph, from: &str, to: &str, weight: f64) {
    graph
        .entry(from.to_string())
        .or_default()
        .entry(to.to_string())
        .and_modify(|w| *w = w.min(weight))
        .or_insert(weight);
}
