//! Core data types shared by the library and the Python bindings.

use pyo3::prelude::*;
use std::collections::HashMap;

// Note: We use std HashMap here for PyO3 interface compatibility

/// A selectable item with a cost and a value.
#[pyclass]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    #[pyo3(get, set)]
    pub cost: u64,
    #[pyo3(get, set)]
    pub value: u64,
}

impl Item {
    pub fn new(cost: u64, value: u64) -> Self {
        Self { cost, value }
    }
}

#[pymethods]
impl Item {
    #[new]
    fn py_new(cost: u64, value: u64) -> Self {
        Self::new(cost, value)
    }

    fn __repr__(&self) -> String {
        format!("Item(cost={}, value={})", self.cost, self.value)
    }
}

/// Items chosen by a selector, in the order the selector reports them.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionResult {
    #[pyo3(get, set)]
    pub selected: Vec<String>,
    #[pyo3(get, set)]
    pub total_cost: u64,
    #[pyo3(get, set)]
    pub total_value: u64,
}

#[pymethods]
impl SelectionResult {
    #[new]
    #[pyo3(signature = (selected=None, total_cost=0, total_value=0))]
    fn new(selected: Option<Vec<String>>, total_cost: u64, total_value: u64) -> Self {
        Self {
            selected: selected.unwrap_or_default(),
            total_cost,
            total_value,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "SelectionResult(selected={:?}, total_cost={}, total_value={})",
            self.selected, self.total_cost, self.total_value
        )
    }
}

/// Best known distance from the query start to every vertex.
///
/// Unreachable vertices hold `f64::INFINITY`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DistanceTable {
    distances: HashMap<String, f64>,
}

impl DistanceTable {
    pub(crate) fn from_map(distances: HashMap<String, f64>) -> Self {
        Self { distances }
    }

    /// Distance to `vertex`, or `None` if the vertex was not part of the graph.
    pub fn get(&self, vertex: &str) -> Option<f64> {
        self.distances.get(vertex).copied()
    }

    pub fn is_reachable(&self, vertex: &str) -> bool {
        self.get(vertex).is_some_and(f64::is_finite)
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.distances.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn into_map(self) -> HashMap<String, f64> {
        self.distances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_table_lookup() {
        let table = DistanceTable::from_map(HashMap::from([
            ("A".to_string(), 0.0),
            ("B".to_string(), 2.5),
            ("Z".to_string(), f64::INFINITY),
        ]));

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("B"), Some(2.5));
        assert!(table.is_reachable("A"));
        assert!(!table.is_reachable("Z"));
        assert!(!table.is_reachable("missing"));
        assert_eq!(table.get("missing"), None);
    }

    #[test]
    fn test_selection_result_default_is_empty() {
        let result = SelectionResult::default();
        assert!(result.selected.is_empty());
        assert_eq!(result.total_cost, 0);
        assert_eq!(result.total_value, 0);
    }
}
