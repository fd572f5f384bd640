//! Shortest paths and budget-constrained selection.
//!
//! Two independent components, usable from Rust and (through PyO3) from Python:
//! - `shortest_path`: single-source distances over non-negative weighted graphs
//! - `budget`: greedy and exact dynamic-programming item selection under a budget

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::collections::HashMap;

pub mod budget;
mod config;
mod interner;
pub mod logging;
mod models;
pub mod shortest_path;

pub use budget::{
    greedy_select, greedy_select_with_config, optimal_select, optimal_select_with_config,
    parse_budget, ItemCatalog, SelectionError,
};
pub use config::{GreedyTieBreak, PathConfig, SelectionConfig};
pub use models::{DistanceTable, Item, SelectionResult};
pub use shortest_path::{
    shortest_path_tree, shortest_paths, shortest_paths_with_config, undirected_graph, Graph,
    PathError, ShortestPathTree,
};

fn value_error(err: impl std::fmt::Display) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}

/// Read one required integer field of a catalog entry dict.
///
/// Missing, negative, oversized and non-integer values all raise ValueError.
fn required_field(entry: &Bound<'_, PyDict>, item: &str, field: &'static str) -> PyResult<u64> {
    match entry.get_item(field)? {
        Some(value) => value.extract::<u64>().map_err(|_| {
            value_error(SelectionError::InvalidField {
                item: item.to_string(),
                field,
            })
        }),
        None => Err(value_error(SelectionError::MalformedItem {
            item: item.to_string(),
            field,
        })),
    }
}

/// Convert a Python dict into a catalog, keeping the dict's insertion order.
///
/// Entries may be `Item` instances or dicts with "cost" and "value" keys.
fn catalog_from_py(catalog: &Bound<'_, PyDict>) -> PyResult<ItemCatalog> {
    let mut items = ItemCatalog::new();
    for (key, entry) in catalog.iter() {
        let id: String = key.extract()?;
        let item = match entry.extract::<Item>() {
            Ok(item) => item,
            Err(_) => {
                let fields = entry
                    .downcast::<PyDict>()
                    .map_err(|_| value_error(SelectionError::InvalidEntry(id.clone())))?;
                Item::new(
                    required_field(fields, &id, "cost")?,
                    required_field(fields, &id, "value")?,
                )
            }
        };
        items.push(id, item).map_err(value_error)?;
    }
    Ok(items)
}

/// Compute shortest distances from `start` to every vertex.
///
/// # Arguments
/// * `graph` - Dict mapping vertex -> {neighbor: weight}
/// * `start` - Source vertex (need not be a key of `graph`)
/// * `config` - Optional PathConfig (verbosity, weight validation)
///
/// # Returns
/// * Dict mapping vertex -> distance, `inf` for unreachable vertices
///
/// # Raises
/// * ValueError if an edge weight is negative or non-finite
#[pyfunction]
#[pyo3(signature = (graph, start, config=None))]
fn run_shortest_paths(
    graph: HashMap<String, HashMap<String, f64>>,
    start: String,
    config: Option<PathConfig>,
) -> PyResult<HashMap<String, f64>> {
    let config = config.unwrap_or_default();
    match shortest_paths_with_config(&graph, &start, &config) {
        Ok(table) => Ok(table.into_map()),
        Err(e) => Err(value_error(e)),
    }
}

/// Compute the shortest path from `start` to `target`.
///
/// # Returns
/// * Tuple (distance, path); distance is `inf` and path is None if unreachable
#[pyfunction]
#[pyo3(signature = (graph, start, target, config=None))]
fn run_shortest_path(
    graph: HashMap<String, HashMap<String, f64>>,
    start: String,
    target: String,
    config: Option<PathConfig>,
) -> PyResult<(f64, Option<Vec<String>>)> {
    let config = config.unwrap_or_default();
    let tree = shortest_path_tree(&graph, &start, &config).map_err(value_error)?;
    let distance = tree.distance(&target).unwrap_or(f64::INFINITY);
    Ok((distance, tree.path_to(&target)))
}

/// Select items greedily by value/cost ratio.
///
/// # Arguments
/// * `catalog` - Dict mapping item ID -> {"cost": int, "value": int} (or Item)
/// * `budget` - Non-negative whole number
/// * `config` - Optional SelectionConfig (verbosity, tie_break)
///
/// # Raises
/// * ValueError on a negative or fractional budget or a malformed entry
#[pyfunction]
#[pyo3(signature = (catalog, budget, config=None))]
fn run_greedy_select(
    catalog: &Bound<'_, PyDict>,
    budget: f64,
    config: Option<SelectionConfig>,
) -> PyResult<SelectionResult> {
    let config = config.unwrap_or_default();
    let budget = parse_budget(budget).map_err(value_error)?;
    let items = catalog_from_py(catalog)?;
    greedy_select_with_config(&items, budget, &config).map_err(value_error)
}

/// Select the highest-value set of items within budget.
///
/// Takes the same arguments as `run_greedy_select`; `selected` comes back in
/// catalog order.
///
/// # Raises
/// * ValueError on a negative or fractional budget, a malformed entry, or a
///   DP table larger than `config.max_table_cells`
#[pyfunction]
#[pyo3(signature = (catalog, budget, config=None))]
fn run_optimal_select(
    catalog: &Bound<'_, PyDict>,
    budget: f64,
    config: Option<SelectionConfig>,
) -> PyResult<SelectionResult> {
    let config = config.unwrap_or_default();
    let budget = parse_budget(budget).map_err(value_error)?;
    let items = catalog_from_py(catalog)?;
    optimal_select_with_config(&items, budget, &config).map_err(value_error)
}

/// The algokit.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Data types
    m.add_class::<Item>()?;
    m.add_class::<SelectionResult>()?;

    // Config types
    m.add_class::<PathConfig>()?;
    m.add_class::<SelectionConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(run_shortest_paths, m)?)?;
    m.add_function(wrap_pyfunction!(run_shortest_path, m)?)?;
    m.add_function(wrap_pyfunction!(run_greedy_select, m)?)?;
    m.add_function(wrap_pyfunction!(run_optimal_select, m)?)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyo3::exceptions::PyValueError;

    fn with_py<F>(f: F)
    where
        F: for<'py> FnOnce(Python<'py>),
    {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(f)
    }

    fn entry<'py>(py: Python<'py>, fields: &[(&str, i64)]) -> Bound<'py, PyDict> {
        let dict = PyDict::new_bound(py);
        for &(key, value) in fields {
            dict.set_item(key, value).unwrap();
        }
        dict
    }

    fn food_dict(py: Python<'_>) -> Bound<'_, PyDict> {
        let catalog = PyDict::new_bound(py);
        for (id, cost, value) in [
            ("pizza", 50, 300),
            ("hamburger", 40, 250),
            ("hot-dog", 30, 200),
            ("pepsi", 10, 100),
            ("cola", 15, 220),
            ("potato", 25, 350),
        ] {
            catalog
                .set_item(id, entry(py, &[("cost", cost), ("value", value)]))
                .unwrap();
        }
        catalog
    }

    fn assert_value_error(py: Python<'_>, err: &PyErr, fragment: &str) {
        assert!(err.is_instance_of::<PyValueError>(py), "got {err}");
        let message = err.value_bound(py).to_string();
        assert!(message.contains(fragment), "{message:?} lacks {fragment:?}");
    }

    #[test]
    fn test_optimal_select_from_dict_catalog() {
        with_py(|py| {
            let result = run_optimal_select(&food_dict(py), 100.0, None).unwrap();

            assert_eq!(result.selected, vec!["pizza", "pepsi", "cola", "potato"]);
            assert_eq!(result.total_cost, 100);
            assert_eq!(result.total_value, 970);
        });
    }

    #[test]
    fn test_greedy_select_accepts_item_instances() {
        with_py(|py| {
            let catalog = PyDict::new_bound(py);
            catalog
                .set_item("cheap", Bound::new(py, Item::new(1, 10)).unwrap())
                .unwrap();
            catalog
                .set_item("dear", entry(py, &[("cost", 5), ("value", 20)]))
                .unwrap();

            let result = run_greedy_select(&catalog, 5.0, None).unwrap();
            assert_eq!(result.selected, vec!["cheap"]);
            assert_eq!(result.total_value, 10);
        });
    }

    #[test]
    fn test_missing_field_is_value_error() {
        with_py(|py| {
            let catalog = PyDict::new_bound(py);
            catalog.set_item("x", entry(py, &[("value", 3)])).unwrap();

            let err = run_greedy_select(&catalog, 10.0, None).unwrap_err();
            assert_value_error(py, &err, "missing cost");
        });
    }

    #[test]
    fn test_negative_field_is_value_error() {
        with_py(|py| {
            let catalog = PyDict::new_bound(py);
            catalog
                .set_item("x", entry(py, &[("cost", -1), ("value", 3)]))
                .unwrap();

            let err = run_optimal_select(&catalog, 10.0, None).unwrap_err();
            assert_value_error(py, &err, "Invalid cost");
        });
    }

    #[test]
    fn test_non_integer_field_is_value_error() {
        with_py(|py| {
            let fields = PyDict::new_bound(py);
            fields.set_item("cost", "cheap").unwrap();
            fields.set_item("value", 3).unwrap();
            let catalog = PyDict::new_bound(py);
            catalog.set_item("x", fields).unwrap();

            let err = run_greedy_select(&catalog, 10.0, None).unwrap_err();
            assert_value_error(py, &err, "Invalid cost");
        });
    }

    #[test]
    fn test_non_dict_entry_is_value_error() {
        with_py(|py| {
            let catalog = PyDict::new_bound(py);
            catalog.set_item("y", 3).unwrap();

            let err = run_greedy_select(&catalog, 10.0, None).unwrap_err();
            assert_value_error(py, &err, "\"y\"");
        });
    }

    #[test]
    fn test_fractional_and_negative_budgets_are_value_errors() {
        with_py(|py| {
            let err = run_greedy_select(&food_dict(py), 2.5, None).unwrap_err();
            assert_value_error(py, &err, "whole number");

            let err = run_optimal_select(&food_dict(py), -4.0, None).unwrap_err();
            assert_value_error(py, &err, "non-negative");
        });
    }

    #[test]
    fn test_table_limit_is_value_error() {
        with_py(|py| {
            let config = SelectionConfig {
                max_table_cells: 10,
                ..SelectionConfig::default()
            };
            let err = run_optimal_select(&food_dict(py), 100.0, Some(config)).unwrap_err();
            assert_value_error(py, &err, "exceeds");
        });
    }

    #[test]
    fn test_shortest_path_to_unreachable_target() {
        let graph: Graph = HashMap::from([
            ("A".to_string(), HashMap::from([("B".to_string(), 2.0)])),
            ("C".to_string(), HashMap::new()),
        ]);

        let (distance, path) =
            run_shortest_path(graph.clone(), "A".to_string(), "C".to_string(), None).unwrap();
        assert_eq!(distance, f64::INFINITY);
        assert_eq!(path, None);

        let (distance, path) =
            run_shortest_path(graph.clone(), "A".to_string(), "B".to_string(), None).unwrap();
        assert_eq!(distance, 2.0);
        assert_eq!(path, Some(vec!["A".to_string(), "B".to_string()]));

        let distances = run_shortest_paths(graph, "A".to_string(), None).unwrap();
        assert_eq!(distances.len(), 3);
        assert_eq!(distances["C"], f64::INFINITY);
    }

    #[test]
    fn test_negative_weight_is_value_error() {
        with_py(|py| {
            let graph: Graph =
                HashMap::from([("A".to_string(), HashMap::from([("B".to_string(), -1.0)]))]);

            let err = run_shortest_paths(graph, "A".to_string(), None).unwrap_err();
            assert_value_error(py, &err, "A -> B");
        });
    }
}
