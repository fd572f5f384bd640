//! Configuration types for shortest-path queries and budget selection.

use pyo3::prelude::*;

use crate::budget::SelectionError;

/// Default upper bound on DP table cells ((items + 1) * (budget + 1)).
pub const DEFAULT_MAX_TABLE_CELLS: u64 = 50_000_000;

/// Configuration for a shortest-path query.
#[pyclass]
#[derive(Clone, Debug)]
pub struct PathConfig {
    /// Verbosity level: 0=silent, 1=summary, 2=decisions, 3=trace.
    #[pyo3(get, set)]
    pub verbosity: u8,
    /// Reject negative or non-finite edge weights before the search starts.
    #[pyo3(get, set)]
    pub validate_weights: bool,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            verbosity: 0,
            validate_weights: true,
        }
    }
}

#[pymethods]
impl PathConfig {
    #[new]
    #[pyo3(signature = (verbosity=None, validate_weights=None))]
    fn new(verbosity: Option<u8>, validate_weights: Option<bool>) -> Self {
        let defaults = Self::default();
        Self {
            verbosity: verbosity.unwrap_or(defaults.verbosity),
            validate_weights: validate_weights.unwrap_or(defaults.validate_weights),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "PathConfig(verbosity={}, validate_weights={})",
            self.verbosity, self.validate_weights
        )
    }
}

/// How the greedy selector orders items whose value/cost ratios are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GreedyTieBreak {
    /// Keep catalog enumeration order (stable sort).
    #[default]
    CatalogOrder,
    /// Prefer the item with the larger value, then catalog order.
    HigherValue,
}

impl GreedyTieBreak {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CatalogOrder => "catalog_order",
            Self::HigherValue => "higher_value",
        }
    }
}

impl std::str::FromStr for GreedyTieBreak {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "catalog_order" => Ok(Self::CatalogOrder),
            "higher_value" => Ok(Self::HigherValue),
            other => Err(SelectionError::UnknownTieBreak(other.to_string())),
        }
    }
}

/// Configuration for greedy and optimal budget selection.
#[pyclass]
#[derive(Clone, Debug)]
pub struct SelectionConfig {
    /// Verbosity level: 0=silent, 1=summary, 2=decisions, 3=trace.
    #[pyo3(get, set)]
    pub verbosity: u8,
    /// Greedy tie-break policy: "catalog_order" or "higher_value"
    #[pyo3(get, set)]
    pub tie_break: String,
    /// Largest DP table (in cells) the optimal selector will allocate
    #[pyo3(get, set)]
    pub max_table_cells: u64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            verbosity: 0,
            tie_break: GreedyTieBreak::default().as_str().to_string(),
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
        }
    }
}

impl SelectionConfig {
    /// Parse the configured tie-break policy.
    pub fn greedy_tie_break(&self) -> Result<GreedyTieBreak, SelectionError> {
        self.tie_break.parse()
    }
}

#[pymethods]
impl SelectionConfig {
    #[new]
    #[pyo3(signature = (verbosity=None, tie_break=None, max_table_cells=None))]
    fn new(verbosity: Option<u8>, tie_break: Option<String>, max_table_cells: Option<u64>) -> Self {
        let defaults = Self::default();
        Self {
            verbosity: verbosity.unwrap_or(defaults.verbosity),
            tie_break: tie_break.unwrap_or(defaults.tie_break),
            max_table_cells: max_table_cells.unwrap_or(defaults.max_table_cells),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "SelectionConfig(verbosity={}, tie_break={:?}, max_table_cells={})",
            self.verbosity, self.tie_break, self.max_table_cells
        )
    }
}
