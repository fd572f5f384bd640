use thiserror::Error;

/// Errors raised at the budget-selection call boundary.
///
/// All of them are detected before any table or ordering is built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("Budget must be non-negative, got {0}")]
    NegativeBudget(i64),
    #[error("Budget must be a whole number, got {0}")]
    NonIntegralBudget(f64),
    #[error("Budget {0} is too large")]
    BudgetOutOfRange(f64),
    #[error("Malformed catalog entry {item:?}: missing {field}")]
    MalformedItem { item: String, field: &'static str },
    #[error("Invalid {field} for catalog entry {item:?}: expected a non-negative integer")]
    InvalidField { item: String, field: &'static str },
    #[error("Catalog entry {0:?} must be an Item or a dict with cost and value")]
    InvalidEntry(String),
    #[error("Duplicate item in catalog: {0}")]
    DuplicateItem(String),
    #[error("DP table of {cells} cells exceeds the configured limit of {limit}")]
    TableTooLarge { cells: u128, limit: u64 },
    #[error("Unknown greedy tie-break policy: {0}")]
    UnknownTieBreak(String),
}
