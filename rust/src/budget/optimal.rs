//! Exact 0/1 selection by dynamic programming over (item prefix, budget).

use crate::config::SelectionConfig;
use crate::models::SelectionResult;
use crate::{log_decisions, log_summary, log_trace};

use super::catalog::{validate_budget, ItemCatalog};
use super::error::SelectionError;

/// `best[i][b]`: highest value reachable with the first `i` items and budget `b`.
///
/// Stored row-major in one allocation of `(items + 1) * (budget + 1)` cells.
struct ValueTable {
    width: usize,
    cells: Vec<u64>,
}

impl ValueTable {
    fn new(rows: usize, width: usize) -> Self {
        Self {
            width,
            cells: vec![0; rows * width],
        }
    }

    #[inline]
    fn get(&self, row: usize, budget: usize) -> u64 {
        self.cells[row * self.width + budget]
    }

    #[inline]
    fn set(&mut self, row: usize, budget: usize, value: u64) {
        self.cells[row * self.width + budget] = value;
    }
}

/// Fill the table with the recurrence
/// `best[i][b] = max(best[i-1][b], value_i + best[i-1][b - cost_i])`,
/// the second term only when `cost_i <= b`.
fn fill_table(catalog: &ItemCatalog, budget: usize, verbosity: u8) -> ValueTable {
    let rows = catalog.len() + 1;
    let mut table = ValueTable::new(rows, budget + 1);

    for row in 1..rows {
        let (id, item) = catalog.entry(row - 1);
        for b in 0..=budget {
            let excluded = table.get(row - 1, b);
            let best = match usize::try_from(item.cost) {
                Ok(cost) if cost <= b => {
                    let included = item.value.saturating_add(table.get(row - 1, b - cost));
                    excluded.max(included)
                }
                _ => excluded,
            };
            table.set(row, b, best);
        }
        log_trace!(
            verbosity,
            "  row {} ({}): best at full budget {}",
            row,
            id,
            table.get(row, budget)
        );
    }
    table
}

/// Walk the table back from `best[n][budget]` and list the chosen indices.
///
/// A row whose value differs from the row above at the current remaining
/// budget must have included its item.
fn reconstruct(
    table: &ValueTable,
    catalog: &ItemCatalog,
    budget: usize,
    verbosity: u8,
) -> Vec<usize> {
    let mut chosen = Vec::new();
    let mut remaining = budget;

    for row in (1..=catalog.len()).rev() {
        if table.get(row, remaining) != table.get(row - 1, remaining) {
            let (id, item) = catalog.entry(row - 1);
            // an included item always fits, so its cost is <= remaining
            remaining -= item.cost as usize;
            chosen.push(row - 1);
            log_decisions!(
                verbosity,
                "  optimal take {} (cost={}, value={}), {} left",
                id,
                item.cost,
                item.value,
                remaining
            );
        }
    }

    chosen.reverse();
    chosen
}

/// Find the highest-value selection within budget with the default configuration.
pub fn optimal_select(
    catalog: &ItemCatalog,
    budget: i64,
) -> Result<SelectionResult, SelectionError> {
    optimal_select_with_config(catalog, budget, &SelectionConfig::default())
}

/// Find the highest-value selection within budget.
///
/// `selected` is in catalog order. Columns past the catalog's total cost
/// would all hold the same values, so the table is only as wide as
/// `min(budget, total cost) + 1`.
///
/// # Returns
/// * `Err(SelectionError::NegativeBudget)` if `budget < 0`
/// * `Err(SelectionError::TableTooLarge)` if the table would exceed `config.max_table_cells`
pub fn optimal_select_with_config(
    catalog: &ItemCatalog,
    budget: i64,
    config: &SelectionConfig,
) -> Result<SelectionResult, SelectionError> {
    let budget = validate_budget(budget)?;
    let verbosity = config.verbosity;

    if catalog.is_empty() {
        log_summary!(verbosity, "optimal: empty catalog");
        return Ok(SelectionResult::default());
    }

    let total_cost = catalog
        .iter()
        .fold(0u64, |acc, (_, item)| acc.saturating_add(item.cost));
    let effective_budget = budget.min(total_cost);

    let cells = (catalog.len() as u128 + 1) * (effective_budget as u128 + 1);
    let too_large = || SelectionError::TableTooLarge {
        cells,
        limit: config.max_table_cells,
    };
    if cells > config.max_table_cells as u128 {
        return Err(too_large());
    }
    let width_budget = usize::try_from(effective_budget).map_err(|_| too_large())?;

    let table = fill_table(catalog, width_budget, verbosity);
    let chosen = reconstruct(&table, catalog, width_budget, verbosity);

    let mut result = SelectionResult {
        total_value: table.get(catalog.len(), width_budget),
        ..SelectionResult::default()
    };
    for index in chosen {
        let (id, item) = catalog.entry(index);
        result.total_cost += item.cost;
        result.selected.push(id.to_string());
    }

    log_summary!(
        verbosity,
        "optimal: {} of {} items, cost {}/{}, value {}",
        result.selected.len(),
        catalog.len(),
        result.total_cost,
        budget,
        result.total_value
    );
    Ok(result)
}
