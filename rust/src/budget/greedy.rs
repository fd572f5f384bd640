//! Greedy selection by value/cost ratio.
//!
//! Single pass, no backtracking: an item that does not fit when its turn
//! comes is skipped for good, so the result can be worse than optimal.

use std::cmp::Ordering;

use crate::config::{GreedyTieBreak, SelectionConfig};
use crate::models::{Item, SelectionResult};
use crate::{log_decisions, log_summary};

use super::catalog::{validate_budget, ItemCatalog};
use super::error::SelectionError;

/// Compare the value/cost ratios of two items exactly.
///
/// Zero-cost items have an infinite ratio. Two zero-cost items compare equal.
fn cmp_ratio(a: &Item, b: &Item) -> Ordering {
    match (a.cost == 0, b.cost == 0) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            // a.value / a.cost vs b.value / b.cost, cross-multiplied
            let lhs = a.value as u128 * b.cost as u128;
            let rhs = b.value as u128 * a.cost as u128;
            lhs.cmp(&rhs)
        }
    }
}

/// Catalog indices in the order the greedy pass considers them.
fn ratio_order(catalog: &ItemCatalog, tie_break: GreedyTieBreak) -> Vec<usize> {
    let mut order: Vec<usize> = (0..catalog.len()).collect();
    order.sort_by(|&i, &j| {
        let (_, a) = catalog.entry(i);
        let (_, b) = catalog.entry(j);
        let by_ratio = cmp_ratio(b, a);
        let by_policy = match tie_break {
            GreedyTieBreak::CatalogOrder => by_ratio,
            GreedyTieBreak::HigherValue => by_ratio.then_with(|| b.value.cmp(&a.value)),
        };
        by_policy.then_with(|| i.cmp(&j))
    });
    order
}

/// Select items greedily by value/cost ratio with the default configuration.
pub fn greedy_select(catalog: &ItemCatalog, budget: i64) -> Result<SelectionResult, SelectionError> {
    greedy_select_with_config(catalog, budget, &SelectionConfig::default())
}

/// Select items greedily by value/cost ratio.
///
/// Items are sorted by ratio descending (zero-cost first) and accepted in
/// that order whenever they still fit in the remaining budget. `selected`
/// lists items in acceptance order.
///
/// # Returns
/// * `Err(SelectionError::NegativeBudget)` if `budget < 0`
/// * `Err(SelectionError::UnknownTieBreak)` if the config names an unknown policy
pub fn greedy_select_with_config(
    catalog: &ItemCatalog,
    budget: i64,
    config: &SelectionConfig,
) -> Result<SelectionResult, SelectionError> {
    let budget = validate_budget(budget)?;
    let tie_break = config.greedy_tie_break()?;
    let verbosity = config.verbosity;

    let mut result = SelectionResult::default();

    for index in ratio_order(catalog, tie_break) {
        let (id, item) = catalog.entry(index);
        if result.total_cost.saturating_add(item.cost) <= budget {
            result.total_cost += item.cost;
            result.total_value = result.total_value.saturating_add(item.value);
            result.selected.push(id.to_string());
            log_decisions!(
                verbosity,
                "  greedy take {} (cost={}, value={}), spent {}/{}",
                id,
                item.cost,
                item.value,
                result.total_cost,
                budget
            );
        } else {
            log_decisions!(
                verbosity,
                "  greedy skip {} (cost={}), only {} left",
                id,
                item.cost,
                budget - result.total_cost
            );
        }
    }

    log_summary!(
        verbosity,
        "greedy: {} of {} items, cost {}/{}, value {}",
        result.selected.len(),
        catalog.len(),
        result.total_cost,
        budget,
        result.total_value
    );
    Ok(result)
}
