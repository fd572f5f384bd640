//! Budget-constrained item selection.
//!
//! Two strategies over the same catalog:
//! - `greedy`: value/cost ratio order, single pass, may be suboptimal
//! - `optimal`: 0/1 dynamic programming with table back-reconstruction

mod catalog;
mod error;
mod greedy;
mod optimal;

pub use catalog::{parse_budget, validate_budget, ItemCatalog};
pub use error::SelectionError;
pub use greedy::{greedy_select, greedy_select_with_config};
pub use optimal::{optimal_select, optimal_select_with_config};

#[cfg(test)]
pub(crate) mod test_support {
    use super::ItemCatalog;
    use crate::models::Item;

    /// Six dishes as (cost, value) pairs.
    pub fn food_catalog() -> ItemCatalog {
        ItemCatalog::from_items([
            ("pizza", Item::new(50, 300)),
            ("hamburger", Item::new(40, 250)),
            ("hot-dog", Item::new(30, 200)),
            ("pepsi", Item::new(10, 100)),
            ("cola", Item::new(15, 220)),
            ("potato", Item::new(25, 350)),
        ])
        .unwrap()
    }
}
