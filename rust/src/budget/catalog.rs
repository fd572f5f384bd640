//! Ordered item catalog and budget validation.

use rustc_hash::FxHashSet;

use crate::models::Item;

use super::error::SelectionError;

/// Items in a fixed enumeration order.
///
/// The order is the one items were added in. The DP table rows and the
/// greedy tie-break both follow it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemCatalog {
    items: Vec<(String, Item)>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting repeated item IDs.
    pub fn from_items<S: Into<String>>(
        items: impl IntoIterator<Item = (S, Item)>,
    ) -> Result<Self, SelectionError> {
        let mut catalog = Self::new();
        let mut seen: FxHashSet<String> = FxHashSet::default();
        for (id, item) in items {
            let id = id.into();
            if !seen.insert(id.clone()) {
                return Err(SelectionError::DuplicateItem(id));
            }
            catalog.items.push((id, item));
        }
        Ok(catalog)
    }

    /// Append an item; fails if the ID is already present.
    pub fn push(&mut self, id: impl Into<String>, item: Item) -> Result<(), SelectionError> {
        let id = id.into();
        if self.get(&id).is_some() {
            return Err(SelectionError::DuplicateItem(id));
        }
        self.items.push((id, item));
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items
            .iter()
            .find(|(item_id, _)| item_id == id)
            .map(|(_, item)| item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate `(id, item)` in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Item)> {
        self.items.iter().map(|(id, item)| (id.as_str(), item))
    }

    pub(crate) fn entry(&self, index: usize) -> (&str, &Item) {
        let (id, item) = &self.items[index];
        (id.as_str(), item)
    }
}

/// Check an integer budget and convert it to a table width.
pub fn validate_budget(budget: i64) -> Result<u64, SelectionError> {
    u64::try_from(budget).map_err(|_| SelectionError::NegativeBudget(budget))
}

/// Convert a floating-point budget (as received from Python) to an integer.
///
/// Rejects NaN, infinities, fractional and negative values, and whole
/// values at or above `i64::MAX`. Negative values saturate to `i64::MIN` in
/// the reported error.
pub fn parse_budget(budget: f64) -> Result<i64, SelectionError> {
    if !budget.is_finite() || budget.fract() != 0.0 {
        return Err(SelectionError::NonIntegralBudget(budget));
    }
    if budget < 0.0 {
        return Err(SelectionError::NegativeBudget(budget as i64));
    }
    if budget >= i64::MAX as f64 {
        return Err(SelectionError::BudgetOutOfRange(budget));
    }
    Ok(budget as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_preserves_insertion_order() {
        let catalog = ItemCatalog::from_items([
            ("zeta", Item::new(1, 1)),
            ("alpha", Item::new(2, 2)),
            ("mid", Item::new(3, 3)),
        ])
        .unwrap();

        let ids: Vec<&str> = catalog.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
        assert_eq!(catalog.get("alpha"), Some(&Item::new(2, 2)));
        assert_eq!(catalog.entry(2).0, "mid");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = ItemCatalog::from_items([("a", Item::new(1, 1)), ("a", Item::new(2, 2))])
            .unwrap_err();
        assert_eq!(err, SelectionError::DuplicateItem("a".to_string()));

        let mut catalog = ItemCatalog::new();
        catalog.push("b", Item::new(1, 1)).unwrap();
        assert!(catalog.push("b", Item::new(5, 5)).is_err());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_validate_budget() {
        assert_eq!(validate_budget(0), Ok(0));
        assert_eq!(validate_budget(100), Ok(100));
        assert_eq!(validate_budget(-1), Err(SelectionError::NegativeBudget(-1)));
    }

    #[test]
    fn test_parse_budget() {
        assert_eq!(parse_budget(75.0), Ok(75));
        assert_eq!(parse_budget(0.0), Ok(0));
        assert_eq!(
            parse_budget(12.5),
            Err(SelectionError::NonIntegralBudget(12.5))
        );
        assert_eq!(parse_budget(-3.0), Err(SelectionError::NegativeBudget(-3)));
        assert!(parse_budget(f64::NAN).is_err());
        assert!(parse_budget(f64::INFINITY).is_err());
        assert_eq!(parse_budget(-0.0), Ok(0));
    }

    #[test]
    fn test_parse_budget_beyond_i64_range() {
        assert_eq!(
            parse_budget(-1e19),
            Err(SelectionError::NegativeBudget(i64::MIN))
        );
        assert_eq!(
            parse_budget(1e19),
            Err(SelectionError::BudgetOutOfRange(1e19))
        );
        assert_eq!(
            parse_budget(i64::MAX as f64),
            Err(SelectionError::BudgetOutOfRange(i64::MAX as f64))
        );
        assert_eq!(parse_budget(9.0e15), Ok(9_000_000_000_000_000));
    }
}
