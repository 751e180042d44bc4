//! Parallel search over several budgets.
//!
//! Each budget gets an independent search on the rayon thread pool. The
//! catalog and the selector are shared read-only.

use planforge_core::{Catalog, Result};
use rayon::prelude::*;
use tracing::info;

use crate::selector::{BacktrackingSelector, SelectionOutcome};
use crate::termination::Termination;

/// Runs one search per budget against a shared catalog.
///
/// # Example
///
/// ```
/// use planforge_core::{Catalog, Item};
/// use planforge_solver::{BacktrackingSelector, BudgetSweep};
///
/// let catalog = Catalog::builder()
///     .item(Item::new(1, "Lunch", "food", 1u32, 50))
///     .item(Item::new(2, "Dinner", "food", 1u32, 80))
///     .require_category("food")
///     .build()
///     .unwrap();
///
/// let selector = BacktrackingSelector::new();
/// let sweep = BudgetSweep::new(&selector, &catalog);
/// let outcomes = sweep.run(&[50, 60, 130]);
///
/// let found: Vec<bool> = outcomes.iter().map(|o| o.as_ref().unwrap().is_found()).collect();
/// assert_eq!(found, vec![true, false, true]);
/// ```
#[derive(Debug)]
pub struct BudgetSweep<'a, T> {
    selector: &'a BacktrackingSelector<T>,
    catalog: &'a Catalog,
}

impl<'a, T> BudgetSweep<'a, T>
where
    T: Termination + Sync,
{
    pub fn new(selector: &'a BacktrackingSelector<T>, catalog: &'a Catalog) -> Self {
        Self { selector, catalog }
    }

    /// Searches every budget in parallel.
    ///
    /// Results are in the order of `budgets`. A negative budget yields its
    /// own `InvalidBudget` error without affecting the others.
    pub fn run(&self, budgets: &[i64]) -> Vec<Result<SelectionOutcome>> {
        info!(
            event = "sweep_start",
            budgets = budgets.len(),
            item_count = self.catalog.len(),
        );

        let outcomes: Vec<_> = budgets
            .par_iter()
            .map(|&budget| self.selector.find_plan(self.catalog, budget))
            .collect();

        info!(
            event = "sweep_end",
            found = outcomes
                .iter()
                .filter(|outcome| matches!(outcome, Ok(o) if o.is_found()))
                .count(),
        );
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use planforge_core::PlanForgeError;
    use planforge_test::{four_item_catalog, trip_catalog, TRIP_BUDGET};

    use super::*;

    #[test]
    fn test_results_keep_budget_order() {
        let catalog = four_item_catalog();
        let selector = BacktrackingSelector::new();

        let outcomes = BudgetSweep::new(&selector, &catalog).run(&[300, 250, -5, 301]);

        assert_eq!(outcomes.len(), 4);
        assert!(outcomes[0].as_ref().unwrap().is_found());
        assert_eq!(outcomes[1], Ok(SelectionOutcome::NoSolution));
        assert_eq!(outcomes[2], Err(PlanForgeError::InvalidBudget { budget: -5 }));
        assert_eq!(outcomes[3], Ok(SelectionOutcome::NoSolution));
    }

    #[test]
    fn test_matches_sequential_searches() {
        let catalog = trip_catalog();
        let selector = BacktrackingSelector::new();
        let budgets: Vec<i64> = (0..8).map(|i| TRIP_BUDGET - i * 50_000).collect();

        let parallel = BudgetSweep::new(&selector, &catalog).run(&budgets);
        let sequential: Vec<_> = budgets
            .iter()
            .map(|&budget| selector.find_plan(&catalog, budget))
            .collect();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_empty_sweep() {
        let catalog = four_item_catalog();
        let selector = BacktrackingSelector::new();

        assert!(BudgetSweep::new(&selector, &catalog).run(&[]).is_empty());
    }
}
