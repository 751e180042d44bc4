//! Entry points that hide selector wiring.

use planforge_config::SelectorConfig;
use planforge_core::{Catalog, Result};
use planforge_solver::{BacktrackingSelector, SelectionOutcome, SelectorBuilder};

/// Finds the first plan for `budget` with the default selector: priority
/// order, budget pruning only, no termination.
///
/// # Errors
///
/// Returns [`PlanForgeError::InvalidBudget`](crate::PlanForgeError::InvalidBudget)
/// for a negative budget.
pub fn find_plan(catalog: &Catalog, budget: i64) -> Result<SelectionOutcome> {
    BacktrackingSelector::new().find_plan(catalog, budget)
}

/// Finds the first plan for `budget` with a selector built from `config`.
///
/// ```no_run
/// use planforge::{find_plan_with_config, Catalog, SelectorConfig};
///
/// let config = SelectorConfig::load("selector.toml").unwrap_or_default();
/// let catalog = Catalog::builder().build().unwrap();
/// let outcome = find_plan_with_config(&catalog, 0, &config).unwrap();
/// assert!(outcome.is_found());
/// ```
///
/// # Errors
///
/// Also returns [`PlanForgeError::Cancelled`](crate::PlanForgeError::Cancelled)
/// when a configured limit stops the search.
pub fn find_plan_with_config(
    catalog: &Catalog,
    budget: i64,
    config: &SelectorConfig,
) -> Result<SelectionOutcome> {
    SelectorBuilder::from_config(config).find_plan(catalog, budget)
}
