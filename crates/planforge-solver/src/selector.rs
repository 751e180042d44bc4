//! Backtracking coverage selector.
//!
//! Explores the include/exclude decision tree over a catalog depth-first
//! and returns the first selection that spends the budget exactly and
//! covers every required category and group.
//!
//! Logging levels:
//! - **INFO**: Search start/end with outcome and node counts
//! - **DEBUG**: Progress every 65,536 nodes, fast-path decisions
//! - **TRACE**: Rejected leaves

use std::fmt;

use planforge_core::{Budget, Catalog, Plan, PlanForgeError, Result};
use tracing::{debug, info, trace};

use crate::order::ItemOrder;
use crate::search::{
    BranchBounder, CoverageIndex, FeasibilityBounder, NoBounder, SearchFrame, SearchStack,
};
use crate::stats::SearchStats;
use crate::termination::{NoTermination, Termination};

/// Nodes between two progress events (power of two).
const PROGRESS_INTERVAL: u64 = 1 << 16;

/// Pruning applied on top of budget pruning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pruning {
    /// Coverage is only checked at leaves.
    #[default]
    BudgetOnly,

    /// Cut frames whose undecided items cannot complete the budget or the
    /// coverage. See [`FeasibilityBounder`].
    Feasibility,
}

impl fmt::Display for Pruning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pruning::BudgetOnly => write!(f, "BudgetOnly"),
            Pruning::Feasibility => write!(f, "Feasibility"),
        }
    }
}

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// A plan that spends the budget exactly with full coverage.
    Found(Plan),

    /// The search was exhaustive and no subset qualifies.
    NoSolution,
}

impl SelectionOutcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, SelectionOutcome::Found(_))
    }

    /// Returns the plan, if one was found.
    pub fn plan(&self) -> Option<&Plan> {
        match self {
            SelectionOutcome::Found(plan) => Some(plan),
            SelectionOutcome::NoSolution => None,
        }
    }

    /// Consumes the outcome, returning the plan if one was found.
    pub fn into_plan(self) -> Option<Plan> {
        match self {
            SelectionOutcome::Found(plan) => Some(plan),
            SelectionOutcome::NoSolution => None,
        }
    }
}

/// Outcome of a search together with its statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub outcome: SelectionOutcome,
    pub stats: SearchStats,
}

/// Depth-first backtracking selector.
///
/// The selector is stateless between calls. It never mutates the catalog,
/// and every call owns its own stack and selection, so one selector and
/// one catalog can serve any number of concurrent searches.
///
/// # First solution, not best solution
///
/// The search stops at the first accepted leaf in a fixed order: items
/// are decided in the configured [`ItemOrder`], and for each item the
/// inclusion branch is explored before the exclusion branch. Priority
/// ordering is a heuristic for reaching a plan quickly. It is not an
/// objective, and the plan found is not optimal in any sense.
///
/// # Example
///
/// ```
/// use planforge_core::{Catalog, Item};
/// use planforge_solver::{BacktrackingSelector, SelectionOutcome};
///
/// let catalog = Catalog::builder()
///     .item(Item::new(1, "Flight", "transport", 1u32, 100))
///     .item(Item::new(2, "Lunch", "food", 1u32, 50))
///     .item(Item::new(3, "Dinner", "food", 1u32, 80))
///     .require_category("transport")
///     .require_category("food")
///     .require_group(1u32)
///     .build()
///     .unwrap();
///
/// let selector = BacktrackingSelector::new();
///
/// let outcome = selector.find_plan(&catalog, 180).unwrap();
/// assert_eq!(outcome.plan().unwrap().total_cost(), 180);
///
/// assert_eq!(selector.find_plan(&catalog, 120).unwrap(), SelectionOutcome::NoSolution);
/// assert!(selector.find_plan(&catalog, -1).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct BacktrackingSelector<T = NoTermination> {
    item_order: ItemOrder,
    pruning: Pruning,
    termination: T,
}

impl BacktrackingSelector<NoTermination> {
    /// Creates a selector with priority ordering, budget pruning only and
    /// no termination.
    pub fn new() -> Self {
        Self {
            item_order: ItemOrder::default(),
            pruning: Pruning::default(),
            termination: NoTermination,
        }
    }
}

impl Default for BacktrackingSelector<NoTermination> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BacktrackingSelector<T> {
    /// Sets the item order.
    pub fn with_item_order(mut self, item_order: ItemOrder) -> Self {
        self.item_order = item_order;
        self
    }

    /// Sets the pruning.
    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    /// Replaces the termination.
    pub fn with_termination<T2>(self, termination: T2) -> BacktrackingSelector<T2> {
        BacktrackingSelector {
            item_order: self.item_order,
            pruning: self.pruning,
            termination,
        }
    }

    #[inline]
    pub fn item_order(&self) -> ItemOrder {
        self.item_order
    }

    #[inline]
    pub fn pruning(&self) -> Pruning {
        self.pruning
    }

    #[inline]
    pub fn termination(&self) -> &T {
        &self.termination
    }
}

impl<T: Termination> BacktrackingSelector<T> {
    /// Finds the first plan that spends `budget` exactly with full coverage.
    ///
    /// # Errors
    ///
    /// - [`PlanForgeError::InvalidBudget`] if `budget` is negative; no
    ///   search is started.
    /// - [`PlanForgeError::Cancelled`] if the termination fired before the
    ///   search completed.
    pub fn find_plan(&self, catalog: &Catalog, budget: i64) -> Result<SelectionOutcome> {
        self.find_plan_with_stats(catalog, budget)
            .map(|result| result.outcome)
    }

    /// Like [`find_plan`](Self::find_plan), also returning search statistics.
    pub fn find_plan_with_stats(&self, catalog: &Catalog, budget: i64) -> Result<SearchResult> {
        let budget = Budget::new(budget)?;
        let mut stats = SearchStats::default();
        stats.start();

        info!(
            event = "search_start",
            item_count = catalog.len(),
            budget = budget.get(),
            required_categories = catalog.required_categories().len(),
            required_groups = catalog.required_groups().len(),
            item_order = %self.item_order,
            pruning = %self.pruning,
        );

        let searched = if budget.get() > catalog.total_cost() {
            // No subset can reach the budget
            debug!(
                event = "budget_unreachable",
                budget = budget.get(),
                total_cost = catalog.total_cost(),
            );
            Ok(None)
        } else {
            let order = self.item_order.working_order(catalog.items());
            let coverage = CoverageIndex::new(catalog);
            match self.pruning {
                Pruning::BudgetOnly => {
                    self.search(catalog, &order, &coverage, &NoBounder, budget, &mut stats)
                }
                Pruning::Feasibility => {
                    let bounder = FeasibilityBounder::new(catalog, &order, &coverage);
                    self.search(catalog, &order, &coverage, &bounder, budget, &mut stats)
                }
            }
        };
        stats.finish();

        let outcome = match searched {
            Ok(Some(positions)) => SelectionOutcome::Found(Plan::from_positions(catalog, &positions)),
            Ok(None) => SelectionOutcome::NoSolution,
            Err(err) => {
                info!(
                    event = "search_end",
                    outcome = "cancelled",
                    nodes = stats.nodes_explored,
                    leaves = stats.leaves_evaluated,
                    duration_ms = stats.elapsed().as_millis() as u64,
                    speed = stats.nodes_per_second(),
                );
                return Err(err);
            }
        };

        info!(
            event = "search_end",
            outcome = if outcome.is_found() { "found" } else { "no_solution" },
            selected = outcome.plan().map_or(0, Plan::len),
            nodes = stats.nodes_explored,
            leaves = stats.leaves_evaluated,
            budget_prunes = stats.budget_prunes,
            feasibility_prunes = stats.feasibility_prunes,
            duration_ms = stats.elapsed().as_millis() as u64,
            speed = stats.nodes_per_second(),
        );

        Ok(SearchResult { outcome, stats })
    }

    /// Runs the depth-first search and returns the accepted catalog
    /// positions, or `None` once the tree is exhausted.
    fn search<B: BranchBounder>(
        &self,
        catalog: &Catalog,
        order: &[usize],
        coverage: &CoverageIndex,
        bounder: &B,
        budget: Budget,
        stats: &mut SearchStats,
    ) -> Result<Option<Vec<usize>>> {
        let n = order.len();
        let mut stack = SearchStack::preallocated(n);
        stack.push(SearchFrame::root(budget.get(), coverage.empty_mask()));

        let found = loop {
            let Some(frame) = stack.pop() else {
                break None;
            };

            if self.termination.is_terminated(stats) {
                stats.peak_stack = stack.peak();
                return Err(PlanForgeError::Cancelled);
            }

            stats.record_node(frame.depth());
            if stats.nodes_explored % PROGRESS_INTERVAL == 0 {
                debug!(
                    event = "progress",
                    nodes = stats.nodes_explored,
                    depth = frame.depth(),
                    pending = stack.len(),
                    speed = stats.nodes_per_second(),
                );
            }

            if frame.depth() == n {
                stats.record_leaf();
                if frame.remaining() == 0 && coverage.is_complete(frame.covered()) {
                    break Some(frame.selection().positions());
                }
                trace!(
                    event = "leaf",
                    remaining = frame.remaining(),
                    selected = frame.selection().len(),
                    covered = frame.covered().count_ones(..),
                    required = coverage.required(),
                );
                continue;
            }

            if bounder.can_prune(&frame) {
                stats.record_feasibility_prune();
                continue;
            }

            let position = order[frame.depth()];
            let cost = catalog.items()[position].cost();

            let included = if frame.can_include(cost) {
                Some(frame.include(position, cost, coverage.mask_of(position)))
            } else {
                stats.record_budget_prune();
                None
            };
            stack.push_children(frame.exclude(), included);
        };

        stats.peak_stack = stack.peak();
        if let Some(positions) = &found {
            debug!(
                event = "plan_found",
                selected = positions.len(),
                nodes = stats.nodes_explored,
            );
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests;
