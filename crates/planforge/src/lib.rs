//! PlanForge - Exact-Budget Coverage Selection in Rust
//!
//! Picks a subset of catalog items whose costs add up to the budget
//! exactly while covering every required category and group.
//!
//! # Example
//!
//! ```rust
//! use planforge::prelude::*;
//!
//! let catalog = Catalog::builder()
//!     .item(Item::new(1, "Flight", "transport", 1u32, 100))
//!     .item(Item::new(2, "Hostel", "lodging", 1u32, 150))
//!     .item(Item::new(3, "Park", "attraction", 1u32, 0))
//!     .require_category("transport")
//!     .require_category("lodging")
//!     .require_group(1u32)
//!     .build()
//!     .unwrap();
//!
//! match planforge::find_plan(&catalog, 250).unwrap() {
//!     SelectionOutcome::Found(plan) => assert_eq!(plan.total_cost(), 250),
//!     SelectionOutcome::NoSolution => unreachable!(),
//! }
//! ```

// Domain types
pub use planforge_core::{
    Budget, Catalog, CatalogBuilder, Category, Group, Item, ItemId, Plan, PlanForgeError, Result,
    DEFAULT_PRIORITY,
};

// Configuration
pub use planforge_config::{
    ConfigError, ItemOrderType, PruningType, SelectorConfig, TerminationConfig,
};

// Selector
pub use planforge_solver::{
    BacktrackingSelector, BudgetSweep, ItemOrder, Pruning, SearchResult, SearchStats,
    SelectionOutcome, SelectorBuilder,
};

pub use planforge_solver::termination;

#[cfg(feature = "console")]
pub use planforge_console as console;

mod solve;
pub use solve::{find_plan, find_plan_with_config};

pub mod prelude {
    pub use super::{Catalog, Category, Group, Item, ItemId, Plan, PlanForgeError};
    pub use super::{BacktrackingSelector, ItemOrder, Pruning, SelectionOutcome};
    pub use super::SelectorConfig;
}
