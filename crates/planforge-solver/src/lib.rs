//! PlanForge Selector Engine
//!
//! This crate provides the backtracking selector including:
//! - BacktrackingSelector and its outcomes
//! - Item ordering and branch pruning
//! - Explicit-stack search building blocks
//! - Termination conditions
//! - Parallel budget sweeps
//! - Configuration wiring (builder module)

pub mod builder;
pub mod order;
pub mod search;
pub mod selector;
pub mod stats;
pub mod sweep;
pub mod termination;

pub use builder::{ConfiguredTermination, SelectorBuilder};
pub use order::ItemOrder;
pub use search::{BranchBounder, FeasibilityBounder, NoBounder};
pub use selector::{BacktrackingSelector, Pruning, SearchResult, SelectionOutcome};
pub use stats::SearchStats;
pub use sweep::BudgetSweep;
pub use termination::{
    AndTermination, ExternalTermination, NodeCountTermination, NoTermination, OrTermination,
    Termination, TimeTermination,
};
