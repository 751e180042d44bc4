//! Builder module for constructing selectors from configuration
//!
//! This module provides the wiring between `planforge-config` types and
//! the selector implementation.

use planforge_config::{ItemOrderType, PruningType, SelectorConfig};

use crate::order::ItemOrder;
use crate::selector::{BacktrackingSelector, Pruning};
use crate::termination::{NodeCountTermination, OrTermination, TimeTermination};

/// Termination built from a [`SelectorConfig`]: node limit OR time limit,
/// each present only when configured.
pub type ConfiguredTermination =
    OrTermination<(Option<NodeCountTermination>, Option<TimeTermination>)>;

/// Builder for constructing selectors from configuration.
pub struct SelectorBuilder;

impl SelectorBuilder {
    /// Builds a selector from configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use planforge_config::SelectorConfig;
    /// use planforge_solver::{ItemOrder, Pruning, SelectorBuilder};
    ///
    /// let config = SelectorConfig::from_toml_str(r#"
    ///     item_order = "catalog_order"
    ///     pruning = "feasibility"
    ///
    ///     [termination]
    ///     node_limit = 1000
    /// "#).unwrap();
    ///
    /// let selector = SelectorBuilder::from_config(&config);
    /// assert_eq!(selector.item_order(), ItemOrder::CatalogOrder);
    /// assert_eq!(selector.pruning(), Pruning::Feasibility);
    /// ```
    pub fn from_config(config: &SelectorConfig) -> BacktrackingSelector<ConfiguredTermination> {
        BacktrackingSelector::new()
            .with_item_order(Self::item_order(config.item_order))
            .with_pruning(Self::pruning(config.pruning))
            .with_termination(Self::termination(config))
    }

    /// Maps a configured item order.
    pub fn item_order(config: ItemOrderType) -> ItemOrder {
        match config {
            ItemOrderType::PriorityDescending => ItemOrder::PriorityDescending,
            ItemOrderType::CatalogOrder => ItemOrder::CatalogOrder,
        }
    }

    /// Maps a configured pruning.
    pub fn pruning(config: PruningType) -> Pruning {
        match config {
            PruningType::BudgetOnly => Pruning::BudgetOnly,
            PruningType::Feasibility => Pruning::Feasibility,
        }
    }

    /// Builds the termination. Limits missing from the configuration never
    /// fire.
    pub fn termination(config: &SelectorConfig) -> ConfiguredTermination {
        OrTermination::new((
            config.node_limit().map(NodeCountTermination::new),
            config.time_limit().map(TimeTermination::new),
        ))
    }
}
