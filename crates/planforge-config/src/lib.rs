//! Configuration system for PlanForge.
//!
//! Load selector configuration from TOML or YAML files to control item
//! ordering, pruning and termination without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use planforge_config::{ItemOrderType, PruningType, SelectorConfig};
//! use std::time::Duration;
//!
//! let config = SelectorConfig::from_toml_str(r#"
//!     item_order = "priority_descending"
//!     pruning = "feasibility"
//!
//!     [termination]
//!     node_limit = 1000000
//!     millis_spent_limit = 500
//! "#).unwrap();
//!
//! assert_eq!(config.item_order, ItemOrderType::PriorityDescending);
//! assert_eq!(config.pruning, PruningType::Feasibility);
//! assert_eq!(config.time_limit(), Some(Duration::from_millis(500)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use planforge_config::SelectorConfig;
//!
//! let config = SelectorConfig::load("selector.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main selector configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SelectorConfig {
    /// Order in which items are decided on.
    #[serde(default)]
    pub item_order: ItemOrderType,

    /// Pruning applied on top of budget pruning.
    #[serde(default)]
    pub pruning: PruningType,

    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,
}

impl SelectorConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks limits that parse but cannot be honoured.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(termination) = &self.termination {
            if termination.node_limit == Some(0) {
                return Err(ConfigError::Invalid(
                    "termination.node_limit must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Sets the item order.
    pub fn with_item_order(mut self, item_order: ItemOrderType) -> Self {
        self.item_order = item_order;
        self
    }

    /// Sets the pruning type.
    pub fn with_pruning(mut self, pruning: PruningType) -> Self {
        self.pruning = pruning;
        self
    }

    /// Sets the node limit.
    pub fn with_node_limit(mut self, node_limit: u64) -> Self {
        self.termination = Some(TerminationConfig {
            node_limit: Some(node_limit),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the termination time limit in seconds.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns the node limit, if configured.
    pub fn node_limit(&self) -> Option<u64> {
        self.termination.as_ref().and_then(|t| t.node_limit)
    }
}

/// Order in which the selector decides on items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemOrderType {
    /// Stable sort by priority, highest first.
    #[default]
    PriorityDescending,

    /// Decide on items in catalog order.
    CatalogOrder,
}

/// Pruning applied during search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PruningType {
    /// Only skip inclusions that overspend; coverage is checked at leaves.
    #[default]
    BudgetOnly,

    /// Also cut nodes whose unvisited items cannot complete the budget
    /// or the coverage.
    Feasibility,
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum number of search nodes to expand.
    pub node_limit: Option<u64>,

    /// Maximum milliseconds to spend searching.
    pub millis_spent_limit: Option<u64>,

    /// Maximum seconds to spend searching.
    pub seconds_spent_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let millis = self.millis_spent_limit.unwrap_or(0)
            + self.seconds_spent_limit.unwrap_or(0).saturating_mul(1000);
        if millis > 0 {
            Some(Duration::from_millis(millis))
        } else {
            None
        }
    }
}
