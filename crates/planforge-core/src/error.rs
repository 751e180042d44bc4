//! Error types for PlanForge

use thiserror::Error;

use crate::item::ItemId;

/// Main error type for PlanForge operations.
///
/// A search that runs to completion without finding a plan is not an
/// error; see `SelectionOutcome::NoSolution` in the solver crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanForgeError {
    /// The requested budget is negative.
    #[error("Invalid budget {budget}: budget must be non-negative")]
    InvalidBudget { budget: i64 },

    /// An item violates a catalog invariant.
    #[error("Invalid item {id}: {reason}")]
    InvalidItem { id: ItemId, reason: String },

    /// The search was stopped by a termination before it completed.
    #[error("Search was cancelled")]
    Cancelled,
}

/// Result type alias for PlanForge operations
pub type Result<T> = std::result::Result<T, PlanForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlanForgeError::InvalidBudget { budget: -5 };
        assert_eq!(
            err.to_string(),
            "Invalid budget -5: budget must be non-negative"
        );

        let err = PlanForgeError::InvalidItem {
            id: ItemId::new(7),
            reason: "cost -1 is negative".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid item #7: cost -1 is negative");

        assert_eq!(PlanForgeError::Cancelled.to_string(), "Search was cancelled");
    }
}
