//! Validated budgets.

use std::fmt;

use crate::error::{PlanForgeError, Result};

/// A non-negative budget that a plan must match exactly.
///
/// # Example
///
/// ```
/// use planforge_core::{Budget, PlanForgeError};
///
/// assert_eq!(Budget::new(300).unwrap().get(), 300);
/// assert_eq!(
///     Budget::new(-5),
///     Err(PlanForgeError::InvalidBudget { budget: -5 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Budget(i64);

impl Budget {
    /// Validates a raw budget.
    pub fn new(budget: i64) -> Result<Self> {
        if budget < 0 {
            return Err(PlanForgeError::InvalidBudget { budget });
        }
        Ok(Self(budget))
    }

    /// The zero budget.
    pub const ZERO: Budget = Budget(0);

    #[inline]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Budget {
    type Error = PlanForgeError;

    fn try_from(budget: i64) -> Result<Self> {
        Self::new(budget)
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
