//! Composite termination conditions (AND/OR).
//!
//! Uses macro-generated tuple implementations, so composites stay
//! statically dispatched.

use super::Termination;
use crate::stats::SearchStats;

/// Combines multiple terminations with OR logic (any must terminate).
///
/// # Examples
///
/// ```
/// use planforge_solver::termination::{NodeCountTermination, OrTermination, TimeTermination};
///
/// // Terminate after 30 seconds OR a million nodes
/// let termination = OrTermination((
///     TimeTermination::seconds(30),
///     NodeCountTermination::new(1_000_000),
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    /// Creates a new OR termination from a tuple of terminations.
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

/// Combines multiple terminations with AND logic (all must terminate).
#[derive(Debug, Clone)]
pub struct AndTermination<T>(pub T);

impl<T> AndTermination<T> {
    /// Creates a new AND termination from a tuple of terminations.
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

/// Generates `Termination` implementations for a composite over tuples.
macro_rules! impl_composite_termination {
    ($composite:ident, $identity:literal $op:tt, $($idx:tt: $T:ident),+) => {
        impl<$($T),+> Termination for $composite<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn is_terminated(&self, stats: &SearchStats) -> bool {
                $identity $($op (self.0).$idx.is_terminated(stats))+
            }
        }
    };
}

impl_composite_termination!(OrTermination, false ||, 0: T0);
impl_composite_termination!(OrTermination, false ||, 0: T0, 1: T1);
impl_composite_termination!(OrTermination, false ||, 0: T0, 1: T1, 2: T2);
impl_composite_termination!(OrTermination, false ||, 0: T0, 1: T1, 2: T2, 3: T3);

impl_composite_termination!(AndTermination, true &&, 0: T0);
impl_composite_termination!(AndTermination, true &&, 0: T0, 1: T1);
impl_composite_termination!(AndTermination, true &&, 0: T0, 1: T1, 2: T2);
impl_composite_termination!(AndTermination, true &&, 0: T0, 1: T1, 2: T2, 3: T3);
