//! Termination conditions for the selector.
//!
//! The search has no interruption point of its own; the selector consults
//! its termination once before expanding each frame. A terminated search
//! reports `PlanForgeError::Cancelled` rather than `NoSolution`, since the
//! tree was not exhausted.

mod composite;
mod external;
mod node_count;
mod time;

use std::fmt::Debug;

use crate::stats::SearchStats;

pub use composite::{AndTermination, OrTermination};
pub use external::ExternalTermination;
pub use node_count::NodeCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop searching.
pub trait Termination: Send + Debug {
    /// Returns true if searching should stop.
    fn is_terminated(&self, stats: &SearchStats) -> bool;
}

/// Termination that never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl Termination for NoTermination {
    #[inline]
    fn is_terminated(&self, _stats: &SearchStats) -> bool {
        false
    }
}

/// An absent termination never fires.
impl<T: Termination> Termination for Option<T> {
    #[inline]
    fn is_terminated(&self, stats: &SearchStats) -> bool {
        self.as_ref().is_some_and(|t| t.is_terminated(stats))
    }
}

#[cfg(test)]
mod tests;
