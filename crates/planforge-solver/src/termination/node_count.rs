//! Node count termination.

use super::Termination;
use crate::stats::SearchStats;

/// Terminates once a number of frames has been examined.
///
/// # Example
///
/// ```
/// use planforge_solver::termination::NodeCountTermination;
///
/// // Give up after a million nodes
/// let term = NodeCountTermination::new(1_000_000);
/// ```
#[derive(Debug, Clone)]
pub struct NodeCountTermination {
    limit: u64,
}

impl NodeCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for NodeCountTermination {
    fn is_terminated(&self, stats: &SearchStats) -> bool {
        stats.nodes_explored >= self.limit
    }
}
