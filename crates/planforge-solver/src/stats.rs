//! Search statistics.
//!
//! Stack-allocated counters for one selector run. They describe how the
//! search went; they are not part of the plan.

use std::time::{Duration, Instant};

/// Counters collected during a single search.
///
/// # Example
///
/// ```
/// use planforge_solver::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_node(0);
/// stats.record_node(1);
/// stats.record_leaf();
/// stats.record_budget_prune();
///
/// assert_eq!(stats.nodes_explored, 2);
/// assert_eq!(stats.leaves_evaluated, 1);
/// assert_eq!(stats.budget_prunes, 1);
/// assert_eq!(stats.max_depth, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    end_time: Option<Instant>,
    /// Frames popped and examined.
    pub nodes_explored: u64,
    /// Frames that reached the end of the working order.
    pub leaves_evaluated: u64,
    /// Inclusion branches skipped because the item overspent.
    pub budget_prunes: u64,
    /// Frames discarded by the branch bounder.
    pub feasibility_prunes: u64,
    /// Deepest frame examined.
    pub max_depth: usize,
    /// Most frames pending on the search stack at once.
    pub peak_stack: usize,
}

impl SearchStats {
    /// Marks the start of searching.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.end_time = None;
    }

    /// Marks the end of searching.
    pub fn finish(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Time spent searching, up to [`finish`](Self::finish) or now.
    pub fn elapsed(&self) -> Duration {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => end.duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }

    /// Records an examined frame at `depth`.
    #[inline]
    pub fn record_node(&mut self, depth: usize) {
        self.nodes_explored += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn record_leaf(&mut self) {
        self.leaves_evaluated += 1;
    }

    #[inline]
    pub fn record_budget_prune(&mut self) {
        self.budget_prunes += 1;
    }

    #[inline]
    pub fn record_feasibility_prune(&mut self) {
        self.feasibility_prunes += 1;
    }

    /// Returns nodes explored per second.
    pub fn nodes_per_second(&self) -> u64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            (self.nodes_explored as f64 / secs) as u64
        } else {
            0
        }
    }
}
