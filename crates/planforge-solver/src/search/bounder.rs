//! Branch bounders for search pruning.
//!
//! Budget pruning is built into frame expansion. A bounder adds cuts on
//! top of it: a frame may be discarded when no completion of its
//! selection can be accepted at a leaf. A bounder must never discard a
//! frame that has an accepted leaf below it, so bounding changes how many
//! nodes are visited but never the plan that is found.

use std::fmt::Debug;

use fixedbitset::FixedBitSet;

use planforge_core::Catalog;

use super::coverage::CoverageIndex;
use super::frame::SearchFrame;

/// Decides whether a frame can be discarded before expansion.
pub trait BranchBounder: Debug {
    /// Returns true if no leaf below `frame` can be accepted.
    fn can_prune(&self, frame: &SearchFrame) -> bool;
}

/// Bounder that never prunes.
///
/// Coverage is then only checked at leaves and infeasible-by-coverage
/// branches are explored to full depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBounder;

impl BranchBounder for NoBounder {
    #[inline]
    fn can_prune(&self, _frame: &SearchFrame) -> bool {
        false
    }
}

/// Bounder that looks at the items not yet decided on.
///
/// A frame at depth `d` is cut when
/// - its remaining budget exceeds the total cost of the items at working
///   positions `d..`, so the exact sum is out of reach, or
/// - the tags it already covers together with every tag touched by the
///   items at working positions `d..` still miss a requirement.
#[derive(Debug, Clone)]
pub struct FeasibilityBounder {
    /// `suffix_costs[d]` = saturating cost sum of working positions `d..`.
    suffix_costs: Vec<i64>,
    /// `suffix_coverage[d]` = union of item masks of working positions `d..`.
    suffix_coverage: Vec<FixedBitSet>,
    required: usize,
}

impl FeasibilityBounder {
    /// Precomputes suffix tables for a working order.
    pub fn new(catalog: &Catalog, order: &[usize], coverage: &CoverageIndex) -> Self {
        let n = order.len();
        let mut suffix_costs = vec![0i64; n + 1];
        let mut suffix_coverage = vec![coverage.empty_mask(); n + 1];

        for depth in (0..n).rev() {
            let position = order[depth];
            suffix_costs[depth] =
                suffix_costs[depth + 1].saturating_add(catalog.items()[position].cost());

            let mut mask = suffix_coverage[depth + 1].clone();
            mask.union_with(coverage.mask_of(position));
            suffix_coverage[depth] = mask;
        }

        Self {
            suffix_costs,
            suffix_coverage,
            required: coverage.required(),
        }
    }

    /// Cost still available from `depth` onward.
    #[inline]
    pub fn suffix_cost(&self, depth: usize) -> i64 {
        self.suffix_costs[depth]
    }
}

impl BranchBounder for FeasibilityBounder {
    fn can_prune(&self, frame: &SearchFrame) -> bool {
        let depth = frame.depth();
        if frame.remaining() > self.suffix_costs[depth] {
            return true;
        }

        let reachable = frame
            .covered()
            .union(&self.suffix_coverage[depth])
            .count();
        reachable < self.required
    }
}
