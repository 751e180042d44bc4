//! Search frames.

use fixedbitset::FixedBitSet;

use super::path::SelectionPath;

/// One pending node of the include/exclude decision tree.
///
/// `depth` is the index into the working order of the next item to decide
/// on. A frame at `depth == n` is a leaf.
#[derive(Debug, Clone)]
pub struct SearchFrame {
    depth: usize,
    remaining: i64,
    selection: SelectionPath,
    covered: FixedBitSet,
}

impl SearchFrame {
    /// Creates the root frame.
    pub fn root(budget: i64, covered: FixedBitSet) -> Self {
        Self {
            depth: 0,
            remaining: budget,
            selection: SelectionPath::new(),
            covered,
        }
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Budget still to be spent.
    #[inline]
    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    #[inline]
    pub fn selection(&self) -> &SelectionPath {
        &self.selection
    }

    /// Required tags covered by the selection so far.
    #[inline]
    pub fn covered(&self) -> &FixedBitSet {
        &self.covered
    }

    /// Returns true if an item of this cost fits the remaining budget.
    #[inline]
    pub fn can_include(&self, cost: i64) -> bool {
        cost <= self.remaining
    }

    /// Child that selects the item at catalog `position`.
    ///
    /// Callers must check [`can_include`](Self::can_include) first.
    pub fn include(&self, position: usize, cost: i64, mask: &FixedBitSet) -> Self {
        debug_assert!(self.can_include(cost));

        let mut covered = self.covered.clone();
        covered.union_with(mask);
        Self {
            depth: self.depth + 1,
            remaining: self.remaining - cost,
            selection: self.selection.push(position),
            covered,
        }
    }

    /// Child that skips the current item.
    pub fn exclude(self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self
        }
    }
}
