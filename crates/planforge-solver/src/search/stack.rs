//! Explicit depth-first search stack.

use super::frame::SearchFrame;

/// A LIFO stack of pending frames.
///
/// Expanding a frame pushes its exclusion child first and its inclusion
/// child last, so the inclusion subtree is explored to exhaustion before
/// the exclusion sibling is popped. This replays the branch order of a
/// recursive include-then-exclude search without growing the call stack.
///
/// At most one pending exclusion frame exists per depth plus the frame
/// being expanded, so the stack never holds more than `n + 1` frames for
/// `n` items.
#[derive(Debug, Default)]
pub struct SearchStack {
    frames: Vec<SearchFrame>,
    peak: usize,
}

impl SearchStack {
    /// Creates a stack preallocated for a catalog of `item_count` items.
    pub fn preallocated(item_count: usize) -> Self {
        Self {
            frames: Vec::with_capacity(item_count.saturating_add(1)),
            peak: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, frame: SearchFrame) {
        self.frames.push(frame);
        self.peak = self.peak.max(self.frames.len());
    }

    /// Pushes both children of an expanded frame in exploration order.
    ///
    /// `included` is `None` when the inclusion branch was pruned.
    #[inline]
    pub fn push_children(&mut self, excluded: SearchFrame, included: Option<SearchFrame>) {
        self.push(excluded);
        if let Some(frame) = included {
            self.push(frame);
        }
    }

    #[inline]
    pub fn pop(&mut self) -> Option<SearchFrame> {
        self.frames.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Largest number of frames held at once.
    #[inline]
    pub fn peak(&self) -> usize {
        self.peak
    }
}
