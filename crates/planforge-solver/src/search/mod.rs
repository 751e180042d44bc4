//! Search tree building blocks.
//!
//! The selector explores an include/exclude decision tree with an
//! explicit stack of frames instead of recursion:
//!
//! - [`SearchFrame`]: one pending node (depth, remaining budget, selection, coverage)
//! - [`SearchStack`]: LIFO of pending frames, inclusion popped first
//! - [`SelectionPath`]: persistent selection shared between sibling frames
//! - [`CoverageIndex`]: one bit per required tag, one mask per item
//! - [`BranchBounder`]: optional cuts on top of budget pruning

mod bounder;
mod coverage;
mod frame;
mod path;
mod stack;

pub use bounder::{BranchBounder, FeasibilityBounder, NoBounder};
pub use coverage::CoverageIndex;
pub use frame::SearchFrame;
pub use path::SelectionPath;
pub use stack::SearchStack;
