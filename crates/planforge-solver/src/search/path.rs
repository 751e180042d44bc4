//! Persistent selection path.
//!
//! Each search frame carries the items selected on the way down to it.
//! Sibling frames share their common prefix, so extending a path is O(1)
//! and never disturbs the path held by another frame.

use std::rc::Rc;

#[derive(Debug)]
struct Link {
    position: usize,
    parent: Option<Rc<Link>>,
}

/// An immutable, structurally shared list of selected catalog positions.
///
/// # Example
///
/// ```
/// use planforge_solver::search::SelectionPath;
///
/// let root = SelectionPath::new();
/// let a = root.push(4);
/// let b = a.push(1);
///
/// assert!(root.is_empty());
/// assert_eq!(a.positions(), vec![4]);
/// assert_eq!(b.positions(), vec![1, 4]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectionPath {
    head: Option<Rc<Link>>,
    len: usize,
}

impl SelectionPath {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new path with `position` appended; `self` is unchanged.
    pub fn push(&self, position: usize) -> Self {
        Self {
            head: Some(Rc::new(Link {
                position,
                parent: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates positions from the most recent selection back to the first.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        let mut cursor = self.head.as_deref();
        std::iter::from_fn(move || {
            let link = cursor?;
            cursor = link.parent.as_deref();
            Some(link.position)
        })
    }

    /// Returns the selected positions in ascending catalog order.
    pub fn positions(&self) -> Vec<usize> {
        let mut positions: Vec<usize> = self.iter().collect();
        positions.sort_unstable();
        positions
    }
}

impl Drop for SelectionPath {
    // Unlink iteratively so long paths cannot overflow the call stack.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(link) = next {
            match Rc::try_unwrap(link) {
                Ok(mut link) => next = link.parent.take(),
                Err(_) => break,
            }
        }
    }
}
