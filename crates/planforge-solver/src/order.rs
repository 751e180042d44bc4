//! Working order of items.
//!
//! The order only decides which feasible plan is found first. Whether a
//! plan exists does not depend on it.

use std::cmp::Reverse;
use std::fmt;

use planforge_core::Item;

/// Order in which the selector decides on items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemOrder {
    /// Stable sort by priority, highest first. Ties keep catalog order.
    #[default]
    PriorityDescending,

    /// Decide on items exactly in catalog order.
    CatalogOrder,
}

impl ItemOrder {
    /// Returns catalog positions in decision order.
    ///
    /// # Example
    ///
    /// ```
    /// use planforge_core::Item;
    /// use planforge_solver::ItemOrder;
    ///
    /// let items = vec![
    ///     Item::new(1, "a", "x", 1u32, 10).with_priority(1),
    ///     Item::new(2, "b", "x", 1u32, 10).with_priority(5),
    ///     Item::new(3, "c", "x", 1u32, 10).with_priority(5),
    /// ];
    ///
    /// assert_eq!(ItemOrder::PriorityDescending.working_order(&items), vec![1, 2, 0]);
    /// assert_eq!(ItemOrder::CatalogOrder.working_order(&items), vec![0, 1, 2]);
    /// ```
    pub fn working_order(&self, items: &[Item]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..items.len()).collect();
        match self {
            ItemOrder::PriorityDescending => {
                // sort_by_key is stable
                order.sort_by_key(|&position| Reverse(items[position].priority()));
            }
            ItemOrder::CatalogOrder => {}
        }
        order
    }
}

impl fmt::Display for ItemOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemOrder::PriorityDescending => write!(f, "PriorityDescending"),
            ItemOrder::CatalogOrder => write!(f, "CatalogOrder"),
        }
    }
}
