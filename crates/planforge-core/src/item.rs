//! Selectable items.

use std::fmt;

use crate::tag::{Category, Group};

/// Default priority for items built without an explicit one.
pub const DEFAULT_PRIORITY: i32 = 1;

/// Stable identifier of an item, unique within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(u32);

impl ItemId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// An immutable selectable unit with a cost, a category and a group.
///
/// Cost is signed so that callers can hand over raw input; negative costs
/// are rejected when the item is added to a [`Catalog`](crate::Catalog).
///
/// # Example
///
/// ```
/// use planforge_core::{Category, Group, Item};
///
/// let item = Item::new(1, "Airport MRT", "transport", 1u32, 100).with_priority(10);
///
/// assert_eq!(item.cost(), 100);
/// assert_eq!(item.category(), &Category::from("transport"));
/// assert_eq!(item.group(), &Group::from(1u32));
/// assert_eq!(item.priority(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    id: ItemId,
    name: String,
    category: Category,
    group: Group,
    cost: i64,
    priority: i32,
}

impl Item {
    /// Creates an item with [`DEFAULT_PRIORITY`].
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        category: impl Into<Category>,
        group: impl Into<Group>,
        cost: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            group: group.into(),
            cost,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Returns a copy of this item with the given priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn category(&self) -> &Category {
        &self.category
    }

    #[inline]
    pub fn group(&self) -> &Group {
        &self.group
    }

    #[inline]
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Higher priorities have their inclusion explored first.
    #[inline]
    pub fn priority(&self) -> i32 {
        self.priority
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_defaults() {
        let item = Item::new(3, "Merlion Park", "attraction", 2u32, 0);

        assert_eq!(item.id(), ItemId::new(3));
        assert_eq!(item.name(), "Merlion Park");
        assert_eq!(item.priority(), DEFAULT_PRIORITY);
        assert_eq!(item.to_string(), "Merlion Park (0)");
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId::new(42).to_string(), "#42");
        assert_eq!(ItemId::from(42).get(), 42);
    }
}
