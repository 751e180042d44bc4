//! The item catalog: candidate items plus coverage requirements.

use std::collections::{BTreeSet, HashMap};

use crate::error::{PlanForgeError, Result};
use crate::item::{Item, ItemId};
use crate::tag::{Category, Group};

/// An immutable problem instance.
///
/// Holds the candidate items in the order they were supplied and the two
/// requirement sets a plan must cover. Requirement sets are supplied by
/// the caller and never inferred from the items; when both are empty,
/// coverage is trivially satisfied.
///
/// # Example
///
/// ```
/// use planforge_core::{Catalog, Item};
///
/// let catalog = Catalog::builder()
///     .item(Item::new(1, "Flight", "transport", 1u32, 100))
///     .item(Item::new(2, "Hawker lunch", "food", 1u32, 50))
///     .require_category("transport")
///     .require_category("food")
///     .require_group(1u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.total_cost(), 150);
/// assert_eq!(catalog.required_categories().len(), 2);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Catalog {
    items: Vec<Item>,
    required_categories: BTreeSet<Category>,
    required_groups: BTreeSet<Group>,
    #[cfg_attr(feature = "serde", serde(skip))]
    positions: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Creates a catalog, validating every item.
    ///
    /// # Errors
    ///
    /// Returns [`PlanForgeError::InvalidItem`] if an item has a negative
    /// cost or reuses an id already present in the catalog.
    pub fn new(
        items: Vec<Item>,
        required_categories: impl IntoIterator<Item = Category>,
        required_groups: impl IntoIterator<Item = Group>,
    ) -> Result<Self> {
        let mut positions = HashMap::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            if item.cost() < 0 {
                return Err(PlanForgeError::InvalidItem {
                    id: item.id(),
                    reason: format!("cost {} is negative", item.cost()),
                });
            }
            if positions.insert(item.id(), position).is_some() {
                return Err(PlanForgeError::InvalidItem {
                    id: item.id(),
                    reason: "id is already used by another item".to_string(),
                });
            }
        }

        Ok(Self {
            items,
            required_categories: required_categories.into_iter().collect(),
            required_groups: required_groups.into_iter().collect(),
            positions,
        })
    }

    /// Returns a builder for incremental construction.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Returns the items in construction order.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn required_categories(&self) -> &BTreeSet<Category> {
        &self.required_categories
    }

    #[inline]
    pub fn required_groups(&self) -> &BTreeSet<Group> {
        &self.required_groups
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item with the given id.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.positions.get(&id).map(|&position| &self.items[position])
    }

    /// Sum of all item costs, saturating at `i64::MAX`.
    ///
    /// No plan can cost more than this.
    pub fn total_cost(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |total, item| total.saturating_add(item.cost()))
    }

    /// Returns true if a selection touching these tags covers every requirement.
    pub fn is_covered_by<'a>(
        &self,
        categories: impl IntoIterator<Item = &'a Category>,
        groups: impl IntoIterator<Item = &'a Group>,
    ) -> bool {
        let categories: BTreeSet<&Category> = categories.into_iter().collect();
        let groups: BTreeSet<&Group> = groups.into_iter().collect();

        self.required_categories
            .iter()
            .all(|category| categories.contains(category))
            && self.required_groups.iter().all(|group| groups.contains(group))
    }
}

/// Incremental builder for [`Catalog`].
///
/// Validation happens in [`CatalogBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    items: Vec<Item>,
    required_categories: BTreeSet<Category>,
    required_groups: BTreeSet<Group>,
}

impl CatalogBuilder {
    /// Appends an item.
    pub fn item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Appends several items, keeping their order.
    pub fn items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items.extend(items);
        self
    }

    /// Requires at least one selected item of this category.
    pub fn require_category(mut self, category: impl Into<Category>) -> Self {
        self.required_categories.insert(category.into());
        self
    }

    /// Requires at least one selected item of this group.
    pub fn require_group(mut self, group: impl Into<Group>) -> Self {
        self.required_groups.insert(group.into());
        self
    }

    /// Validates and builds the catalog.
    pub fn build(self) -> Result<Catalog> {
        Catalog::new(self.items, self.required_categories, self.required_groups)
    }
}
