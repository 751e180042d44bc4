//! Plans: feasible selections returned by the selector.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::Catalog;
#[cfg(feature = "serde")]
use crate::error::{PlanForgeError, Result};
use crate::item::{Item, ItemId};
use crate::tag::{Category, Group};

/// A selection of catalog items.
///
/// Items are kept in catalog order regardless of the order in which the
/// search decided on them. Every breakdown is computed from the selected
/// items on demand; only the selection and its total are stored, and
/// deserializing recomputes the total from the items.
///
/// # Example
///
/// ```
/// use planforge_core::{Catalog, Category, Item, ItemId, Plan};
///
/// let catalog = Catalog::builder()
///     .item(Item::new(1, "Flight", "transport", 1u32, 100))
///     .item(Item::new(2, "Lunch", "food", 1u32, 50))
///     .item(Item::new(3, "Dinner", "food", 2u32, 70))
///     .build()
///     .unwrap();
///
/// // Positions may arrive in any order.
/// let plan = Plan::from_positions(&catalog, &[2, 0]);
///
/// assert_eq!(plan.total_cost(), 170);
/// assert_eq!(plan.ids(), vec![ItemId::new(1), ItemId::new(3)]);
/// assert_eq!(plan.category_breakdown()[&Category::from("food")], 70);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PlanRepr"))]
pub struct Plan {
    total_cost: i64,
    items: Vec<Item>,
}

/// Serialized form read back into a [`Plan`]. A stored total is ignored
/// and recomputed from the items.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PlanRepr {
    items: Vec<Item>,
}

#[cfg(feature = "serde")]
impl TryFrom<PlanRepr> for Plan {
    type Error = PlanForgeError;

    fn try_from(repr: PlanRepr) -> Result<Self> {
        if let Some(item) = repr.items.iter().find(|item| item.cost() < 0) {
            return Err(PlanForgeError::InvalidItem {
                id: item.id(),
                reason: format!("cost {} is negative", item.cost()),
            });
        }
        Ok(Plan::new(repr.items))
    }
}

impl Plan {
    /// Creates a plan from already ordered items.
    pub fn new(items: Vec<Item>) -> Self {
        let total_cost = items.iter().map(Item::cost).sum();
        Self { total_cost, items }
    }

    /// The plan that selects nothing.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Creates a plan from catalog positions, restoring catalog order.
    ///
    /// # Panics
    ///
    /// Panics if a position is out of range for the catalog.
    pub fn from_positions(catalog: &Catalog, positions: &[usize]) -> Self {
        let mut sorted = positions.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        let items = sorted
            .into_iter()
            .map(|position| catalog.items()[position].clone())
            .collect();
        Self::new(items)
    }

    /// Returns the selected items in catalog order.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the ids of the selected items in catalog order.
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(Item::id).collect()
    }

    #[inline]
    pub fn total_cost(&self) -> i64 {
        self.total_cost
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if the plan selects the item with this id.
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    /// Total cost per category.
    pub fn category_breakdown(&self) -> BTreeMap<Category, i64> {
        let mut breakdown = BTreeMap::new();
        for item in &self.items {
            *breakdown.entry(item.category().clone()).or_insert(0) += item.cost();
        }
        breakdown
    }

    /// Total cost per group.
    pub fn group_breakdown(&self) -> BTreeMap<Group, i64> {
        let mut breakdown = BTreeMap::new();
        for item in &self.items {
            *breakdown.entry(item.group().clone()).or_insert(0) += item.cost();
        }
        breakdown
    }

    /// Selected items in one category, in catalog order.
    pub fn items_in_category<'a>(
        &'a self,
        category: &'a Category,
    ) -> impl Iterator<Item = &'a Item> + 'a {
        self.items
            .iter()
            .filter(move |item| item.category() == category)
    }

    /// Selected items in one group, in catalog order.
    pub fn items_in_group<'a>(&'a self, group: &'a Group) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |item| item.group() == group)
    }

    /// Selected items that cost nothing.
    pub fn zero_cost_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.cost() == 0)
    }

    pub fn covered_categories(&self) -> BTreeSet<&Category> {
        self.items.iter().map(Item::category).collect()
    }

    pub fn covered_groups(&self) -> BTreeSet<&Group> {
        self.items.iter().map(Item::group).collect()
    }

    /// Returns true if this plan covers every requirement of the catalog.
    pub fn covers(&self, catalog: &Catalog) -> bool {
        catalog.is_covered_by(
            self.items.iter().map(Item::category),
            self.items.iter().map(Item::group),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builder()
            .item(Item::new(1, "Flight", "transport", 1u32, 100))
            .item(Item::new(2, "Hostel", "lodging", 1u32, 150))
            .item(Item::new(3, "Lunch", "food", 2u32, 50))
            .item(Item::new(4, "Light show", "attraction", 2u32, 0))
            .item(Item::new(5, "Dinner", "food", 2u32, 30))
            .require_category("food")
            .require_group(1u32)
            .require_group(2u32)
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_plan() {
        let plan = Plan::empty();

        assert!(plan.is_empty());
        assert_eq!(plan.total_cost(), 0);
        assert!(plan.category_breakdown().is_empty());
    }

    #[test]
    fn test_from_positions_restores_catalog_order() {
        let plan = Plan::from_positions(&catalog(), &[4, 0, 2]);

        assert_eq!(plan.ids(), vec![ItemId::new(1), ItemId::new(3), ItemId::new(5)]);
        assert_eq!(plan.total_cost(), 180);
    }

    #[test]
    fn test_breakdowns() {
        let plan = Plan::from_positions(&catalog(), &[0, 1, 2, 3, 4]);

        let by_category = plan.category_breakdown();
        assert_eq!(by_category[&Category::from("food")], 80);
        assert_eq!(by_category[&Category::from("attraction")], 0);

        let by_group = plan.group_breakdown();
        assert_eq!(by_group[&Group::from(1u32)], 250);
        assert_eq!(by_group[&Group::from(2u32)], 80);
        assert_eq!(by_group.values().sum::<i64>(), plan.total_cost());
    }

    #[test]
    fn test_filters() {
        let plan = Plan::from_positions(&catalog(), &[0, 1, 2, 3, 4]);
        let food = Category::from("food");
        let day_two = Group::from(2u32);

        assert_eq!(plan.items_in_category(&food).count(), 2);
        assert_eq!(plan.items_in_group(&day_two).count(), 3);

        let free: Vec<&str> = plan.zero_cost_items().map(Item::name).collect();
        assert_eq!(free, vec!["Light show"]);
    }

    #[test]
    fn test_covers() {
        let catalog = catalog();

        assert!(Plan::from_positions(&catalog, &[0, 2]).covers(&catalog));
        assert!(!Plan::from_positions(&catalog, &[0, 1]).covers(&catalog));
        assert!(Plan::from_positions(&catalog, &[0, 2]).contains(ItemId::new(3)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    const LUNCH: &str = r#"
        total_cost = 999

        [[items]]
        id = 1
        name = "Lunch"
        category = "food"
        group = "1"
        cost = 10
        priority = 1
    "#;

    #[test]
    fn test_total_cost_recomputed_on_deserialize() {
        let plan: Plan = toml::from_str(LUNCH).unwrap();

        assert_eq!(plan.total_cost(), 10);
        assert_eq!(plan, Plan::new(vec![Item::new(1, "Lunch", "food", 1u32, 10)]));
    }

    #[test]
    fn test_negative_cost_rejected_on_deserialize() {
        let input = LUNCH.replace("cost = 10", "cost = -10");

        let err = toml::from_str::<Plan>(&input).unwrap_err();
        assert!(err.to_string().contains("cost -10 is negative"));
    }

    #[test]
    fn test_serialize_round_trip() {
        let plan = Plan::new(vec![
            Item::new(1, "Flight", "transport", 1u32, 100),
            Item::new(2, "Park", "attraction", 2u32, 0).with_priority(9),
        ]);

        let text = toml::to_string(&plan).unwrap();
        let back: Plan = toml::from_str(&text).unwrap();
        assert_eq!(back, plan);
    }
}
