//! Seeded random catalogs.
//!
//! # Example
//!
//! ```
//! use planforge_test::RandomCatalog;
//!
//! let generator = RandomCatalog::new(12).with_categories(3).with_groups(2);
//! let catalog = generator.generate(7);
//!
//! assert_eq!(catalog.len(), 12);
//! assert_eq!(catalog.required_categories().len(), 3);
//! assert_eq!(generator.generate(7).items(), catalog.items());
//! ```

use planforge_core::{Catalog, Category, Group, Item};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator for catalogs of a fixed shape.
///
/// Categories are labelled `c0`, `c1`, ... and groups `1`, `2`, ...; every
/// generated label is required. Costs are drawn from `0..=max_cost` and
/// priorities from `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomCatalog {
    items: usize,
    categories: usize,
    groups: u32,
    max_cost: i64,
}

impl RandomCatalog {
    /// Generator for `items` items over two categories and two groups.
    pub fn new(items: usize) -> Self {
        Self {
            items,
            categories: 2,
            groups: 2,
            max_cost: 20,
        }
    }

    pub fn with_categories(mut self, categories: usize) -> Self {
        self.categories = categories.max(1);
        self
    }

    pub fn with_groups(mut self, groups: u32) -> Self {
        self.groups = groups.max(1);
        self
    }

    pub fn with_max_cost(mut self, max_cost: i64) -> Self {
        self.max_cost = max_cost.max(0);
        self
    }

    /// Builds the catalog for `seed`. Equal seeds give equal catalogs.
    pub fn generate(&self, seed: u64) -> Catalog {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let items = (0..self.items)
            .map(|i| {
                let category = rng.random_range(0..self.categories);
                let group = rng.random_range(1..=self.groups);
                let cost = rng.random_range(0..=self.max_cost);
                let priority = rng.random_range(1..=10);
                Item::new(i as u32, format!("item-{i}"), category_label(category), group, cost)
                    .with_priority(priority)
            })
            .collect();

        Catalog::new(
            items,
            (0..self.categories).map(category_label),
            (1..=self.groups).map(Group::from),
        )
        .expect("generated items have unique ids and non-negative costs")
    }

    /// Picks a budget for `catalog` in `0..=total_cost`.
    ///
    /// Half of the draws are the cost of a random subset, so a fair share
    /// of budgets are reachable.
    pub fn budget(&self, catalog: &Catalog, seed: u64) -> i64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        if rng.random_bool(0.5) {
            catalog
                .items()
                .iter()
                .filter(|_| rng.random_bool(0.5))
                .map(Item::cost)
                .sum()
        } else {
            rng.random_range(0..=catalog.total_cost())
        }
    }
}

fn category_label(index: usize) -> Category {
    Category::new(format!("c{index}"))
}
