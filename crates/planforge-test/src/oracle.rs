//! Brute-force reference for small catalogs.
//!
//! Enumerates every subset of the catalog, so it is only usable for a
//! couple of dozen items.

use planforge_core::{Catalog, Plan};

/// Largest catalog the oracle accepts.
pub const MAX_ORACLE_ITEMS: usize = 20;

/// Every plan that spends `budget` exactly with full coverage, in subset
/// bitmask order.
///
/// # Panics
///
/// Panics if the catalog has more than [`MAX_ORACLE_ITEMS`] items.
pub fn feasible_plans(catalog: &Catalog, budget: i64) -> Vec<Plan> {
    let n = catalog.len();
    assert!(
        n <= MAX_ORACLE_ITEMS,
        "oracle enumerates 2^n subsets; {n} items is too many"
    );

    (0u32..(1 << n))
        .map(|mask| {
            let positions: Vec<usize> = (0..n).filter(|i| mask & (1 << i) != 0).collect();
            Plan::from_positions(catalog, &positions)
        })
        .filter(|plan| is_valid_plan(catalog, budget, plan))
        .collect()
}

/// Whether any plan exists for `budget`.
pub fn has_plan(catalog: &Catalog, budget: i64) -> bool {
    !feasible_plans(catalog, budget).is_empty()
}

/// Checks a plan against a catalog: known items only, no repeats, exact
/// budget and full coverage.
pub fn is_valid_plan(catalog: &Catalog, budget: i64, plan: &Plan) -> bool {
    let ids = plan.ids();
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();

    unique.len() == ids.len()
        && ids.iter().all(|&id| catalog.get(id).is_some())
        && plan.total_cost() == budget
        && plan.covers(catalog)
}
