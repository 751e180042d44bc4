//! Tests for the backtracking selector.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use planforge_core::{Catalog, Item, ItemId, Plan, PlanForgeError};
use planforge_test::oracle::{feasible_plans, is_valid_plan};
use planforge_test::scenario::{empty_catalog, four_item_catalog, single_item_catalog};
use planforge_test::{trip_catalog, RandomCatalog, TRIP_BUDGET};

use super::*;
use crate::termination::{ExternalTermination, NodeCountTermination};

/// Include-first recursion over the working order, kept as the reference
/// the iterative search must reproduce.
fn recursive_reference(catalog: &Catalog, order: &[usize], budget: i64) -> Option<Plan> {
    fn descend(
        catalog: &Catalog,
        order: &[usize],
        depth: usize,
        remaining: i64,
        selected: &mut Vec<usize>,
    ) -> Option<Plan> {
        if depth == order.len() {
            let plan = Plan::from_positions(catalog, selected);
            return (remaining == 0 && plan.covers(catalog)).then_some(plan);
        }

        let position = order[depth];
        let cost = catalog.items()[position].cost();
        if cost <= remaining {
            selected.push(position);
            if let Some(plan) = descend(catalog, order, depth + 1, remaining - cost, selected) {
                return Some(plan);
            }
            selected.pop();
        }
        descend(catalog, order, depth + 1, remaining, selected)
    }

    descend(catalog, order, 0, budget, &mut Vec::new())
}

fn ids(values: &[u32]) -> Vec<ItemId> {
    values.iter().copied().map(ItemId::new).collect()
}

fn random_cases() -> impl Iterator<Item = (Catalog, i64)> {
    let generator = RandomCatalog::new(12)
        .with_categories(3)
        .with_groups(2)
        .with_max_cost(15);
    (0..40).map(move |seed| {
        let catalog = generator.generate(seed);
        let budget = generator.budget(&catalog, seed + 1_000);
        (catalog, budget)
    })
}

#[test]
fn test_full_coverage_at_exact_budget() {
    let catalog = four_item_catalog();
    let outcome = BacktrackingSelector::new().find_plan(&catalog, 300).unwrap();

    let plan = outcome.plan().expect("plan at budget 300");
    assert_eq!(plan.ids(), ids(&[1, 2, 3, 4]));
    assert_eq!(plan.total_cost(), 300);
}

#[test]
fn test_partial_coverage_is_rejected() {
    let catalog = four_item_catalog();
    let outcome = BacktrackingSelector::new().find_plan(&catalog, 250).unwrap();

    assert_eq!(outcome, SelectionOutcome::NoSolution);
}

#[test]
fn test_negative_budget() {
    let catalog = four_item_catalog();
    let err = BacktrackingSelector::new().find_plan(&catalog, -5).unwrap_err();

    assert_eq!(err, PlanForgeError::InvalidBudget { budget: -5 });
}

#[test]
fn test_empty_catalog_zero_budget() {
    let outcome = BacktrackingSelector::new()
        .find_plan(&empty_catalog(), 0)
        .unwrap();

    let plan = outcome.into_plan().expect("empty plan");
    assert!(plan.is_empty());
    assert_eq!(plan.total_cost(), 0);
}

#[test]
fn test_single_item() {
    let outcome = BacktrackingSelector::new()
        .find_plan(&single_item_catalog(), 10)
        .unwrap();

    assert_eq!(outcome.plan().map(Plan::ids), Some(ids(&[5])));
}

#[test]
fn test_empty_catalog_with_requirement() {
    let catalog = Catalog::builder().require_category("food").build().unwrap();

    let outcome = BacktrackingSelector::new().find_plan(&catalog, 0).unwrap();
    assert_eq!(outcome, SelectionOutcome::NoSolution);
}

#[test]
fn test_zero_budget_without_coverage() {
    let outcome = BacktrackingSelector::new()
        .find_plan(&four_item_catalog(), 0)
        .unwrap();

    assert_eq!(outcome, SelectionOutcome::NoSolution);
}

#[test]
fn test_unreachable_budget_skips_search() {
    let result = BacktrackingSelector::new()
        .find_plan_with_stats(&four_item_catalog(), 301)
        .unwrap();

    assert_eq!(result.outcome, SelectionOutcome::NoSolution);
    assert_eq!(result.stats.nodes_explored, 0);
}

#[test]
fn test_trip_takes_every_activity() {
    let catalog = trip_catalog();
    let result = BacktrackingSelector::new()
        .find_plan_with_stats(&catalog, TRIP_BUDGET)
        .unwrap();

    let plan = result.outcome.plan().expect("trip plan");
    assert_eq!(plan.len(), 26);
    assert_eq!(plan.total_cost(), TRIP_BUDGET);
    assert_eq!(plan.zero_cost_items().count(), 5);
    assert!(plan.covers(&catalog));

    // Straight down the inclusion branches
    assert_eq!(result.stats.nodes_explored, 27);
    assert_eq!(result.stats.budget_prunes, 0);
}

#[test]
fn test_repeated_searches_agree() {
    let catalog = trip_catalog();
    let selector = BacktrackingSelector::new();

    let first = selector.find_plan(&catalog, TRIP_BUDGET).unwrap();
    let second = selector.find_plan(&catalog, TRIP_BUDGET).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_priority_decides_first_plan() {
    // Either lunch completes the plan; the first one decided wins
    let catalog = Catalog::builder()
        .item(Item::new(1, "Hawker lunch", "food", 1u32, 50))
        .item(Item::new(2, "Bistro lunch", "food", 1u32, 50).with_priority(5))
        .item(Item::new(3, "Bus", "transport", 1u32, 20))
        .require_category("food")
        .require_category("transport")
        .build()
        .unwrap();

    let by_priority = BacktrackingSelector::new().find_plan(&catalog, 70).unwrap();
    assert_eq!(by_priority.plan().map(Plan::ids), Some(ids(&[2, 3])));

    let in_catalog_order = BacktrackingSelector::new()
        .with_item_order(ItemOrder::CatalogOrder)
        .find_plan(&catalog, 70)
        .unwrap();
    assert_eq!(in_catalog_order.plan().map(Plan::ids), Some(ids(&[1, 3])));
}

#[test]
fn test_first_plan_is_not_minimal() {
    // Two cheap items are decided before the single item that would do
    let catalog = Catalog::builder()
        .item(Item::new(1, "Snack", "food", 1u32, 30).with_priority(9))
        .item(Item::new(2, "Drink", "food", 1u32, 30).with_priority(9))
        .item(Item::new(3, "Set meal", "food", 1u32, 60))
        .require_category("food")
        .build()
        .unwrap();

    let outcome = BacktrackingSelector::new().find_plan(&catalog, 60).unwrap();
    assert_eq!(outcome.plan().map(Plan::len), Some(2));
}

#[test]
fn test_node_limit_cancels() {
    let selector = BacktrackingSelector::new().with_termination(NodeCountTermination::new(1));

    let err = selector.find_plan(&four_item_catalog(), 300).unwrap_err();
    assert_eq!(err, PlanForgeError::Cancelled);
}

#[test]
fn test_external_flag_cancels() {
    let flag = Arc::new(AtomicBool::new(true));
    let selector =
        BacktrackingSelector::new().with_termination(ExternalTermination::new(Arc::clone(&flag)));

    let err = selector.find_plan(&four_item_catalog(), 300).unwrap_err();
    assert_eq!(err, PlanForgeError::Cancelled);
}

#[test]
fn test_matches_recursive_reference() {
    for order in [ItemOrder::PriorityDescending, ItemOrder::CatalogOrder] {
        let selector = BacktrackingSelector::new().with_item_order(order);

        for (catalog, budget) in random_cases() {
            let working = order.working_order(catalog.items());
            let expected = recursive_reference(&catalog, &working, budget);

            let outcome = selector.find_plan(&catalog, budget).unwrap();
            assert_eq!(outcome.into_plan(), expected, "budget {budget}, order {order}");
        }
    }
}

#[test]
fn test_agrees_with_brute_force() {
    let selector = BacktrackingSelector::new();

    for (catalog, budget) in random_cases() {
        let plans = feasible_plans(&catalog, budget);
        let outcome = selector.find_plan(&catalog, budget).unwrap();

        match outcome {
            SelectionOutcome::Found(plan) => {
                assert!(is_valid_plan(&catalog, budget, &plan));
                assert!(plans.contains(&plan));
            }
            SelectionOutcome::NoSolution => assert!(plans.is_empty(), "budget {budget}"),
        }
    }
}

#[test]
fn test_feasibility_pruning_keeps_outcome() {
    let plain = BacktrackingSelector::new();
    let pruned = BacktrackingSelector::new().with_pruning(Pruning::Feasibility);

    for (catalog, budget) in random_cases() {
        let expected = plain.find_plan_with_stats(&catalog, budget).unwrap();
        let actual = pruned.find_plan_with_stats(&catalog, budget).unwrap();

        assert_eq!(actual.outcome, expected.outcome);
        assert!(actual.stats.nodes_explored <= expected.stats.nodes_explored);
    }
}

#[test]
fn test_feasibility_pruning_cuts_root() {
    let catalog = Catalog::builder()
        .items((0..64u32).map(|i| Item::new(i, format!("ride-{i}"), "transport", 1u32, 1)))
        .require_category("lodging")
        .build()
        .unwrap();

    let result = BacktrackingSelector::new()
        .with_pruning(Pruning::Feasibility)
        .find_plan_with_stats(&catalog, 32)
        .unwrap();

    assert_eq!(result.outcome, SelectionOutcome::NoSolution);
    assert_eq!(result.stats.nodes_explored, 1);
    assert_eq!(result.stats.feasibility_prunes, 1);
}

fn long_catalog(len: u32, required: &str) -> Catalog {
    Catalog::builder()
        .items((0..len).map(|i| Item::new(i, format!("step-{i}"), "step", 1u32, 1)))
        .require_category(required)
        .build()
        .unwrap()
}

#[test]
fn test_long_catalog_found() {
    let catalog = long_catalog(10_000, "step");

    let result = BacktrackingSelector::new()
        .find_plan_with_stats(&catalog, 10_000)
        .unwrap();

    assert_eq!(result.outcome.plan().map(Plan::len), Some(10_000));
    assert_eq!(result.stats.max_depth, 10_000);
}

#[test]
fn test_long_catalog_backtracks_without_overflow() {
    let catalog = long_catalog(10_000, "missing");

    let result = BacktrackingSelector::new()
        .with_termination(NodeCountTermination::new(200_000))
        .find_plan_with_stats(&catalog, 10_000);

    assert_eq!(result.unwrap_err(), PlanForgeError::Cancelled);
}

#[test]
fn test_concurrent_searches_share_catalog() {
    let catalog = trip_catalog();
    let selector = BacktrackingSelector::new();
    let expected = selector.find_plan(&catalog, TRIP_BUDGET).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| selector.find_plan(&catalog, TRIP_BUDGET).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_pruning_display() {
    assert_eq!(format!("{}", Pruning::BudgetOnly), "BudgetOnly");
    assert_eq!(format!("{}", Pruning::Feasibility), "Feasibility");
}
