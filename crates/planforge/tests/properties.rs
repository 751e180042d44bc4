//! Outcome properties checked on seeded random catalogs.

use planforge::prelude::*;
use planforge::BudgetSweep;
use planforge_test::oracle::{has_plan, is_valid_plan};
use planforge_test::RandomCatalog;

const SEEDS: std::ops::Range<u64> = 0..30;

fn generator() -> RandomCatalog {
    RandomCatalog::new(14)
        .with_categories(3)
        .with_groups(3)
        .with_max_cost(12)
}

#[test]
fn test_found_plans_are_exact_and_covering() {
    let generator = generator();

    for seed in SEEDS {
        let catalog = generator.generate(seed);
        let budget = generator.budget(&catalog, seed);

        if let SelectionOutcome::Found(plan) = planforge::find_plan(&catalog, budget).unwrap() {
            assert!(is_valid_plan(&catalog, budget, &plan), "seed {seed}");
        }
    }
}

#[test]
fn test_no_solution_only_when_none_exists() {
    let generator = generator();

    for seed in SEEDS {
        let catalog = generator.generate(seed);
        let budget = generator.budget(&catalog, seed);

        let outcome = planforge::find_plan(&catalog, budget).unwrap();
        assert_eq!(outcome.is_found(), has_plan(&catalog, budget), "seed {seed}");
    }
}

#[test]
fn test_budget_above_total_cost_has_no_solution() {
    let generator = generator();

    for seed in SEEDS {
        let catalog = generator.generate(seed);
        let outcome = planforge::find_plan(&catalog, catalog.total_cost() + 1).unwrap();
        assert_eq!(outcome, SelectionOutcome::NoSolution);
    }
}

#[test]
fn test_identical_inputs_give_identical_plans() {
    let generator = generator();
    let selector = BacktrackingSelector::new().with_pruning(Pruning::Feasibility);

    for seed in SEEDS {
        let catalog = generator.generate(seed);
        let budget = generator.budget(&catalog, seed);

        let first = selector.find_plan(&catalog, budget).unwrap();
        let again = selector.find_plan(&generator.generate(seed), budget).unwrap();
        assert_eq!(first.plan().map(Plan::ids), again.plan().map(Plan::ids));
    }
}

#[test]
fn test_sweep_covers_every_budget() {
    let catalog = RandomCatalog::new(10).with_max_cost(8).generate(3);
    let selector = BacktrackingSelector::new().with_pruning(Pruning::Feasibility);
    let budgets: Vec<i64> = (0..=catalog.total_cost()).collect();

    let outcomes = BudgetSweep::new(&selector, &catalog).run(&budgets);

    for (&budget, outcome) in budgets.iter().zip(&outcomes) {
        let outcome = outcome.as_ref().unwrap();
        assert_eq!(outcome.is_found(), has_plan(&catalog, budget), "budget {budget}");
    }
}
