//! Trip Planner Example
//!
//! Plans a three-day Surabaya to Singapore trip that spends the budget to
//! the last rupiah while booking lodging, food, transport and at least one
//! attraction, with something on every day.
//!
//! Selector options are read from `selector.toml` when present.

use num_format::{Locale, ToFormattedString};
use planforge::prelude::*;
use planforge::{SearchResult, SelectorBuilder};
use planforge_test::trip::{trip_catalog, TRIP_BUDGET, TRIP_CATEGORIES, TRIP_DAYS};

fn main() -> Result<(), PlanForgeError> {
    planforge::console::init();

    let config = SelectorConfig::load("selector.toml").unwrap_or_default();
    let selector = SelectorBuilder::from_config(&config);
    let catalog = trip_catalog();

    let SearchResult { outcome, stats } = selector.find_plan_with_stats(&catalog, TRIP_BUDGET)?;

    match outcome {
        SelectionOutcome::Found(plan) => print_plan(&plan),
        SelectionOutcome::NoSolution => {
            println!("\nNo plan spends exactly Rp{}.", rupiah(TRIP_BUDGET));
        }
    }

    println!("\n=== SEARCH ===");
    println!("Elapsed: {:.6}s", stats.elapsed().as_secs_f64());
    println!(
        "Nodes explored: {} of up to {} subsets",
        stats.nodes_explored.to_formatted_string(&Locale::en),
        (1u64 << catalog.len()).to_formatted_string(&Locale::en)
    );

    Ok(())
}

fn print_plan(plan: &Plan) {
    println!("\n== SURABAYA TO SINGAPORE ==");
    println!("Budget: Rp{}", rupiah(TRIP_BUDGET));
    println!("Total cost: Rp{}", rupiah(plan.total_cost()));

    for day in TRIP_DAYS {
        let group = Group::from(day);
        let mut items: Vec<&Item> = plan.items_in_group(&group).collect();
        items.sort_by(|a, b| a.category().cmp(b.category()));

        println!("\n=== DAY {} ===", day);
        for item in &items {
            println!("- {}: {} (Rp{})", item.category(), item.name(), rupiah(item.cost()));
        }
        let day_cost: i64 = items.iter().map(|item| item.cost()).sum();
        println!("Day {} total: Rp{}", day, rupiah(day_cost));
    }

    println!("\n=== COST SUMMARY ===");
    let breakdown = plan.category_breakdown();
    for category in TRIP_CATEGORIES {
        let cost = breakdown.get(category).copied().unwrap_or(0);
        println!("{}: Rp{}", category, rupiah(cost));
    }

    println!("\n=== HIDDEN GEMS ===");
    for item in plan.zero_cost_items() {
        println!("- {} (day {})", item.name(), item.group());
    }
}

fn rupiah(amount: i64) -> String {
    amount.to_formatted_string(&Locale::en)
}
