//! Three-day trip catalog.
//!
//! 26 activities for a Surabaya to Singapore trip, grouped by day, with
//! importance (1 to 10) as priority. Costs are in rupiah.
//!
//! The priced activities add up to exactly [`TRIP_BUDGET`], so every plan
//! at that budget takes all of them plus any subset of the free ones.

use planforge_core::{Catalog, Category, Group, Item};

/// Trip budget in rupiah.
pub const TRIP_BUDGET: i64 = 7_500_000;

/// Days the trip must cover.
pub const TRIP_DAYS: [u32; 3] = [1, 2, 3];

/// Categories the trip must cover.
pub const TRIP_CATEGORIES: [&str; 4] = ["accommodation", "food", "transportation", "attraction"];

const ACTIVITIES: &[(&str, &str, i64, u32, i32)] = &[
    ("Tiket Pesawat Surabaya-Singapura", "transportation", 1_250_000, 1, 10),
    ("Hostel di Little India (Malam 1)", "accommodation", 1_000_000, 1, 10),
    ("MRT dari Bandara ke Hostel", "transportation", 100_000, 1, 10),
    ("Breakfast: Kopi dan roti lokal", "food", 50_000, 1, 7),
    ("Lunch: Maxwell Food Centre", "food", 100_000, 1, 7),
    ("Dinner: Little India Food Court", "food", 100_000, 1, 7),
    ("Gardens by the Bay - OCBC Skyway", "attraction", 150_000, 1, 8),
    ("Gardens by the Bay - Flower Dome & Cloud Forest", "attraction", 250_000, 1, 8),
    ("Hostel di Little India (Malam 2)", "accommodation", 1_000_000, 2, 10),
    ("Transportasi MRT dan bus", "transportation", 150_000, 2, 10),
    ("Breakfast: Kaya toast di Ya Kun", "food", 70_000, 2, 7),
    ("Lunch: Chinatown Complex Food Centre", "food", 130_000, 2, 7),
    ("Dinner: Lau Pa Sat", "food", 150_000, 2, 7),
    ("Marina Bay Sands Observation Deck", "attraction", 300_000, 2, 8),
    ("Tiket Pesawat Singapura-Surabaya", "transportation", 1_250_000, 3, 10),
    ("Transportasi MRT, bus dan ke Bandara", "transportation", 250_000, 3, 10),
    ("Breakfast: Toast Box", "food", 80_000, 3, 7),
    ("Lunch: Hawker Center di Chinatown", "food", 120_000, 3, 7),
    ("Snack untuk perjalanan pulang", "food", 200_000, 3, 6),
    ("Jajanan untuk oleh-oleh", "food", 500_000, 3, 7),
    ("Shopping di Bugis Street", "attraction", 300_000, 3, 8),
    ("Supertree Grove Light Show", "attraction", 0, 1, 9),
    ("Spectra Light Show di Marina Bay", "attraction", 0, 2, 9),
    ("Singapore Botanic Gardens", "attraction", 0, 3, 8),
    ("Buddha Tooth Relic Temple", "attraction", 0, 3, 7),
    ("Merlion Park", "attraction", 0, 2, 9),
];

/// Builds the trip catalog. Item ids start at 1 in listing order.
///
/// # Example
///
/// ```
/// use planforge_test::trip::{trip_catalog, TRIP_BUDGET};
///
/// let catalog = trip_catalog();
/// assert_eq!(catalog.len(), 26);
/// assert_eq!(catalog.total_cost(), TRIP_BUDGET);
/// ```
pub fn trip_catalog() -> Catalog {
    let items = ACTIVITIES
        .iter()
        .enumerate()
        .map(|(i, &(name, category, cost, day, importance))| {
            Item::new(i as u32 + 1, name, category, day, cost).with_priority(importance)
        })
        .collect();

    Catalog::new(
        items,
        TRIP_CATEGORIES.into_iter().map(Category::from),
        TRIP_DAYS.into_iter().map(Group::from),
    )
    .expect("trip catalog is valid")
}
