//! Small hand-written catalogs.
//!
//! # Example
//!
//! ```
//! use planforge_test::scenario::four_item_catalog;
//!
//! let catalog = four_item_catalog();
//! assert_eq!(catalog.len(), 4);
//! assert_eq!(catalog.total_cost(), 300);
//! ```

use planforge_core::{Catalog, Item};

/// Item ids in [`four_item_catalog`].
pub const TRANSPORT: u32 = 1;
pub const FOOD: u32 = 2;
pub const LODGING: u32 = 3;
pub const ATTRACTION: u32 = 4;

/// Four items in group 1, one per required category:
/// transport 100, food 50, lodging 150 and a free attraction.
///
/// Every item is needed for coverage, so the only plan is the whole
/// catalog at budget 300.
pub fn four_item_catalog() -> Catalog {
    Catalog::builder()
        .item(Item::new(TRANSPORT, "A", "transport", 1u32, 100))
        .item(Item::new(FOOD, "B", "food", 1u32, 50))
        .item(Item::new(LODGING, "C", "lodging", 1u32, 150))
        .item(Item::new(ATTRACTION, "D", "attraction", 1u32, 0))
        .require_category("transport")
        .require_category("food")
        .require_category("lodging")
        .require_category("attraction")
        .require_group(1u32)
        .build()
        .expect("four-item catalog is valid")
}

/// One item `E` (category `x`, group 1, cost 10) that is also the only
/// requirement.
pub fn single_item_catalog() -> Catalog {
    Catalog::builder()
        .item(Item::new(5, "E", "x", 1u32, 10))
        .require_category("x")
        .require_group(1u32)
        .build()
        .expect("single-item catalog is valid")
}

/// No items and no requirements.
pub fn empty_catalog() -> Catalog {
    Catalog::builder()
        .build()
        .expect("empty catalog is valid")
}
