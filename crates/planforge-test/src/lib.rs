//! Shared test fixtures for PlanForge crates.
//!
//! This crate provides catalogs and pure functions for testing.
//! It does NOT depend on `planforge-solver`, so the solver can use it as a
//! dev-dependency.
//!
//! - [`scenario`] - Four-item catalog with one item per required category
//! - [`trip`] - Three-day trip catalog with 26 activities
//! - [`random`] - Seeded random catalog generator
//! - [`oracle`] - Brute-force subset enumeration
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! planforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use planforge_test::scenario::four_item_catalog;
//! use planforge_test::oracle::feasible_subsets;
//! ```

pub mod oracle;
pub mod random;
pub mod scenario;
pub mod trip;

pub use random::RandomCatalog;
pub use scenario::{four_item_catalog, single_item_catalog};
pub use trip::{trip_catalog, TRIP_BUDGET};
