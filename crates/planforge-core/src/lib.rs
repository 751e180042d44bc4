//! PlanForge Core - Item catalog types for coverage selection
//!
//! This crate provides the problem description shared by every PlanForge
//! crate:
//! - Items with a cost, a category tag and a group tag
//! - Catalogs holding items plus the coverage requirements
//! - Plans returned by the selector, with derived breakdowns
//! - Budget validation and the crate-wide error type

pub mod budget;
pub mod catalog;
pub mod error;
pub mod item;
pub mod plan;
pub mod tag;

pub use budget::Budget;
pub use catalog::{Catalog, CatalogBuilder};
pub use error::{PlanForgeError, Result};
pub use item::{Item, ItemId, DEFAULT_PRIORITY};
pub use plan::Plan;
pub use tag::{Category, Group};
