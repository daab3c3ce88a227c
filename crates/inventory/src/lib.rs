//! Inventory domain module.
//!
//! This crate contains the drink catalog and on-hand stock bookkeeping,
//! implemented purely as deterministic domain logic (no IO).

pub mod drink;
pub mod repository;

pub use drink::Drink;
pub use repository::{DrinkRepository, StockEntry};
