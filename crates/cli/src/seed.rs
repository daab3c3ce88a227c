//! Seed data: the initial product catalog.
//!
//! The machine starts from a fixed catalog; the id set never changes after
//! this point. A JSON seed file can replace the built-in defaults.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use drinkbox_core::{ProductId, Yen};
use drinkbox_inventory::StockEntry;

/// Environment variable naming an optional JSON seed file.
pub const SEED_ENV: &str = "DRINKBOX_SEED";

/// One product line in a seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedEntry {
    pub product_id: u32,
    pub brand: String,
    pub price: u32,
    pub quantity: u32,
}

/// Built-in catalog used when no seed file is given.
pub fn default_inventory() -> Vec<StockEntry> {
    let seeds = [
        (1, "Pepsi", 150, 5),
        (2, "Monster", 230, 5),
        (3, "Irohasu", 120, 5),
    ];

    seeds
        .into_iter()
        .map(|(id, brand, price, quantity)| {
            StockEntry::new(ProductId::new(id), brand, Yen::new(price), quantity)
        })
        .collect()
}

/// Load a catalog from a JSON seed file (an array of [`SeedEntry`]).
pub fn load_inventory(path: &Path) -> anyhow::Result<Vec<StockEntry>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let entries: Vec<SeedEntry> = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse seed file {}", path.display()))?;

    Ok(entries
        .into_iter()
        .map(|entry| {
            StockEntry::new(
                ProductId::new(entry.product_id),
                entry.brand,
                Yen::new(entry.price),
                entry.quantity,
            )
        })
        .collect())
}

/// Resolve the startup catalog: `DRINKBOX_SEED` when set, defaults otherwise.
pub fn initial_inventory() -> anyhow::Result<Vec<StockEntry>> {
    match std::env::var_os(SEED_ENV) {
        Some(path) => load_inventory(Path::new(&path)),
        None => Ok(default_inventory()),
    }
}
