//! The drink value object.

use serde::{Deserialize, Serialize};

use drinkbox_core::{ValueObject, Yen};

/// A dispensable drink unit: brand name plus unit price.
///
/// Immutable once created; units are minted at seed or restock time and
/// leave the system when dispensed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    brand: String,
    price: Yen,
}

impl Drink {
    pub fn new(brand: impl Into<String>, price: Yen) -> Self {
        Self {
            brand: brand.into(),
            price,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn price(&self) -> Yen {
        self.price
    }
}

impl ValueObject for Drink {}
