//! Stock entries and the in-memory drink repository.

use std::collections::{BTreeMap, VecDeque};
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use drinkbox_core::{Entity, ProductId, VendError, VendResult, Yen};

use crate::drink::Drink;

/// A product line's metadata plus its queue of on-hand units.
///
/// Invariant: every drink in `on_hand` carries the entry's own brand and
/// price. The queue is only ever filled by the entry itself, so the
/// invariant holds constructively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    product_id: ProductId,
    brand: String,
    price: Yen,
    on_hand: VecDeque<Drink>,
}

impl StockEntry {
    /// A new product line stocked with `initial` units.
    pub fn new(product_id: ProductId, brand: impl Into<String>, price: Yen, initial: u32) -> Self {
        let mut entry = Self {
            product_id,
            brand: brand.into(),
            price,
            on_hand: VecDeque::new(),
        };
        entry.fill(initial);
        entry
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn price(&self) -> Yen {
        self.price
    }

    /// Number of units on hand.
    pub fn on_hand(&self) -> usize {
        self.on_hand.len()
    }

    pub fn is_empty(&self) -> bool {
        self.on_hand.is_empty()
    }

    /// Mint `quantity` fresh units of this entry's own brand and price.
    pub(crate) fn fill(&mut self, quantity: u32) {
        for _ in 0..quantity {
            self.on_hand.push_back(Drink::new(self.brand.clone(), self.price));
        }
    }

    /// Dispense the oldest unit (FIFO), if any.
    pub(crate) fn take(&mut self) -> Option<Drink> {
        self.on_hand.pop_front()
    }
}

impl Entity for StockEntry {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}

/// In-memory drink inventory keyed by product id.
///
/// The key set is fixed after construction: restock and vend only change
/// queue lengths, never the set of product lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinkRepository {
    inventory: BTreeMap<ProductId, StockEntry>,
}

impl DrinkRepository {
    /// Build the repository from the seeded product lines, keyed by each
    /// entry's own id. A duplicated id keeps the later entry.
    pub fn new(entries: impl IntoIterator<Item = StockEntry>) -> Self {
        let inventory = entries
            .into_iter()
            .map(|entry| (entry.product_id(), entry))
            .collect();
        Self { inventory }
    }

    /// Owned snapshot of the whole catalog.
    ///
    /// Entries are deep copies; mutating the returned map never reaches
    /// repository state.
    pub fn get_all(&self) -> BTreeMap<ProductId, StockEntry> {
        self.inventory.clone()
    }

    /// Unit price of `product_id`.
    pub fn get_price(&self, product_id: ProductId) -> VendResult<Yen> {
        self.entry(product_id).map(StockEntry::price)
    }

    /// Append `quantity` newly minted units to the product's queue.
    ///
    /// Zero is unrepresentable by construction (`NonZeroU32`).
    pub fn increase_stock(&mut self, product_id: ProductId, quantity: NonZeroU32) -> VendResult<()> {
        let entry = self.entry_mut(product_id)?;
        entry.fill(quantity.get());
        Ok(())
    }

    /// Pop one unit from the front of the product's queue (FIFO).
    pub fn decrease_stock(&mut self, product_id: ProductId) -> VendResult<Drink> {
        let entry = self.entry_mut(product_id)?;
        match entry.take() {
            Some(drink) => Ok(drink),
            None => Err(VendError::sold_out(entry.brand())),
        }
    }

    fn entry(&self, product_id: ProductId) -> VendResult<&StockEntry> {
        self.inventory
            .get(&product_id)
            .ok_or(VendError::ProductNotFound { product_id })
    }

    fn entry_mut(&mut self, product_id: ProductId) -> VendResult<&mut StockEntry> {
        self.inventory
            .get_mut(&product_id)
            .ok_or(VendError::ProductNotFound { product_id })
    }
}
