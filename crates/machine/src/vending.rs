//! Purchase orchestration and the sale ledger.

use std::collections::BTreeMap;
use std::num::NonZeroU32;

use tracing::{debug, warn};

use drinkbox_core::{ProductId, VendResult, Yen};
use drinkbox_inventory::{Drink, DrinkRepository, StockEntry};
use drinkbox_payments::PrepaidCard;

/// The vending service: validates payment, moves stock, tracks revenue.
///
/// Owns the repository and the cumulative sale total; the total only grows,
/// and only on a fully committed vend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendingMachine {
    repo: DrinkRepository,
    total_sales: Yen,
}

impl VendingMachine {
    pub fn new(repo: DrinkRepository) -> Self {
        Self {
            repo,
            total_sales: Yen::ZERO,
        }
    }

    /// Snapshot of every product line.
    pub fn brands(&self) -> BTreeMap<ProductId, StockEntry> {
        self.repo.get_all()
    }

    /// Product lines that are in stock and within the card's balance.
    pub fn available_brands(&self, card: &PrepaidCard) -> BTreeMap<ProductId, StockEntry> {
        self.brands()
            .into_iter()
            .filter(|(_, entry)| !entry.is_empty() && card.balance() >= entry.price())
            .collect()
    }

    /// Add `quantity` units to the product's queue.
    pub fn restock(&mut self, product_id: ProductId, quantity: NonZeroU32) -> VendResult<()> {
        self.repo.increase_stock(product_id, quantity)
    }

    /// Sell one unit of `product_id`, paid from `card`.
    ///
    /// Payment is taken before the stock check. When the queue turns out to
    /// be empty, the payment is compensated with an equal refund so the
    /// card is left exactly as it was, and the sold-out error propagates.
    pub fn vend(
        &mut self,
        product_id: ProductId,
        card: &mut PrepaidCard,
    ) -> VendResult<(ProductId, Drink)> {
        let price = self.repo.get_price(product_id)?;
        card.pay(price)?;

        let drink = match self.repo.decrease_stock(product_id) {
            Ok(drink) => drink,
            Err(err) => {
                warn!(%product_id, %price, "stock empty after payment, issuing compensating refund");
                card.refund(price);
                return Err(err);
            }
        };

        self.total_sales += price;
        debug!(%product_id, brand = drink.brand(), %price, "vended one unit");
        Ok((product_id, drink))
    }

    /// Cumulative revenue across successful vends.
    pub fn total_sales(&self) -> Yen {
        self.total_sales
    }
}
