//! Rechargeable stored-value card (transit-card style balance).

use serde::{Deserialize, Serialize};

use drinkbox_core::{VendError, VendResult, Yen};

/// Prepaid card balance used to pay for drinks.
///
/// Invariant: `balance <= MAX_BALANCE` before and after every mutation (the
/// lower bound is structural, `Yen` is unsigned). The card knows nothing
/// about rollback; compensation on a failed vend is the vending service's
/// responsibility.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepaidCard {
    balance: Yen,
}

impl PrepaidCard {
    /// Smallest amount a single charge accepts (inclusive).
    pub const MIN_CHARGE: Yen = Yen::new(100);

    /// Balance cap enforced on every charge.
    pub const MAX_BALANCE: Yen = Yen::new(20_000);

    /// A fresh card starts empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// A card pre-loaded with `balance`.
    pub fn with_balance(balance: Yen) -> Self {
        debug_assert!(balance <= Self::MAX_BALANCE);
        Self { balance }
    }

    pub fn balance(&self) -> Yen {
        self.balance
    }

    /// Add `amount` to the balance.
    ///
    /// Fails when `amount` is below [`Self::MIN_CHARGE`] or would push the
    /// balance past [`Self::MAX_BALANCE`]; the balance is untouched on
    /// failure.
    pub fn charge(&mut self, amount: Yen) -> VendResult<()> {
        if amount < Self::MIN_CHARGE || self.balance + amount > Self::MAX_BALANCE {
            return Err(VendError::invalid_charge(amount, self.balance));
        }
        self.balance += amount;
        debug_assert!(self.balance <= Self::MAX_BALANCE);
        Ok(())
    }

    /// Subtract `amount` from the balance.
    ///
    /// Fails with the shortfall reported when `amount` exceeds the balance;
    /// the balance is untouched on failure.
    pub fn pay(&mut self, amount: Yen) -> VendResult<()> {
        if amount > self.balance {
            return Err(VendError::insufficient_balance(amount, self.balance));
        }
        self.balance -= amount;
        Ok(())
    }

    /// Return a just-paid amount to the card.
    ///
    /// Compensation path only: the amount was paid from this card moments
    /// ago, so restoring it cannot exceed [`Self::MAX_BALANCE`]. Unlike
    /// [`Self::charge`], no minimum applies; a refund is not a charge.
    pub fn refund(&mut self, amount: Yen) {
        self.balance += amount;
        debug_assert!(self.balance <= Self::MAX_BALANCE);
    }
}
