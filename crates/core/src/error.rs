//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;
use crate::money::Yen;

/// Result type used across the domain layer.
pub type VendResult<T> = Result<T, VendError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures. Every variant is
/// recoverable at the menu boundary; none of them terminates the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VendError {
    /// A repository lookup referenced an unregistered product id.
    #[error("product {product_id} is not registered")]
    ProductNotFound { product_id: ProductId },

    /// The product's on-hand queue is empty.
    #[error("{brand} is sold out")]
    SoldOut { brand: String },

    /// A charge below the minimum, or one that would push the balance past
    /// its cap.
    #[error("cannot charge {amount} (current balance: {balance})")]
    InvalidChargeAmount { amount: Yen, balance: Yen },

    /// A payment larger than the card balance.
    #[error(
        "insufficient balance: {required} required, {balance} on card (short {})",
        Yen::new(.required.get().saturating_sub(.balance.get()))
    )]
    InsufficientBalance { required: Yen, balance: Yen },
}

impl VendError {
    pub fn product_not_found(product_id: ProductId) -> Self {
        Self::ProductNotFound { product_id }
    }

    pub fn sold_out(brand: impl Into<String>) -> Self {
        Self::SoldOut {
            brand: brand.into(),
        }
    }

    pub fn invalid_charge(amount: Yen, balance: Yen) -> Self {
        Self::InvalidChargeAmount { amount, balance }
    }

    pub fn insufficient_balance(required: Yen, balance: Yen) -> Self {
        Self::InsufficientBalance { required, balance }
    }
}
