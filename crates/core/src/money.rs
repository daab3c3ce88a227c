//! Money as a value object: whole yen, no locale formatting.

use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// An amount of money in whole yen.
///
/// Unsigned by construction, so the "never negative" half of every balance
/// invariant holds structurally. Callers check upper bounds before adding
/// and sufficiency before subtracting.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Yen(u32);

impl Yen {
    pub const ZERO: Yen = Yen(0);

    pub const fn new(amount: u32) -> Self {
        Self(amount)
    }

    pub const fn get(&self) -> u32 {
        self.0
    }

    pub const fn saturating_sub(self, rhs: Yen) -> Yen {
        Yen(self.0.saturating_sub(rhs.0))
    }
}

impl Add for Yen {
    type Output = Yen;

    fn add(self, rhs: Yen) -> Yen {
        Yen(self.0 + rhs.0)
    }
}

impl AddAssign for Yen {
    fn add_assign(&mut self, rhs: Yen) {
        self.0 += rhs.0;
    }
}

impl Sub for Yen {
    type Output = Yen;

    fn sub(self, rhs: Yen) -> Yen {
        Yen(self.0 - rhs.0)
    }
}

impl SubAssign for Yen {
    fn sub_assign(&mut self, rhs: Yen) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Yen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "¥{}", self.0)
    }
}

impl ValueObject for Yen {}
