//! Whole-rupee price type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A price in whole rupees.
///
/// The storefront trades only in INR and every catalog price is a whole
/// rupee, so this is an integer newtype. Payment links want the amount as a
/// plain decimal string with no decimal point, which falls straight out of
/// this representation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u32);

impl Price {
    /// Create a price from a whole-rupee amount.
    #[must_use]
    pub const fn new(rupees: u32) -> Self {
        Self(rupees)
    }

    /// The amount in whole rupees.
    #[must_use]
    pub const fn as_rupees(self) -> u32 {
        self.0
    }

    /// Line total for `qty` units, saturating at `u32::MAX`.
    #[must_use]
    pub const fn line_total(self, qty: u32) -> u32 {
        self.0.saturating_mul(qty)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}

impl From<u32> for Price {
    fn from(rupees: u32) -> Self {
        Self(rupees)
    }
}

impl From<Price> for u32 {
    fn from(price: Price) -> Self {
        price.0
    }
}
