//! Discount fractions applied to the nightly rate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A fraction in `[0, 1)` taken off the nightly rate.
///
/// Reservations made directly carry [`Discount::NONE`]; reservations drawn
/// from a block carry the block's discount.
///
/// # Examples
///
/// ```
/// use hotel::Discount;
///
/// let discount = Discount::try_from(0.25).unwrap();
/// assert_eq!(discount.apply(200.0), 150.0);
///
/// assert!(Discount::try_from(1.0).is_err());
/// assert!(Discount::try_from(-0.1).is_err());
/// assert_eq!(Discount::default(), Discount::NONE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Discount(f64);

impl Discount {
    /// No discount.
    pub const NONE: Self = Self(0.0);

    /// Returns the fraction.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Applies the discount to a price.
    #[must_use]
    pub fn apply(self, price: f64) -> f64 {
        price * (1.0 - self.0)
    }
}

impl TryFrom<f64> for Discount {
    type Error = InvalidDiscountError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_finite() && (0.0..1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidDiscountError { value })
        }
    }
}

impl From<Discount> for f64 {
    fn from(discount: Discount) -> Self {
        discount.0
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0 * 100.0)
    }
}

/// Error type for discounts outside `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidDiscountError {
    /// The rejected value.
    pub value: f64,
}

impl fmt::Display for InvalidDiscountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "discount {} must be at least 0 and less than 1",
            self.value
        )
    }
}

impl std::error::Error for InvalidDiscountError {}
