//! Type-safe price representation using decimal arithmetic.
//!
//! Prices arrive from the catalog as plain JSON numbers. They are held as
//! [`rust_decimal::Decimal`] so that cart totals stay exact at currency
//! scale, and always display with two decimal places.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in the catalog's display currency (rupees).
///
/// Wraps a `Decimal` so arithmetic over `price * quantity` sums is exact.
/// The catalog treats `compare_at_price` the same way; neither value is
/// validated against the other - both are opaque display numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// The zero price, the total of an empty cart.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply this price by a line quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    /// Format for display with a fixed two-decimal scale (e.g., `₹300.00`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{:.2}", self.0)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn price(s: &str) -> Price {
        Price::new(s.parse().unwrap())
    }

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(price("300").to_string(), "₹300.00");
        assert_eq!(price("19.9").to_string(), "₹19.90");
        assert_eq!(price("0").to_string(), "₹0.00");
    }

    #[test]
    fn test_times_quantity() {
        assert_eq!(price("100").times(2), price("200"));
        assert_eq!(price("19.99").times(3), price("59.97"));
        assert_eq!(price("5").times(0), Price::ZERO);
    }

    #[test]
    fn test_sum_is_exact_at_currency_scale() {
        // 0.1 + 0.2 is the classic float failure case
        let total: Price = [price("0.1"), price("0.2")].into_iter().sum();
        assert_eq!(total, price("0.3"));
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: Price = std::iter::empty::<Price>().sum();
        assert_eq!(total, Price::ZERO);
    }

    #[test]
    fn test_deserializes_from_json_number() {
        let p: Price = serde_json::from_str("300.0").unwrap();
        assert_eq!(p, price("300.0"));
        let p: Price = serde_json::from_str("649").unwrap();
        assert_eq!(p, price("649"));
    }
}
