//! Catalog price using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product price in rupees.
///
/// The catalog service sends prices as JSON numbers; they are read into a
/// [`Decimal`] so that statistics and display never go through binary
/// floating point.
///
/// ```
/// use pkart_core::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Decimal::new(49_950, 2));
/// assert_eq!(price.to_string(), "499.50 /RS");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// Currency suffix used throughout the console.
    pub const SUFFIX: &'static str = "/RS";

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.0, Self::SUFFIX)
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

    #[test]
    fn test_deserialize_from_json_number() {
        let price: Price = serde_json::from_str("1299.5").unwrap();
        assert_eq!(price.amount(), Decimal::new(12_995, 1));
        assert_eq!(price.to_string(), "1299.50 /RS");
    }

    #[test]
    fn test_deserialize_integer() {
        let price: Price = serde_json::from_str("250").unwrap();
        assert_eq!(price.to_string(), "250.00 /RS");
    }

    #[test]
    fn test_is_negative() {
        assert!(Price::new(Decimal::new(-1, 0)).is_negative());
        assert!(!Price::new(Decimal::ZERO).is_negative());
        assert!(!Price::new(Decimal::new(5, 0)).is_negative());
    }
}
