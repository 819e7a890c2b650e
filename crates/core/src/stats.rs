//! Catalog statistics for the home tab.

use rust_decimal::Decimal;

use crate::types::{Price, Product};

/// Summary figures over the current product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub product_count: usize,
    pub lowest: Price,
    pub highest: Price,
    pub average: Price,
}

impl CatalogStats {
    /// Compute statistics; `None` for an empty catalog.
    #[must_use]
    pub fn from_products(products: &[Product]) -> Option<Self> {
        let lowest = products.iter().map(|p| p.price).min()?;
        let highest = products.iter().map(|p| p.price).max()?;
        let total: Decimal = products.iter().map(|p| p.price.amount()).sum();
        let average = (total / Decimal::from(products.len())).round_dp(2);

        Some(Self {
            product_count: products.len(),
            lowest,
            highest,
            average: Price::new(average),
        })
    }
}
