//! Product records as exchanged with the remote catalog service.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// One product record returned by the catalog service.
///
/// The console only ever holds a transient copy: the catalog service owns the
/// record and every change goes through an explicit create/update/delete call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    #[serde(rename = "product_id")]
    pub id: ProductId,
    /// Display name.
    #[serde(rename = "product_name")]
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image reference (absolute URL or a path served by the catalog).
    pub image_url: String,
}

/// Errors raised while validating a [`ProductDraft`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductDraftError {
    /// Name is blank.
    #[error("product name cannot be empty")]
    EmptyName,
    /// Name exceeds the maximum length.
    #[error("product name must be at most {max} characters")]
    NameTooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// Price is not a decimal number.
    #[error("price must be a number, got '{0}'")]
    InvalidPrice(String),
    /// Price is below zero.
    #[error("price cannot be negative")]
    NegativePrice,
    /// Image reference is blank.
    #[error("image URL cannot be empty")]
    EmptyImageUrl,
}

/// Product fields submitted by the add and update forms.
///
/// Serializes with the catalog service's field names, so the same value is
/// the request body for both create and update calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDraft {
    /// Display name.
    #[serde(rename = "product_name")]
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image reference.
    pub image_url: String,
}

impl ProductDraft {
    /// Maximum length of a product name.
    pub const MAX_NAME_LENGTH: usize = 200;

    /// Validate raw form input into a draft.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure: blank or over-long name,
    /// unparseable or negative price, blank image URL.
    pub fn parse(name: &str, price: &str, image_url: &str) -> Result<Self, ProductDraftError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProductDraftError::EmptyName);
        }
        if name.chars().count() > Self::MAX_NAME_LENGTH {
            return Err(ProductDraftError::NameTooLong {
                max: Self::MAX_NAME_LENGTH,
            });
        }

        let raw_price = price.trim();
        let amount = Decimal::from_str(raw_price)
            .map_err(|_| ProductDraftError::InvalidPrice(raw_price.to_string()))?;
        let price = Price::new(amount);
        if price.is_negative() {
            return Err(ProductDraftError::NegativePrice);
        }

        let image_url = image_url.trim();
        if image_url.is_empty() {
            return Err(ProductDraftError::EmptyImageUrl);
        }

        Ok(Self {
            name: name.to_string(),
            price,
            image_url: image_url.to_string(),
        })
    }
}
