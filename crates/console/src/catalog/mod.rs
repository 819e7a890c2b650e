//! Remote catalog service.
//!
//! The catalog service owns products and admin records and exposes them as
//! JSON over HTTP:
//!
//! ```text
//! GET    /admins              - admin credential records
//! GET    /products?sort=1..4  - products, ordered by the service
//! POST   /products            - create a product
//! PUT    /products/{id}       - update a product
//! DELETE /products/{id}       - delete a product
//! ```
//!
//! Handlers talk to it through the [`CatalogApi`] trait so route tests can
//! substitute a recording implementation.

mod client;
mod types;

pub use client::HttpCatalogClient;
pub use types::AdminCredential;

use async_trait::async_trait;
use pkart_core::{Product, ProductDraft, ProductId, SortKey};
use thiserror::Error;

/// Errors that can occur when calling the catalog service.
///
/// The `Display` text is what the product list shows when a fetch fails.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Request could not be sent or the connection failed.
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status.
    #[error("Request failed with status code {status}")]
    Api { status: u16, message: String },

    /// Record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Response body was not the expected JSON.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Endpoint URL could not be built from the configured base URL.
    #[error("Invalid catalog URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Operations the console needs from the catalog service.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch every admin credential record.
    async fn list_admins(&self) -> Result<Vec<AdminCredential>, CatalogError>;

    /// Fetch all products, ordered by the service according to `sort`.
    async fn list_products(&self, sort: SortKey) -> Result<Vec<Product>, CatalogError>;

    /// Delete one product.
    async fn delete_product(&self, id: ProductId) -> Result<(), CatalogError>;

    /// Create a product from a validated draft.
    async fn create_product(&self, draft: &ProductDraft) -> Result<(), CatalogError>;

    /// Replace the fields of an existing product.
    async fn update_product(&self, id: ProductId, draft: &ProductDraft)
    -> Result<(), CatalogError>;
}
