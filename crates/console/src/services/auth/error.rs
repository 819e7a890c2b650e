//! Admin authentication error types.

use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors that can occur while signing an admin in.
#[derive(Debug, Error)]
pub enum AdminAuthError {
    /// Email field does not hold an email address.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] pkart_core::EmailError),

    /// No admin record matched the email and password.
    #[error("no matching admin record")]
    NoMatch,

    /// Admin records could not be fetched.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
