//! Admin authentication service.
//!
//! The catalog service publishes admin records with plaintext passwords.
//! The console fetches them server-side on every login attempt and scans for
//! an exact email + password match; the browser only ever sees the session
//! cookie that results.

mod error;

pub use error::AdminAuthError;

use pkart_core::{AdminIdentity, Email};

use crate::catalog::CatalogApi;

/// Admin authentication service.
pub struct AdminAuthService<'a> {
    catalog: &'a dyn CatalogApi,
}

impl<'a> AdminAuthService<'a> {
    /// Create a new admin authentication service.
    #[must_use]
    pub const fn new(catalog: &'a dyn CatalogApi) -> Self {
        Self { catalog }
    }

    /// Verify login form input against the catalog's admin records.
    ///
    /// Fetches the full admin list and returns the identity of the first
    /// record whose email and password both match exactly.
    ///
    /// # Errors
    ///
    /// Returns `AdminAuthError::InvalidEmail` for input that is not an email
    /// (no remote call is made), `AdminAuthError::Catalog` if the admin list
    /// cannot be fetched, and `AdminAuthError::NoMatch` otherwise.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AdminIdentity, AdminAuthError> {
        let email = Email::parse(email)?;
        let admins = self.catalog.list_admins().await?;

        admins
            .into_iter()
            .find(|admin| admin.matches(email.as_str(), password))
            .map(|admin| AdminIdentity {
                email,
                name: admin.name,
            })
            .ok_or(AdminAuthError::NoMatch)
    }
}
