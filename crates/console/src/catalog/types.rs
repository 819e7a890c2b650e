//! Wire types specific to the catalog service.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// One admin record as returned by `GET /admins`.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone, Deserialize)]
pub struct AdminCredential {
    #[serde(rename = "admin_email")]
    pub email: String,
    #[serde(rename = "admin_password")]
    pub password: SecretString,
    #[serde(rename = "admin_name", default)]
    pub name: Option<String>,
}

impl AdminCredential {
    /// Exact, case-sensitive comparison against login form input.
    #[must_use]
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password.expose_secret() == password
    }
}

impl std::fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredential")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .finish()
    }
}
