//! Session-related types for admin authentication.

/// Session-stored admin identity.
///
/// Email and optional display name of the admin who signed in; no
/// credential material is kept in the session.
pub type CurrentAdmin = pkart_core::AdminIdentity;

/// Session keys for console data.
pub mod keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
