//! Business logic services for the console.
//!
//! # Services
//!
//! - `auth` - Admin login against the catalog's admin records
//! - `list_registry` - Fetch sequencers for mounted product lists

pub mod auth;
pub mod list_registry;

pub use auth::{AdminAuthError, AdminAuthService};
pub use list_registry::ListRegistry;
