//! Session-scoped models for the console.

pub mod session;

pub use session::{CurrentAdmin, keys as session_keys};
