//! PKart Core - Shared types and console state.
//!
//! This crate provides the types used by the PKart admin console:
//! - `console` - The server-rendered admin console (binary + library)
//! - `integration-tests` - End-to-end tests against a fake catalog service
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no I/O,
//! no HTTP clients. Everything here can be unit tested without a runtime.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, emails, and product records
//! - [`console`] - UI state model: tabs, sort keys, shell and product list state
//! - [`stats`] - Catalog statistics shown on the home tab

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod console;
pub mod stats;
pub mod types;

pub use console::*;
pub use stats::CatalogStats;
pub use types::*;
