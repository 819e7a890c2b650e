//! PKart admin console library.
//!
//! Server-rendered console for the PKart product catalog. Products, admin
//! records and ordering all live in the remote catalog service; this crate
//! renders them with Askama templates and htmx fragments and relays edits.
//!
//! # Security
//!
//! Admin credentials are checked on the server. The browser only ever holds
//! an http-only session cookie, never the admin records.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

#[cfg(test)]
mod testing;
