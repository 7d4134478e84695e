//! # estore_core
//!
//! Core domain logic for eStore: token issuer settings and catalog
//! categories.

pub mod auth;
pub mod catalog;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
