//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`config`] - Canonical test configuration rooted in a scratch directory.
//! - [`domain`] - Builders for categories, menu items, customers and carts.

pub mod config;
pub mod domain;
