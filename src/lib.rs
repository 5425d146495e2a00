//! area51 - restaurant ordering backend.
//!
//! Serves a public storefront (menu, offers, banners, customer accounts and
//! checkout) and an admin API (catalog, staff, customers, orders,
//! promotions, banners, settings and a dashboard) over one SQLite database.
//!
//! # Architecture
//!
//! - [`domain`] - Entities, validation and pricing rules. No I/O.
//! - [`port`] - Traits the application depends on (stores, media, hashing)
//!   and the operator surface the CLI drives.
//! - [`application`] - Use-case services composed from ports.
//! - [`adapter`] - SQLite stores, filesystem media, bcrypt, the axum HTTP
//!   API and the clap CLI.
//! - [`infrastructure`] - Configuration and the composition root.
//!
//! # Features
//!
//! - `testkit` - Builders and fixtures for integration tests

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
