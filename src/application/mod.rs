//! Application services (use cases).
//!
//! These services validate requests with domain rules and coordinate the
//! outbound stores to implement the dashboard and storefront use cases.

pub mod account;
pub mod auth;
pub mod banner;
pub mod catalog;
pub mod customer;
pub mod dashboard;
pub mod media;
pub mod order;
pub mod promotion;
pub mod session;
pub mod settings;
pub mod staff;
pub mod state;
