//! JSON HTTP API for the dashboard and the storefront.

pub mod error;
pub mod extract;
pub mod handler;
pub mod response;
pub mod router;
pub mod server;
