//! Operator implementations for inbound adapters.

pub mod account;
pub mod config;
pub mod entry;
pub mod runtime;
