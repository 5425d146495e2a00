//! Operator-facing inbound ports consumed by CLI adapters.

pub mod account;
pub mod config;
pub mod port;
pub mod runtime;
