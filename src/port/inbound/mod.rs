//! Inbound (driving) ports consumed by inbound adapters.
//!
//! - [`operator`]: Operator-facing use cases for serving, migrations,
//!   admin provisioning and configuration

pub mod operator;
