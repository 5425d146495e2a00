//! Unified operator capability surface for inbound adapters.

use super::account::AccountOperator;
use super::config::ConfigurationOperator;
use super::runtime::RuntimeOperator;

/// Unified operator capability surface consumed by inbound adapters.
pub trait OperatorPort: AccountOperator + ConfigurationOperator + RuntimeOperator {}

impl<T> OperatorPort for T where T: AccountOperator + ConfigurationOperator + RuntimeOperator {}
