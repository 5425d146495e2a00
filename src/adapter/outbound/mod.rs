//! Outbound adapters (driven side).

pub mod credential;
pub mod sqlite;
pub mod storage;
