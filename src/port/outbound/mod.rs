//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts cover table storage, object storage for uploads and
//! password hashing.

pub mod credential;
pub mod media;
pub mod store;
