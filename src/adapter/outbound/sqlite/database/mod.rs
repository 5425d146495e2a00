//! SQLite database modules.
//!
//! Provides database connection management, schema definitions, Diesel
//! model types and column encodings for SQLite persistence.

pub mod connection;
pub mod model;
pub mod schema;
pub mod value;
