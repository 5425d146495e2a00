//! SQLite persistence adapters.
//!
//! Provides SQLite-backed implementations of every store port using
//! Diesel ORM.

pub mod banner;
pub mod catalog;
pub mod customer;
pub mod database;
pub mod order;
pub mod promotion;
pub mod settings;
pub mod staff;
