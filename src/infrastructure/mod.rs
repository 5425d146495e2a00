//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic: configuration loading and composition of the runtime.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root wiring stores and services
//! - [`config`] - Configuration loading and validation
//! - [`operator`] - Operator use-cases behind the CLI

pub mod bootstrap;
pub mod config;
pub mod operator;
