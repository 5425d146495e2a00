//! CLI module graph.

pub mod admin;
pub mod command;
pub mod config;
pub mod migrate;
pub mod operator;
pub mod output;
pub mod run;
pub mod serve;
