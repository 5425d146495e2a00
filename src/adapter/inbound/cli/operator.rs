//! File access shared by operator-backed CLI handlers.

use std::path::Path;

use crate::error::{ConfigError, Result};

/// Load config TOML from disk for operator-facing use-cases.
pub fn read_config_toml(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?)
}
