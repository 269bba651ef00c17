mod config;

pub use config::{CatalogConfig, ClockConfig, Config, DisplayConfig};

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns `~/.config/roteiro[-dev]/` based on ROTEIRO_ENV.
///
/// Set ROTEIRO_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?.join(".config");

    let env = std::env::var("ROTEIRO_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("roteiro-dev")
    } else {
        base_dir.join("roteiro")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
