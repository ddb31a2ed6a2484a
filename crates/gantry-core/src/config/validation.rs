//! Configuration validation

use super::types::Config;
use crate::error::{ConfigError, Result};

/// Validate a loaded configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.scripts.dir.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "scripts.dir".to_string(),
            message: "must not be empty".to_string(),
        }
        .into());
    }

    if config.runner.shell.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "runner.shell".to_string(),
            message: "must not be empty".to_string(),
        }
        .into());
    }

    Ok(())
}
