//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for Gantry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Version of the config schema
    #[serde(rename = "$schema")]
    pub schema: Option<String>,

    /// Project name
    pub name: Option<String>,

    /// Script tree configuration
    pub scripts: ScriptsConfig,

    /// Runner configuration
    pub runner: RunnerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: None,
            name: None,
            scripts: ScriptsConfig::default(),
            runner: RunnerConfig::default(),
        }
    }
}

/// Location of the external CI script tree
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptsConfig {
    /// Directory holding the scripts tasks shell out to
    pub dir: PathBuf,
}

impl Default for ScriptsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("scripts/ci"),
        }
    }
}

/// Runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Shell used to interpret task command strings
    pub shell: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            shell: "sh".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scripts.dir, PathBuf::from("scripts/ci"));
        assert_eq!(config.runner.shell, "sh");
        assert!(config.name.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[scripts]\ndir = \"ops/ci\"\n").unwrap();
        assert_eq!(config.scripts.dir, PathBuf::from("ops/ci"));
        assert_eq!(config.runner.shell, "sh");
    }
}
