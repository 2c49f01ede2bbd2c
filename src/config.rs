use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{GitVersionError, Result};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "gitversion.toml";

fn default_path() -> String {
    "VERSION".to_string()
}

fn default_name() -> String {
    "VERSION".to_string()
}

/// Configuration for a version plugin instance.
///
/// Only the three keys below are recognised; anything else in a config file
/// is rejected when loading.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path of the version artifact, relative to the output directory
    #[serde(default = "default_path")]
    pub path: String,

    /// Name of the global variable set by the injected script tag
    #[serde(default = "default_name")]
    pub name: String,

    /// Manual version override; empty means "compute it from git"
    #[serde(default)]
    pub version: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            path: default_path(),
            name: default_name(),
            version: String::new(),
        }
    }
}

impl Config {
    /// Checks the constraints serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.path.is_empty() {
            return Err(GitVersionError::config("`path` must not be empty"));
        }
        if self.name.is_empty() {
            return Err(GitVersionError::config("`name` must not be empty"));
        }
        Ok(())
    }

    /// The manual override, if one is configured.
    pub fn override_version(&self) -> Option<&str> {
        if self.version.is_empty() {
            None
        } else {
            Some(self.version.as_str())
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Same as [load_config_in] with the current directory.
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    load_config_in(Path::new("."), config_path)
}

/// Loads configuration for a build rooted at `dir`.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitversion.toml` in `dir`
/// 3. `.gitversion.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// The loaded configuration is validated before being returned.
pub fn load_config_in(dir: &Path, config_path: Option<&str>) -> Result<Config> {
    let local = dir.join(CONFIG_FILE_NAME);
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if local.exists() {
        fs::read_to_string(local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config = parse_config(&config_str)?;
    Ok(config)
}

/// Parses and validates a TOML configuration document.
pub fn parse_config(source: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(source).map_err(|e| GitVersionError::config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.path, "VERSION");
        assert_eq!(config.name, "VERSION");
        assert_eq!(config.override_version(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_document_fills_defaults() {
        let config = parse_config("name = \"APP_VERSION\"\n").unwrap();
        assert_eq!(config.name, "APP_VERSION");
        assert_eq!(config.path, "VERSION");
        assert_eq!(config.version, "");
    }

    #[test]
    fn test_parse_empty_document() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = parse_config("branch = \"main\"\n").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_empty_path_rejected() {
        let err = parse_config("path = \"\"\n").unwrap_err();
        assert!(err.to_string().contains("`path`"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let config = Config {
            name: String::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_override_version() {
        let config = parse_config("version = \"9.9.9\"\n").unwrap();
        assert_eq!(config.override_version(), Some("9.9.9"));
    }
}
