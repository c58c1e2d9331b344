//! Configuration file handling for yares.
//!
//! Loads configuration from `~/.config/yares/config.toml` or a custom path.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file structure for yares.
/// Loaded from ~/.config/yares/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct DefaultsConfig {
    #[serde(default = "default_base_resolution")]
    pub base_resolution: u32,
    #[serde(default)]
    pub overextend: bool,
    #[serde(default)]
    pub constant_resolution: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            base_resolution: default_base_resolution(),
            overextend: false,
            constant_resolution: false,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CatalogConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_base_resolution() -> u32 {
    512
}

/// Commented file written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# yares configuration

[defaults]
# Base resolution in pixels (512-8192)
base_resolution = 512
# Let one side exceed the base resolution so the other stays exactly at it
overextend = false
# Keep the pixel count near base_resolution^2 (advanced selector only)
constant_resolution = false

[catalog]
# Ratio label file, one label per line (default: ~/.config/yares/ratios.txt)
# path = "/path/to/ratios.txt"
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Write the commented default config.
    /// Refuses to overwrite an existing file.
    pub fn init(path: &Path) -> Result<(), ConfigError> {
        if path.exists() {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }

        let io_error = |e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_error)?;
            }
        }
        std::fs::write(path, DEFAULT_CONFIG).map_err(io_error)?;
        Ok(())
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(ConfigError::SerializeError)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    SerializeError(toml::ser::Error),
    AlreadyExists {
        path: PathBuf,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::SerializeError(e) => write!(f, "Failed to render config: {}", e),
            ConfigError::AlreadyExists { path } => {
                write!(
                    f,
                    "Config file already exists: {}\nUse 'yares config show' to view current settings.",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::SerializeError(e) => Some(e),
            ConfigError::AlreadyExists { .. } => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("yares")
        .join("config.toml")
}
