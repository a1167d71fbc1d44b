//! Bootstrap configuration loading and path resolution
//!
//! Configuration is optional. Every value has a compiled default, and a
//! missing config file at the default location is not an error.
//!
//! # Resolution Priority (per value)
//!
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "LIFEOS_CONFIG";

/// Environment variable overriding the CSV input path
pub const CSV_PATH_ENV_VAR: &str = "LIFEOS_CSV_PATH";

/// Environment variable overriding the JSON output path
pub const JSON_PATH_ENV_VAR: &str = "LIFEOS_JSON_PATH";

/// Compiled default for the CSV input path
pub const DEFAULT_CSV_PATH: &str = "backup.csv";

/// Compiled default for the JSON output path
pub const DEFAULT_JSON_PATH: &str = "backup.json";

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// CSV backup to read (optional)
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// JSON document to write (optional)
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl TomlConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration from an explicit file
    ///
    /// The file must exist and parse.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(format!("Config file {}", path.display())));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file {:?}: {}", path, e)))?;
        Self::from_toml_str(&content)
    }
}

/// Default config file location for a tool: `<config_dir>/lifeos/<module_name>.toml`
pub fn default_config_path(module_name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("lifeos").join(format!("{}.toml", module_name)))
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// File named on the command line
    Explicit(PathBuf),
    /// File named by `LIFEOS_CONFIG`
    Environment(PathBuf),
    /// File found at the default location
    DefaultLocation(PathBuf),
    /// No file; compiled defaults only
    CompiledDefaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(path) => write!(f, "{} (--config)", path.display()),
            ConfigSource::Environment(path) => {
                write!(f, "{} ({})", path.display(), CONFIG_ENV_VAR)
            }
            ConfigSource::DefaultLocation(path) => write!(f, "{}", path.display()),
            ConfigSource::CompiledDefaults => f.write_str("compiled defaults"),
        }
    }
}

/// Configuration together with its origin
///
/// Loading happens before the tracing subscriber exists (the log level is
/// part of the config), so the caller logs `source` once logging is up.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: TomlConfig,
    pub source: ConfigSource,
}

/// Locate and load configuration for a tool
///
/// An explicit path (CLI flag, then `LIFEOS_CONFIG`) must exist. Without one,
/// the default location is tried and compiled defaults are used when absent.
pub fn load_config(explicit: Option<&Path>, module_name: &str) -> Result<LoadedConfig> {
    let (config, source) = if let Some(path) = explicit {
        (TomlConfig::load(path)?, ConfigSource::Explicit(path.to_path_buf()))
    } else if let Some(path) = non_empty_env(CONFIG_ENV_VAR).map(PathBuf::from) {
        (TomlConfig::load(&path)?, ConfigSource::Environment(path))
    } else {
        match default_config_path(module_name) {
            Some(path) if path.exists() => {
                (TomlConfig::load(&path)?, ConfigSource::DefaultLocation(path))
            }
            _ => (TomlConfig::default(), ConfigSource::CompiledDefaults),
        }
    };

    Ok(LoadedConfig { config, source })
}

/// Resolve a path from CLI argument, environment, TOML value, then default
pub fn resolve_path(
    cli_arg: Option<&Path>,
    env_var_name: &str,
    toml_value: Option<&Path>,
    default: &str,
) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Some(path) = non_empty_env(env_var_name) {
        return PathBuf::from(path);
    }

    // Priority 3: TOML config file
    if let Some(path) = toml_value {
        return path.to_path_buf();
    }

    // Priority 4: Compiled default
    PathBuf::from(default)
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
