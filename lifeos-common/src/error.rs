//! Errors raised while locating, reading or writing Life OS backup files

use thiserror::Error;

/// Result alias used by the shared config and file helpers
pub type Result<T> = std::result::Result<T, Error>;

/// Failures shared by the Life OS tools
#[derive(Error, Debug)]
pub enum Error {
    /// Reading the backup or config, or writing the import document, failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file unreadable or not valid TOML
    #[error("Configuration error: {0}")]
    Config(String),

    /// An explicitly named file (such as `--config`) does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// A path that cannot be used as an output target
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
