//! lifeos-convert library
//!
//! Converts a sectioned Life OS CSV backup into the JSON import document.
//! The binary wraps [`convert_file`]; integration tests drive the library
//! directly.

pub mod converter;
pub mod csv_row;
pub mod dates;
pub mod error;
pub mod frequency;
pub mod mappers;
pub mod models;
pub mod section;
pub mod summary;

pub use crate::converter::{convert_file, convert_str, Converter};
pub use crate::error::{ConvertError, ConvertResult};
pub use crate::models::LifeOsExport;
pub use crate::section::Section;
pub use crate::summary::ConversionSummary;

/// Name used for the default config file (`<config_dir>/lifeos/lifeos-convert.toml`)
pub const MODULE_NAME: &str = "lifeos-convert";
