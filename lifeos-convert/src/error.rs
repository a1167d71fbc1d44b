//! Error types for lifeos-convert
//!
//! Only fatal conditions are errors. Rows that cannot be mapped (bad date,
//! unknown habit, too few columns) are dropped by the mappers instead.

use crate::section::Section;
use std::path::PathBuf;
use thiserror::Error;

/// Conversion error type
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input CSV does not exist
    #[error("CSV file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Non-empty numeric field that does not parse
    #[error("{section} line {line}, column {column}: invalid number {value:?}")]
    InvalidNumber {
        section: Section,
        line: usize,
        column: usize,
        value: String,
    },

    /// JSON serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// lifeos-common error
    #[error(transparent)]
    Common(#[from] lifeos_common::Error),
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
