//! # Life OS Common Library
//!
//! Shared code for the Life OS tooling crates:
//! - Error and result types
//! - Bootstrap configuration loading and path resolution
//! - Atomic file output

pub mod atomic_write;
pub mod config;
pub mod error;

pub use atomic_write::write_atomic;
pub use error::{Error, Result};
