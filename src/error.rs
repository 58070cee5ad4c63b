//! Error types for the geoquery library.
//!
//! Errors only arise while a [`RuleSet`](crate::analysis::rules::RuleSet) is
//! being built: reading configuration, parsing it and compiling patterns.
//! Analyzing a query never fails.
//!
//! # Examples
//!
//! ```
//! use geoquery::error::{GeoQueryError, Result};
//!
//! fn check_separators(separators: &str) -> Result<()> {
//!     if separators.is_empty() {
//!         return Err(GeoQueryError::config("token separators must not be empty"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_separators("").is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for geoquery operations.
#[derive(Error, Debug)]
pub enum GeoQueryError {
    /// I/O errors while reading rule sources
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configured pattern failed to compile
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Malformed or inconsistent rule configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis-related errors (rule construction, replacer setup)
    #[error("Analysis error: {0}")]
    Analysis(String),
}

/// Result type alias for operations that may fail with GeoQueryError.
pub type Result<T> = std::result::Result<T, GeoQueryError>;

impl GeoQueryError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        GeoQueryError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        GeoQueryError::Analysis(msg.into())
    }

    /// Create a configuration error that names the offending source.
    pub fn source_error<S: Into<String>>(source: &str, msg: S) -> Self {
        GeoQueryError::Config(format!("{source}: {}", msg.into()))
    }
}
