//! Error types for cursor-pager
//!
//! This module defines the error hierarchy for the crate.
//! Fetch *failures* reported by a fetcher are not errors here: they become
//! an `Error` pagination state. Everything in this enum is a fault that
//! propagates to the caller of a controller operation.

use thiserror::Error;

/// The main error type for cursor-pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// A configuration value is out of its allowed range
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue {
        /// Offending field
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// Malformed YAML config
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Malformed JSON config or input
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Fetcher Faults
    // ============================================================================
    /// The fetcher could not produce a page result at all
    #[error("Page fetcher fault: {message}")]
    Fetcher {
        /// Fault description
        message: String,
    },

    // ============================================================================
    // Item Mutation Errors
    // ============================================================================
    /// Item mutation past the end of the loaded items
    #[error("Index {index} out of range for list of length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of loaded items
        len: usize,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// Underlying I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A config or input file does not exist
    #[error("File not found: {path}")]
    FileNotFound {
        /// Missing path
        path: String,
    },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Error with added context
    #[error("{0}")]
    Other(String),

    /// Fault raised by a fetcher through `anyhow`
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a fetcher fault
    pub fn fetcher(message: impl Into<String>) -> Self {
        Self::Fetcher {
            message: message.into(),
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Check if this error was raised by the page fetcher itself
    pub fn is_fault(&self) -> bool {
        matches!(self, Error::Fetcher { .. } | Error::Anyhow(_))
    }
}

/// Result type alias for cursor-pager
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_value("page_limit", "must be greater than 0");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'page_limit': must be greater than 0"
        );

        let err = Error::index_out_of_range(5, 2);
        assert_eq!(err.to_string(), "Index 5 out of range for list of length 2");

        let err = Error::fetcher("connection reset");
        assert_eq!(err.to_string(), "Page fetcher fault: connection reset");
    }

    #[test]
    fn test_is_fault() {
        assert!(Error::fetcher("boom").is_fault());
        assert!(Error::from(anyhow::anyhow!("boom")).is_fault());

        assert!(!Error::index_out_of_range(0, 0).is_fault());
        assert!(!Error::invalid_value("page_limit", "zero").is_fault());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::fetcher("inner"));
        let with_context = result.with_context(|| "outer".to_string());
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Page fetcher fault: inner"));
    }
}
