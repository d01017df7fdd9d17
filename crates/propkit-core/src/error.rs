//! Error types for propkit.
//!
//! This module defines the error hierarchy used throughout the crate.
//! All errors implement the standard `std::error::Error` trait via
//! `thiserror`.
//!
//! Resource and parse failures are not recoverable at this crate's scope:
//! they are returned to the caller, which decides how to report them.
//! A missing *key* is never an error (see [`crate::lookup::get_value`]).
//!
//! # Example
//!
//! ```
//! use propkit_core::{PropkitError, Result};
//!
//! fn require_name(name: &str) -> Result<&str> {
//!     if name.is_empty() {
//!         return Err(PropkitError::invalid_resource_name(
//!             "",
//!             "resource name cannot be empty",
//!         ));
//!     }
//!     Ok(name)
//! }
//!
//! match require_name("config/application.properties") {
//!     Ok(name) => println!("Resolving {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use thiserror::Error;

/// Main error type for propkit operations.
///
/// # Example
///
/// ```
/// use propkit_core::PropkitError;
///
/// let error = PropkitError::resource_not_found("config/app.properties", "embedded resources");
/// assert!(error.is_not_found());
/// println!("{}", error); // "Resource 'config/app.properties' not found in embedded resources"
/// ```
#[derive(Debug, Error)]
pub enum PropkitError {
    /// The named resource does not exist in the resource set.
    #[error("Resource '{name}' not found in {location}")]
    ResourceNotFound {
        /// Logical name that was requested
        name: String,
        /// Where the lookup happened (embedded set, directory path)
        location: String,
    },

    /// A logical resource name is malformed.
    #[error("Invalid resource name '{name}': {reason}")]
    InvalidResourceName {
        /// The name provided
        name: String,
        /// Why it's invalid
        reason: String,
    },

    /// Content is not well-formed properties syntax.
    #[error("Failed to parse '{source_name}' at line {line}: {message}")]
    ParseError {
        /// Resource the content came from
        source_name: String,
        /// 1-based line where the offending logical line starts
        line: usize,
        /// Description of the parse error
        message: String,
    },

    /// Serializing a map for output failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl PropkitError {
    // ============================================
    // Convenience constructors
    // ============================================

    /// Creates a ResourceNotFound error.
    pub fn resource_not_found(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self::ResourceNotFound {
            name: name.into(),
            location: location.into(),
        }
    }

    /// Creates an InvalidResourceName error.
    pub fn invalid_resource_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResourceName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Creates a ParseError.
    ///
    /// # Example
    ///
    /// ```
    /// use propkit_core::PropkitError;
    ///
    /// let error = PropkitError::parse_error("app.properties", 3, "malformed \\uxxxx encoding");
    /// assert!(error.is_parse_error());
    /// assert!(error.to_string().contains("line 3"));
    /// ```
    pub fn parse_error(source: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            source_name: source.into(),
            line,
            message: message.into(),
        }
    }

    /// Creates a Serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Rebinds a parse error to the resource it was read from.
    ///
    /// Parsers only see text, so they report a generic source name; the
    /// loader knows the real one. Other variants pass through unchanged.
    pub fn with_source_name(self, name: impl Into<String>) -> Self {
        match self {
            Self::ParseError { line, message, .. } => Self::ParseError {
                source_name: name.into(),
                line,
                message,
            },
            other => other,
        }
    }

    // ============================================
    // Query methods
    // ============================================

    /// Returns true if this error indicates the resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound { .. })
    }

    /// Returns true if this is a parse error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::ParseError { .. })
    }

    /// Returns true if the resource name was rejected.
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, Self::InvalidResourceName { .. })
    }

    /// Returns true if this is an I/O error.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

/// Type alias for Results with PropkitError.
pub type Result<T> = std::result::Result<T, PropkitError>;
