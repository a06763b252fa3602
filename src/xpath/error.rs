//! Error types for path compilation and evaluation.

use std::fmt;

/// Errors that can occur while compiling or evaluating a path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlPathError {
    /// Malformed path string, reported at compile time and never during
    /// evaluation.
    Compile { component: String, message: String },
    /// `first` (or `first_create`) resolved no node and missing nodes were
    /// not allowed.
    NotFound { path: String },
    /// Creation was requested but the remaining segments cannot be
    /// materialized.
    Create { message: String },
}

impl fmt::Display for XmlPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XmlPathError::Compile { component, message } => {
                write!(f, "Invalid path component '{}': {}", component, message)
            }
            XmlPathError::NotFound { path } => write!(f, "No such path: {}", path),
            XmlPathError::Create { message } => write!(f, "Cannot create path: {}", message),
        }
    }
}

impl std::error::Error for XmlPathError {}
