//! Unified error types for agent-dashboard.
//!
//! The dashboard has almost no failure surface: the only domain error is
//! asking for a page that does not exist. Configuration and terminal IO
//! errors are wrapped here so library callers get one error type.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for agent-dashboard operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DashboardError {
    /// A page identifier outside the fixed set was requested
    #[error("Unknown page '{id}' (expected one of: {expected})")]
    UnknownPage { id: String, expected: String },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenient Result type for agent-dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

impl DashboardError {
    /// Create an unknown-page error listing the valid identifiers
    pub fn unknown_page(id: impl Into<String>) -> Self {
        let expected = crate::navigation::PageId::ALL
            .iter()
            .map(|p| p.id())
            .collect::<Vec<_>>()
            .join(", ");
        Self::UnknownPage {
            id: id.into(),
            expected,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an IO error with an optional path
    pub fn io(path: Option<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path,
            message: source.to_string(),
            source,
        }
    }
}
