//! Unified error types for the demo driver.
//!
//! Everything that can fail maps into [`DemoError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization for the demo driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested demo group is not a catalog member.
    UnknownGroup,
    /// Two groups were registered under the same name.
    DuplicateGroup,
    /// A console I/O error occurred.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownGroup => write!(f, "UNKNOWN_GROUP"),
            Self::DuplicateGroup => write!(f, "DUPLICATE_GROUP"),
            Self::Io => write!(f, "IO"),
        }
    }
}

/// The unified error used throughout the demo driver.
///
/// Failures are mapped into `DemoError` using `From` impls or the named
/// constructors. This provides a single error type at the application
/// boundary; the exit status is derived from it in `main`.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct DemoError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl DemoError {
    /// Create a new error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an unknown-group error naming the rejected selector and
    /// listing every valid group name in catalog order.
    pub fn unknown_group(name: &str, available: &[&str]) -> Self {
        Self::new(
            ErrorKind::UnknownGroup,
            format!(
                "unknown demo group '{}' (available: {})",
                name,
                available.join(", ")
            ),
        )
    }

    /// Create a duplicate-group error.
    pub fn duplicate_group(name: &str) -> Self {
        Self::new(
            ErrorKind::DuplicateGroup,
            format!("demo group '{}' is already registered", name),
        )
    }
}

impl From<std::io::Error> for DemoError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Io, format!("I/O error: {err}"), err)
    }
}

/// Convenience alias used throughout the demo driver.
pub type DemoResult<T> = Result<T, DemoError>;
