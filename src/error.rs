//! Error types for regexpane.

use std::fmt;

/// Result type alias for regexpane operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for regexpane operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The pattern text failed to compile as a regular expression.
    /// Carries the engine's diagnostic message.
    Pattern(String),
}

impl Error {
    /// The diagnostic message, suitable for a status line.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Pattern(msg) => msg,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(msg) => write!(f, "invalid pattern: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
