//! Crate-level error types.

use std::fmt;

/// Errors produced by the vantage crate.
///
/// The camera core itself never fails; these come from the options layer.
#[derive(Debug)]
pub enum VantageError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// An interaction mode name that matches no known mode.
    UnknownInteractionMode(String),
    /// A projection name that matches no known projection.
    UnknownProjectionMode(String),
}

impl fmt::Display for VantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::UnknownInteractionMode(name) => {
                write!(f, "unknown interaction mode: {name:?}")
            }
            Self::UnknownProjectionMode(name) => {
                write!(f, "unknown projection mode: {name:?}")
            }
        }
    }
}

impl std::error::Error for VantageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VantageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
