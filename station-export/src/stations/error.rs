//! Station export error types.

use std::fmt;
use std::num::ParseFloatError;

/// Fatal errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// The HTTP client could not be built
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body is not a well-formed XML document
    #[error("XML parse error: {0}")]
    Xml(#[from] xmltree::ParseError),

    /// Writing the output file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the station list failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error converting one station element into a record.
///
/// These never abort a run; the offending element is logged and skipped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// A required element is missing or has no text
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A coordinate is not a decimal number
    #[error("invalid {field} {value:?}: {source}")]
    InvalidCoordinate {
        field: &'static str,
        value: String,
        source: ParseFloatError,
    },

    /// A coordinate parsed as NaN or infinity, which JSON cannot carry
    #[error("invalid {field} {value:?}: not a finite number")]
    NonFiniteCoordinate { field: &'static str, value: String },
}

/// Why the feed could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// The server answered with a non-success status
    Status(u16),

    /// The request never produced a response
    Transport(String),
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::Status(status) => write!(f, "HTTP status {status}"),
            FetchFailure::Transport(message) => write!(f, "transport error: {message}"),
        }
    }
}
