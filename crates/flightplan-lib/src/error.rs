use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the flight planner library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Only the input layer produces errors. Graph construction and path search
/// represent every "failure" (unknown city, unreachable destination) as an
/// ordinary empty result instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Input file could not be located at the given path.
    #[error("input file not found at {path}")]
    InputNotFound { path: PathBuf },

    /// Raised when an input file does not follow the expected line format.
    #[error("malformed {source_name} at line {line}: {message}")]
    MalformedInput {
        source_name: String,
        line: u64,
        message: String,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for delimited-record parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    pub(crate) fn malformed(source_name: &str, line: u64, message: impl Into<String>) -> Self {
        Error::MalformedInput {
            source_name: source_name.to_string(),
            line,
            message: message.into(),
        }
    }
}
