//! Error types for benchmark operations

use thiserror::Error;

/// Result type alias for Horae operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Horae
#[derive(Error, Debug)]
pub enum Error {
    /// An argument was out of range or otherwise unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A compression algorithm identifier was not recognized
    #[error("Unsupported compression algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The event source could not be reached or returned an error
    #[error("Event source unavailable: {0}")]
    SourceUnavailable(String),

    /// An event could not be serialized
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A codec failed on otherwise valid input
    #[error("Compression error: {0}")]
    Compression(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::SourceUnavailable(err.to_string())
    }
}
