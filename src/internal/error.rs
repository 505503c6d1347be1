use thiserror::Error;
use std::io;

/// Unified error type for the Fulmen library.
#[derive(Error, Debug)]
pub enum Error {
    /// Schema text is malformed, incomplete, or references an undefined type.
    #[error("Parse Error: {0}")]
    Parse(String),

    /// A value's shape does not match the schema node driving the encoder.
    #[error("Schema Mismatch: {0}")]
    SchemaMismatch(String),

    /// A string payload is not valid UTF-8, or a length does not fit the
    /// 4-byte wire prefix.
    #[error("Invalid Encoding: {0}")]
    InvalidEncoding(String),

    /// The input buffer ended before the schema-prescribed read completed,
    /// or was not exactly consumed.
    #[error("Truncated: {0}")]
    Truncated(String),

    /// I/O failure while loading schema or data files.
    #[error("IO Error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized `Result` type for Fulmen operations.
pub type Result<T> = std::result::Result<T, Error>;
