//! Error types.
//!
//! Only two failures ever leave their module: an orientation device that
//! cannot be opened, and bad command-line arguments. Everything the reader
//! thread hits while streaming is a `RecordError` and stays on that thread.

use std::io;
use thiserror::Error;

/// Failure to bring up the orientation source. Fatal before the frame loop starts.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("orientation device `{address}` is unavailable: {source}")]
    DeviceUnavailable {
        address: String,
        #[source]
        source: io::Error,
    },
    #[error("could not start the orientation reader thread: {0}")]
    ReaderSpawn(#[source] io::Error),
}

/// A single device record that was read and thrown away.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("read failed: {0}")]
    Io(#[from] io::Error),
    #[error("record is not valid UTF-8")]
    NotUtf8,
    #[error("empty record")]
    Empty,
    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("tilt value out of range")]
    OutOfRange,
}

impl RecordError {
    /// Read timeouts are the normal idle state of a quiet serial link.
    pub fn is_timeout(&self) -> bool {
        matches!(self, RecordError::Io(e) if e.kind() == io::ErrorKind::TimedOut)
    }
}

/// Bad command-line input.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown argument `{0}`")]
    UnknownArgument(String),
    #[error("missing value for `{0}`")]
    MissingValue(&'static str),
    #[error("invalid value `{value}` for `{flag}`")]
    InvalidValue { flag: &'static str, value: String },
}

/// Anything that stops the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}
