use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MockError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("invalid header: {reason}")]
    InvalidHeader { reason: String },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl MockError {
    pub fn invalid_argument<S: ToString>(str: S) -> Self {
        Self::InvalidArgument { reason: str.to_string() }
    }

    pub fn invalid_header<S: ToString>(str: S) -> Self {
        Self::InvalidHeader { reason: str.to_string() }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }

    /// Returns true if this error was caused by an I/O failure
    #[inline]
    pub fn is_io(&self) -> bool {
        matches!(self, MockError::Io { .. })
    }
}
