// SPDX-License-Identifier: MPL-2.0
use crate::domain::error::TranscriptionError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    /// The caller handed in something the editor cannot work with, such as a
    /// file that is not a video.
    InvalidInput(String),
    Transcription(TranscriptionError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::InvalidInput(e) => write!(f, "{}", e),
            Error::Transcription(e) => write!(f, "Processing failed: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<TranscriptionError> for Error {
    fn from(err: TranscriptionError) -> Self {
        Error::Transcription(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
