// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Failure reported by a transcription service.
///
/// A failed transcription never installs a partial transcript; the session
/// keeps whatever it had before the attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptionError {
    /// The service could not be reached or refused the request.
    Unavailable(String),

    /// The service answered with a transcript that violates the data model
    /// (non-positive duration, inverted interval, duplicate ids, bad JSON).
    InvalidTranscript(String),

    /// Reading the video or the transcript failed.
    Io(String),

    /// Generic error with raw message.
    Other(String),
}

impl TranscriptionError {
    /// Categorizes a raw upstream error message.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("no such file")
            || msg_lower.contains("permission denied")
            || msg_lower.contains("i/o error")
        {
            return Self::Io(msg.to_string());
        }

        if msg_lower.contains("timed out")
            || msg_lower.contains("timeout")
            || msg_lower.contains("connection")
            || msg_lower.contains("unavailable")
        {
            return Self::Unavailable(msg.to_string());
        }

        if msg_lower.contains("invalid")
            || msg_lower.contains("malformed")
            || msg_lower.contains("expected")
        {
            return Self::InvalidTranscript(msg.to_string());
        }

        Self::Other(msg.to_string())
    }
}

impl fmt::Display for TranscriptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "Transcription service unavailable: {}", msg),
            Self::InvalidTranscript(msg) => write!(f, "Invalid transcript: {}", msg),
            Self::Io(msg) => write!(f, "I/O error: {}", msg),
            Self::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for TranscriptionError {}
