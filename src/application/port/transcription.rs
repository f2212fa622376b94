// SPDX-License-Identifier: MPL-2.0
//! Transcription port definition.
//!
//! Turning an uploaded video into a timed transcript is an opaque,
//! asynchronous request/response with no partial results. The editor awaits
//! it once per load and installs the transcript only on success.

use crate::domain::error::TranscriptionError;
use crate::domain::transcript::Transcript;
use crate::media::VideoFile;
use std::future::Future;

/// Port for transcription services.
pub trait Transcriber {
    /// Produces the transcript of `video`.
    ///
    /// # Errors
    ///
    /// Returns a [`TranscriptionError`] if the service is unreachable, the
    /// video cannot be read, or the returned transcript is invalid.
    fn transcribe(
        &self,
        video: &VideoFile,
    ) -> impl Future<Output = Result<Transcript, TranscriptionError>> + Send;
}
