// SPDX-License-Identifier: MPL-2.0
//! JSON transcript adapter.
//!
//! Looks up `<stem>.json` for a video `<stem>.<ext>`, either next to the
//! video or in a configured transcript directory. Two layouts are accepted:
//!
//! ```json
//! { "duration": 120, "transcript": [ { "id": "...", "title": "...", "sentences": [...] } ] }
//! { "videoData": { "duration": 120, "transcript": [ ... ] } }
//! ```
//!
//! Sentences use camelCase keys (`startTime`, `endTime`, `isSelected`).

use crate::application::port::Transcriber;
use crate::config::Config;
use crate::domain::error::TranscriptionError;
use crate::domain::transcript::Transcript;
use crate::media::VideoFile;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TranscriptDocument {
    Wrapped {
        #[serde(rename = "videoData")]
        video_data: Transcript,
    },
    Bare(Transcript),
}

impl TranscriptDocument {
    fn into_transcript(self) -> Transcript {
        match self {
            Self::Wrapped { video_data } => video_data,
            Self::Bare(transcript) => transcript,
        }
    }
}

/// Parses and validates a transcript document.
///
/// # Errors
///
/// Returns [`TranscriptionError::InvalidTranscript`] if the JSON matches
/// neither layout or violates the data model.
pub fn parse_transcript(json: &str) -> Result<Transcript, TranscriptionError> {
    let document: TranscriptDocument = serde_json::from_str(json)
        .map_err(|err| TranscriptionError::InvalidTranscript(err.to_string()))?;
    let transcript = document.into_transcript();
    transcript.validate()?;
    Ok(transcript)
}

/// Serves prepared transcripts from JSON files.
#[derive(Debug, Clone, Default)]
pub struct TranscriptFileTranscriber {
    transcript_dir: Option<PathBuf>,
    processing_delay: Duration,
}

impl TranscriptFileTranscriber {
    /// Looks for transcripts next to the videos, with no delay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a transcriber from the user configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            transcript_dir: config.transcript_dir.clone(),
            processing_delay: config.processing_delay(),
        }
    }

    #[must_use]
    pub fn with_transcript_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.transcript_dir = Some(dir.into());
        self
    }

    /// Simulates service latency before each answer.
    #[must_use]
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    /// Returns where the transcript of `video` is expected.
    #[must_use]
    pub fn transcript_path(&self, video: &VideoFile) -> PathBuf {
        let file_name = format!("{}.json", video.stem());
        match &self.transcript_dir {
            Some(dir) => dir.join(file_name),
            None => video
                .path()
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(file_name),
        }
    }
}

impl Transcriber for TranscriptFileTranscriber {
    async fn transcribe(&self, video: &VideoFile) -> Result<Transcript, TranscriptionError> {
        if !self.processing_delay.is_zero() {
            tokio::time::sleep(self.processing_delay).await;
        }

        let path = self.transcript_path(video);
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|err| TranscriptionError::Io(format!("{}: {err}", path.display())))?;

        match parse_transcript(&content) {
            Ok(transcript) => {
                tracing::debug!(
                    path = %path.display(),
                    sentences = transcript.sentence_count(),
                    "transcript_file_read"
                );
                Ok(transcript)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "transcript_file_invalid");
                Err(err)
            }
        }
    }
}
