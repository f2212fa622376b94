// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`transcript_file`]: reads prepared JSON transcripts from disk
//!   (implements [`Transcriber`])
//!
//! [`Transcriber`]: crate::application::port::Transcriber

pub mod transcript_file;

// Re-export main types for convenience
pub use transcript_file::{parse_transcript, TranscriptFileTranscriber};
