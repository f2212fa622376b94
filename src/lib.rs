// SPDX-License-Identifier: MPL-2.0
//! `highlight_reel` is the playback core of a transcript-driven video
//! highlight editor.
//!
//! The user selects sentences from a timed transcript; the editor plays only
//! those sentences back-to-back, skipping the gaps between them, while
//! keeping the highlighted sentence, the overlay text, the progress markers
//! and the transcript scroll position in step with the playback clock.
//!
//! The media element, the transcription service and the transcript list are
//! external collaborators reached through the traits in
//! [`application::port`]. [`session::EditorSession`] owns everything else.

#![doc(html_root_url = "https://docs.rs/highlight_reel/0.1.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod media;
pub mod scroll;
pub mod session;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{Error, Result};
pub use session::EditorSession;
