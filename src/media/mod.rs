// SPDX-License-Identifier: MPL-2.0
//! Uploaded video handles.
//!
//! The editor never opens the media itself; a [`VideoFile`] only proves that
//! the path names something the player and the transcriber can handle.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// File extension constants.
pub mod extensions {
    /// Video file extensions
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "avi", "mov", "mkv", "webm"];
}

/// Message shown when something other than a video is uploaded.
pub const NOT_A_VIDEO_MESSAGE: &str = "Please upload a video file";

/// Returns true if `path` has a known video extension (case-insensitive).
#[must_use]
pub fn is_video_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            extensions::VIDEO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
        })
}

/// A video accepted for transcription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFile {
    path: PathBuf,
}

impl VideoFile {
    /// Accepts `path` if it looks like a video.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the extension is not a known video
    /// extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !is_video_path(path) {
            return Err(Error::InvalidInput(NOT_A_VIDEO_MESSAGE.to_string()));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for display, e.g. `talk.mp4`.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File name without its extension, e.g. `talk`.
    #[must_use]
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
