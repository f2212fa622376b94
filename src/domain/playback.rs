// SPDX-License-Identifier: MPL-2.0
//! Transport state shared by the playback core.
//!
//! This module defines the playback modes and the canonical transport state
//! block read by the presentation layer.

/// Which part of the video the transport is allowed to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    /// Normal, unrestricted playback of the whole video.
    #[default]
    FreePlayback,
    /// Only the selected sentences are played, in time order, skipping gaps.
    SelectionPlayback,
}

impl PlaybackMode {
    /// Returns true if selected sentences are being played back-to-back.
    #[must_use]
    pub fn is_selection(self) -> bool {
        matches!(self, Self::SelectionPlayback)
    }
}

/// Canonical transport state.
///
/// `active_sentence_index` indexes into the selected sentences and is only
/// meaningful while `mode` is [`PlaybackMode::SelectionPlayback`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransportState {
    /// Playback position in seconds, as last reported by the player.
    pub current_time: f64,
    pub mode: PlaybackMode,
    pub active_sentence_index: usize,
    pub is_playing: bool,
}

impl TransportState {
    /// Returns true while selection playback is running.
    #[must_use]
    pub fn is_playing_selection(&self) -> bool {
        self.mode.is_selection()
    }
}
