// SPDX-License-Identifier: MPL-2.0
//! Session event types for the diagnostics journal.
//!
//! Only state transitions and commands are journaled; individual clock
//! ticks are not.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// What happened in the editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEventKind {
    // ==========================================================================
    // Loading
    // ==========================================================================
    /// A transcript was installed for a new video.
    VideoLoaded {
        file_name: String,
        duration_secs: f64,
        sentence_count: usize,
    },

    /// Loading was refused or transcription failed.
    LoadFailed { reason: String },

    /// Video and transcript were cleared.
    SessionCleared,

    // ==========================================================================
    // Selection
    // ==========================================================================
    SelectionToggled {
        sentence_id: String,
        selected: bool,
        selected_count: usize,
    },

    /// The active index was re-resolved after the selection changed during
    /// selection playback.
    SelectionRemapped { index: usize },

    // ==========================================================================
    // Transport
    // ==========================================================================
    SelectionPlaybackStarted { start_secs: f64 },

    SentenceAdvanced { index: usize },

    /// The clock was before the active sentence and was moved forward.
    DriftCorrected { index: usize },

    SelectionPlaybackFinished,

    SelectionPlaybackStopped,

    Seeked { position_secs: f64 },

    JumpedToSentence { index: usize },

    // ==========================================================================
    // Scroll
    // ==========================================================================
    ScrollIssued { sentence_id: String },
}

/// A journaled event with its monotonic timestamp.
#[derive(Debug, Clone)]
pub struct SessionEvent {
    pub timestamp: Instant,
    pub kind: SessionEventKind,
}

impl SessionEvent {
    /// Creates an event stamped with the current instant.
    #[must_use]
    pub fn new(kind: SessionEventKind) -> Self {
        Self::with_timestamp(kind, Instant::now())
    }

    #[must_use]
    pub fn with_timestamp(kind: SessionEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}
