// SPDX-License-Identifier: MPL-2.0
//! Timed transcript value objects.
//!
//! A [`Transcript`] is an ordered list of [`Section`]s, each holding its
//! [`Sentence`]s in reading order. Sections keep the order the transcript
//! was delivered in; they are not sorted by time relative to each other.

use crate::domain::error::TranscriptionError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// =============================================================================
// SentenceId
// =============================================================================

/// Opaque identifier of a sentence within a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentenceId(String);

impl SentenceId {
    /// Creates a new sentence identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SentenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SentenceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// =============================================================================
// Sentence
// =============================================================================

/// A timed transcript unit.
///
/// `is_highlighted` is derived state: it is rewritten for every sentence each
/// time the highlight is projected and is never read back from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    pub id: SentenceId,
    pub text: String,
    /// Start of the interval in seconds.
    pub start_time: f64,
    /// End of the interval in seconds (strictly after `start_time`).
    pub end_time: f64,
    #[serde(default)]
    pub is_selected: bool,
    #[serde(skip)]
    pub is_highlighted: bool,
}

impl Sentence {
    /// Creates an unselected, unhighlighted sentence.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, start_time: f64, end_time: f64) -> Self {
        Self {
            id: SentenceId::new(id),
            text: text.into(),
            start_time,
            end_time,
            is_selected: false,
            is_highlighted: false,
        }
    }

    /// Builder-style helper setting the selection flag.
    #[must_use]
    pub fn selected(mut self, is_selected: bool) -> Self {
        self.is_selected = is_selected;
        self
    }

    /// Returns true if `time` lies within `[start_time, end_time]`.
    #[must_use]
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time <= self.end_time
    }

    /// Returns the length of the interval in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

// =============================================================================
// Section
// =============================================================================

/// A titled group of sentences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub sentences: Vec<Sentence>,
}

impl Section {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, sentences: Vec<Sentence>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            sentences,
        }
    }
}

// =============================================================================
// Transcript
// =============================================================================

/// The full timed transcript of one video.
///
/// Owned by the editing session and replaced wholesale when a new video is
/// loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// Total video duration in seconds.
    pub duration: f64,
    #[serde(rename = "transcript", alias = "sections")]
    pub sections: Vec<Section>,
}

impl Transcript {
    #[must_use]
    pub fn new(duration: f64, sections: Vec<Section>) -> Self {
        Self { duration, sections }
    }

    /// Iterates over every sentence in reading order.
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.sections.iter().flat_map(|section| section.sentences.iter())
    }

    /// Returns the total number of sentences.
    #[must_use]
    pub fn sentence_count(&self) -> usize {
        self.sections.iter().map(|section| section.sentences.len()).sum()
    }

    /// Finds a sentence by id.
    #[must_use]
    pub fn sentence(&self, id: &SentenceId) -> Option<&Sentence> {
        self.sentences().find(|sentence| &sentence.id == id)
    }

    /// Finds a section by id.
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Flips the selection flag of the sentence with the given id.
    ///
    /// Returns the new selection state, or `None` if no sentence matched.
    pub fn toggle_selection(&mut self, id: &SentenceId) -> Option<bool> {
        let sentence = self
            .sections
            .iter_mut()
            .flat_map(|section| section.sentences.iter_mut())
            .find(|sentence| &sentence.id == id)?;
        sentence.is_selected = !sentence.is_selected;
        Some(sentence.is_selected)
    }

    /// Rewrites `is_highlighted` on every sentence so that only `active`
    /// (if any) is highlighted.
    pub fn apply_highlight(&mut self, active: Option<&SentenceId>) {
        for sentence in self
            .sections
            .iter_mut()
            .flat_map(|section| section.sentences.iter_mut())
        {
            sentence.is_highlighted = active == Some(&sentence.id);
        }
    }

    /// Returns the currently highlighted sentence, if any.
    #[must_use]
    pub fn highlighted(&self) -> Option<&Sentence> {
        self.sentences().find(|sentence| sentence.is_highlighted)
    }

    /// Checks the data model: positive duration, `0 <= start < end` for
    /// every sentence and unique sentence ids.
    ///
    /// # Errors
    ///
    /// Returns [`TranscriptionError::InvalidTranscript`] describing the
    /// first violation found.
    pub fn validate(&self) -> Result<(), TranscriptionError> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(TranscriptionError::InvalidTranscript(format!(
                "duration must be positive, got {}",
                self.duration
            )));
        }

        let mut seen = HashSet::new();
        for sentence in self.sentences() {
            if !seen.insert(&sentence.id) {
                return Err(TranscriptionError::InvalidTranscript(format!(
                    "duplicate sentence id {}",
                    sentence.id
                )));
            }
            let ordered = sentence.start_time.is_finite()
                && sentence.end_time.is_finite()
                && sentence.start_time >= 0.0
                && sentence.end_time > sentence.start_time;
            if !ordered {
                return Err(TranscriptionError::InvalidTranscript(format!(
                    "sentence {} has invalid interval [{}, {}]",
                    sentence.id, sentence.start_time, sentence.end_time
                )));
            }
        }
        Ok(())
    }
}
