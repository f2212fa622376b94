// SPDX-License-Identifier: MPL-2.0
//! Selection index: the ordered list of selected sentences.
//!
//! The index is the single source of truth for what plays, and in which
//! order, during selection playback. It is rebuilt from scratch every time a
//! selection flag changes; it is never patched incrementally.

use crate::domain::transcript::{Sentence, SentenceId, Transcript};

/// Snapshot of a selected sentence, detached from the transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedSentence {
    pub id: SentenceId,
    pub text: String,
    pub start_time: f64,
    pub end_time: f64,
}

impl SelectedSentence {
    /// Returns true if `time` lies within `[start_time, end_time]`.
    #[must_use]
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time <= self.end_time
    }
}

impl From<&Sentence> for SelectedSentence {
    fn from(sentence: &Sentence) -> Self {
        Self {
            id: sentence.id.clone(),
            text: sentence.text.clone(),
            start_time: sentence.start_time,
            end_time: sentence.end_time,
        }
    }
}

/// Selected sentences flattened across sections and sorted by start time.
///
/// Sentences sharing a start time keep their reading order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionIndex {
    sentences: Vec<SelectedSentence>,
}

impl SelectionIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index for `transcript`.
    #[must_use]
    pub fn from_transcript(transcript: &Transcript) -> Self {
        let mut index = Self::new();
        index.recompute(Some(transcript));
        index
    }

    /// Rebuilds the index. An absent transcript yields an empty index.
    pub fn recompute(&mut self, transcript: Option<&Transcript>) {
        self.sentences.clear();
        if let Some(transcript) = transcript {
            self.sentences.extend(
                transcript
                    .sentences()
                    .filter(|sentence| sentence.is_selected)
                    .map(SelectedSentence::from),
            );
            // `sort_by` is stable: equal start times keep reading order.
            self.sentences
                .sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[SelectedSentence] {
        &self.sentences
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SelectedSentence> {
        self.sentences.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectedSentence> {
        self.sentences.iter()
    }

    /// Returns the position of the sentence with the given id.
    #[must_use]
    pub fn position_of(&self, id: &SentenceId) -> Option<usize> {
        position_of(&self.sentences, id)
    }
}

impl<'a> IntoIterator for &'a SelectionIndex {
    type Item = &'a SelectedSentence;
    type IntoIter = std::slice::Iter<'a, SelectedSentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.iter()
    }
}

/// Returns the position of the sentence with the given id.
#[must_use]
pub fn position_of(selected: &[SelectedSentence], id: &SentenceId) -> Option<usize> {
    selected.iter().position(|sentence| &sentence.id == id)
}

/// Returns the position of the first selected sentence containing `time`.
#[must_use]
pub fn position_containing(selected: &[SelectedSentence], time: f64) -> Option<usize> {
    selected.iter().position(|sentence| sentence.contains(time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transcript::Section;

    fn transcript() -> Transcript {
        // Sections out of time order on purpose.
        Transcript::new(
            60.0,
            vec![
                Section::new(
                    "late",
                    "Late",
                    vec![
                        Sentence::new("c", "C", 40.0, 45.0).selected(true),
                        Sentence::new("d", "D", 50.0, 55.0),
                    ],
                ),
                Section::new(
                    "early",
                    "Early",
                    vec![
                        Sentence::new("a", "A", 0.0, 5.0).selected(true),
                        Sentence::new("b", "B", 10.0, 15.0).selected(true),
                    ],
                ),
            ],
        )
    }

    fn ids(index: &SelectionIndex) -> Vec<&str> {
        index.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn selected_sentences_are_sorted_by_start_time() {
        let index = SelectionIndex::from_transcript(&transcript());
        assert_eq!(ids(&index), vec!["a", "b", "c"]);
        assert!(index
            .as_slice()
            .windows(2)
            .all(|pair| pair[0].start_time <= pair[1].start_time));
    }

    #[test]
    fn equal_start_times_keep_reading_order() {
        let transcript = Transcript::new(
            10.0,
            vec![Section::new(
                "s",
                "S",
                vec![
                    Sentence::new("second", "2", 3.0, 4.0).selected(true),
                    Sentence::new("x", "X", 1.0, 2.0).selected(true),
                    Sentence::new("third", "3", 3.0, 5.0).selected(true),
                ],
            )],
        );
        let index = SelectionIndex::from_transcript(&transcript);
        assert_eq!(ids(&index), vec!["x", "second", "third"]);
    }

    #[test]
    fn recompute_is_idempotent() {
        let transcript = transcript();
        let mut index = SelectionIndex::from_transcript(&transcript);
        let first = index.clone();
        index.recompute(Some(&transcript));
        assert_eq!(index, first);
    }

    #[test]
    fn double_toggle_restores_selection() {
        let mut transcript = transcript();
        let before_transcript = transcript.clone();
        let before = SelectionIndex::from_transcript(&transcript);

        let mut index = before.clone();
        for _ in 0..2 {
            transcript.toggle_selection(&"d".into());
            index.recompute(Some(&transcript));
        }

        assert_eq!(transcript, before_transcript);
        assert_eq!(index, before);
    }

    #[test]
    fn absent_transcript_gives_empty_index() {
        let mut index = SelectionIndex::from_transcript(&transcript());
        index.recompute(None);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn lookups_by_id_and_time() {
        let index = SelectionIndex::from_transcript(&transcript());
        assert_eq!(index.position_of(&"c".into()), Some(2));
        assert_eq!(index.position_of(&"d".into()), None);
        assert_eq!(position_containing(index.as_slice(), 12.0), Some(1));
        assert_eq!(position_containing(index.as_slice(), 15.0), Some(1));
        assert_eq!(position_containing(index.as_slice(), 7.0), None);
    }
}
