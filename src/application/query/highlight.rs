// SPDX-License-Identifier: MPL-2.0
//! Highlight projection.
//!
//! Computes which single sentence drives the on-screen highlight and overlay
//! for a given transport state. The result is applied to the transcript by
//! rewriting every `is_highlighted` flag, never incrementally.

use super::selection::SelectedSentence;
use crate::domain::playback::PlaybackMode;
use crate::domain::transcript::{SentenceId, Transcript};

/// Returns the id of the active sentence, if any.
///
/// - In selection playback the active sentence is `selected[active_index]`.
/// - In free playback it is the first sentence whose closed interval
///   contains `current_time`, searched among the selected sentences when
///   there are any and across the whole transcript otherwise.
///
/// Without a transcript nothing is active.
#[must_use]
pub fn project<'a>(
    transcript: Option<&'a Transcript>,
    selected: &'a [SelectedSentence],
    current_time: f64,
    mode: PlaybackMode,
    active_index: usize,
) -> Option<&'a SentenceId> {
    let transcript = transcript?;
    match mode {
        PlaybackMode::SelectionPlayback => selected.get(active_index).map(|sentence| &sentence.id),
        PlaybackMode::FreePlayback if !selected.is_empty() => selected
            .iter()
            .find(|sentence| sentence.contains(current_time))
            .map(|sentence| &sentence.id),
        PlaybackMode::FreePlayback => transcript
            .sentences()
            .find(|sentence| sentence.contains(current_time))
            .map(|sentence| &sentence.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::query::SelectionIndex;
    use crate::domain::transcript::{Section, Sentence};

    fn transcript(selected: &[&str]) -> Transcript {
        let sentence = |id: &str, start, end| {
            Sentence::new(id, id.to_uppercase(), start, end).selected(selected.contains(&id))
        };
        Transcript::new(
            11.0,
            vec![
                Section::new("a", "A", vec![sentence("s1", 0.0, 3.0)]),
                Section::new("b", "B", vec![sentence("s2", 3.0, 7.0), sentence("s3", 7.0, 11.0)]),
            ],
        )
    }

    fn free(transcript: &Transcript, time: f64) -> Option<String> {
        let index = SelectionIndex::from_transcript(transcript);
        project(Some(transcript), index.as_slice(), time, PlaybackMode::FreePlayback, 0)
            .map(|id| id.to_string())
    }

    #[test]
    fn free_playback_without_selection_uses_whole_transcript() {
        let transcript = transcript(&[]);
        assert_eq!(free(&transcript, 1.0).as_deref(), Some("s1"));
        assert_eq!(free(&transcript, 12.0), None);
    }

    #[test]
    fn free_playback_with_selection_only_matches_selected() {
        let transcript = transcript(&["s3"]);
        assert_eq!(free(&transcript, 1.0), None);
        assert_eq!(free(&transcript, 8.0).as_deref(), Some("s3"));
    }

    #[test]
    fn shared_boundary_resolves_to_first_in_order() {
        let transcript = transcript(&[]);
        assert_eq!(free(&transcript, 3.0).as_deref(), Some("s1"));
        assert_eq!(free(&transcript, 7.0).as_deref(), Some("s2"));
    }

    #[test]
    fn selection_playback_uses_active_index_regardless_of_time() {
        let transcript = transcript(&["s2", "s3"]);
        let index = SelectionIndex::from_transcript(&transcript);
        let mode = PlaybackMode::SelectionPlayback;
        let active = project(Some(&transcript), index.as_slice(), 0.5, mode, 1);
        assert_eq!(active.map(SentenceId::as_str), Some("s3"));
        assert_eq!(project(Some(&transcript), index.as_slice(), 0.5, mode, 2), None);
    }

    #[test]
    fn no_transcript_means_no_highlight() {
        assert_eq!(project(None, &[], 1.0, PlaybackMode::FreePlayback, 0), None);
    }

    #[test]
    fn applying_projection_highlights_at_most_one_sentence() {
        for selected in [&[][..], &["s2"][..], &["s1", "s2", "s3"][..]] {
            let mut transcript = transcript(selected);
            let index = SelectionIndex::from_transcript(&transcript);
            for step in 0..=24 {
                let time = f64::from(step) * 0.5;
                for mode in [PlaybackMode::FreePlayback, PlaybackMode::SelectionPlayback] {
                    for active_index in 0..4 {
                        let active = project(Some(&transcript), index.as_slice(), time, mode, active_index)
                            .cloned();
                        transcript.apply_highlight(active.as_ref());
                        let count = transcript.sentences().filter(|s| s.is_highlighted).count();
                        assert!(count <= 1);
                        assert_eq!(count == 1, active.is_some());
                    }
                }
            }
        }
    }
}
