// SPDX-License-Identifier: MPL-2.0
//! Selection-aware transport state machine.
//!
//! Two modes:
//! - `FreePlayback`: the player runs unrestricted over the whole video
//! - `SelectionPlayback`: only the selected sentences play, in start-time
//!   order, with the gaps between them skipped
//!
//! Every input (command, clock tick, player notification) is handled by one
//! method that mutates [`TransportState`] and issues at most one seek and
//! one play/pause call, then reports what happened as a [`Transition`].
//! Inputs must be fed strictly in arrival order.

use super::clock::{PlaybackClock, PlayerEvent};
use crate::application::port::Player;
use crate::application::query::{position_containing, position_of, SelectedSentence};
use crate::domain::playback::{PlaybackMode, TransportState};
use crate::domain::transcript::SentenceId;

/// Outcome of a single transport input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// The input was handled without a mode or index change worth noting.
    Unchanged,
    /// A command was refused by its guard; nothing changed.
    Rejected,
    /// Play/pause was toggled in free playback.
    FreeToggled { play_requested: bool },
    /// Selection playback started at the first selected sentence.
    SelectionStarted { start_time: f64 },
    /// Pause was requested while playing the selection. The mode changes
    /// when the player confirms with [`PlayerEvent::Paused`].
    PauseRequested,
    /// The end of a sentence was reached and the next one was entered.
    Advanced { index: usize },
    /// The clock was before the active sentence and was moved forward.
    DriftCorrected { index: usize },
    /// The end of the last selected sentence was reached.
    SelectionFinished,
    /// Selection playback ended because the player paused or the selection
    /// became empty.
    SelectionStopped,
    /// The position moved by seek.
    Seeked { time: f64, active_index: usize },
    /// A selected sentence was entered by index.
    Jumped { index: usize },
    /// The active index was re-resolved after a selection change.
    SelectionRemapped { index: usize },
}

/// Owns the canonical [`TransportState`] and its transition rules.
#[derive(Debug, Clone, Default)]
pub struct TransportController {
    state: TransportState,
}

impl TransportController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &TransportState {
        &self.state
    }

    /// Returns the transport to its initial state.
    pub fn reset(&mut self) {
        self.state = TransportState::default();
    }

    /// Play/pause command.
    ///
    /// - Selection playback running: pause the player.
    /// - Empty selection: toggle the player in free playback.
    /// - Otherwise: enter selection playback at the first selected sentence.
    pub fn toggle_play_pause<P: Player>(
        &mut self,
        clock: &mut PlaybackClock<P>,
        selected: &[SelectedSentence],
    ) -> Transition {
        if self.state.mode.is_selection() {
            clock.pause();
            return Transition::PauseRequested;
        }

        let Some(first) = selected.first() else {
            let play_requested = !self.state.is_playing;
            if play_requested {
                clock.play();
            } else {
                clock.pause();
            }
            return Transition::FreeToggled { play_requested };
        };

        self.state.mode = PlaybackMode::SelectionPlayback;
        self.state.active_sentence_index = 0;
        self.state.current_time = clock.seek(first.start_time);
        clock.play();
        Transition::SelectionStarted {
            start_time: self.state.current_time,
        }
    }

    /// Applies a notification from the player.
    pub fn on_event<P: Player>(
        &mut self,
        event: PlayerEvent,
        clock: &mut PlaybackClock<P>,
        selected: &[SelectedSentence],
    ) -> Transition {
        match event.normalized() {
            PlayerEvent::TimeUpdated(time) => {
                self.state.current_time = time;
                if self.state.mode.is_selection() {
                    self.on_tick(clock, selected)
                } else {
                    Transition::Unchanged
                }
            }
            PlayerEvent::StartedPlaying => {
                self.state.is_playing = true;
                Transition::Unchanged
            }
            PlayerEvent::Paused => {
                self.state.is_playing = false;
                if self.state.mode.is_selection() {
                    self.stop_selection();
                    Transition::SelectionStopped
                } else {
                    Transition::Unchanged
                }
            }
            PlayerEvent::UserSeeked(time) => {
                self.state.current_time = time;
                self.resolve_active_index(selected);
                Transition::Seeked {
                    time,
                    active_index: self.state.active_sentence_index,
                }
            }
        }
    }

    fn on_tick<P: Player>(
        &mut self,
        clock: &mut PlaybackClock<P>,
        selected: &[SelectedSentence],
    ) -> Transition {
        let index = self.state.active_sentence_index;
        let Some(active) = selected.get(index) else {
            // Out of bounds: the selection changed without being reported.
            return self.on_selection_changed(None, clock, selected);
        };

        if self.state.current_time >= active.end_time {
            match selected.get(index + 1) {
                Some(next) => {
                    self.state.active_sentence_index = index + 1;
                    self.state.current_time = clock.seek(next.start_time);
                    Transition::Advanced { index: index + 1 }
                }
                None => {
                    clock.pause();
                    self.stop_selection();
                    Transition::SelectionFinished
                }
            }
        } else if self.state.current_time < active.start_time {
            self.state.current_time = clock.seek(active.start_time);
            Transition::DriftCorrected { index }
        } else {
            Transition::Unchanged
        }
    }

    /// Seeks to an arbitrary time.
    pub fn seek_to<P: Player>(
        &mut self,
        time: f64,
        clock: &mut PlaybackClock<P>,
        selected: &[SelectedSentence],
    ) -> Transition {
        self.state.current_time = clock.seek(time);
        self.resolve_active_index(selected);
        Transition::Seeked {
            time: self.state.current_time,
            active_index: self.state.active_sentence_index,
        }
    }

    /// Seeks to the start of the selected sentence at `index`.
    ///
    /// Rejected if `index` is out of bounds.
    pub fn seek_to_sentence<P: Player>(
        &mut self,
        index: usize,
        clock: &mut PlaybackClock<P>,
        selected: &[SelectedSentence],
    ) -> Transition {
        let Some(sentence) = selected.get(index) else {
            return Transition::Rejected;
        };
        self.state.active_sentence_index = index;
        self.state.current_time = clock.seek(sentence.start_time);
        Transition::Jumped { index }
    }

    /// Moves to the next selected sentence, if there is one.
    pub fn next<P: Player>(
        &mut self,
        clock: &mut PlaybackClock<P>,
        selected: &[SelectedSentence],
    ) -> Transition {
        let target = self.state.active_sentence_index + 1;
        if target < selected.len() {
            self.seek_to_sentence(target, clock, selected)
        } else {
            Transition::Rejected
        }
    }

    /// Moves to the previous selected sentence, if there is one.
    pub fn previous<P: Player>(
        &mut self,
        clock: &mut PlaybackClock<P>,
        selected: &[SelectedSentence],
    ) -> Transition {
        let index = self.state.active_sentence_index;
        if index == 0 || selected.is_empty() {
            return Transition::Rejected;
        }
        let target = (index - 1).min(selected.len() - 1);
        self.seek_to_sentence(target, clock, selected)
    }

    /// Reconciles the active index with a freshly recomputed selection.
    ///
    /// `previously_active` is the id the index pointed at before the
    /// change. While selection playback runs, the index follows that id if
    /// it is still selected and is clamped otherwise; an empty selection
    /// pauses the player and returns to free playback. Outside selection
    /// playback the index is reset to 0.
    pub fn on_selection_changed<P: Player>(
        &mut self,
        previously_active: Option<&SentenceId>,
        clock: &mut PlaybackClock<P>,
        selected: &[SelectedSentence],
    ) -> Transition {
        if !self.state.mode.is_selection() {
            self.state.active_sentence_index = 0;
            return Transition::Unchanged;
        }

        if selected.is_empty() {
            clock.pause();
            self.stop_selection();
            return Transition::SelectionStopped;
        }

        let index = previously_active
            .and_then(|id| position_of(selected, id))
            .unwrap_or_else(|| self.state.active_sentence_index.min(selected.len() - 1));
        self.state.active_sentence_index = index;
        Transition::SelectionRemapped { index }
    }

    fn stop_selection(&mut self) {
        self.state.mode = PlaybackMode::FreePlayback;
        self.state.active_sentence_index = 0;
    }

    fn resolve_active_index(&mut self, selected: &[SelectedSentence]) {
        if let Some(index) = position_containing(selected, self.state.current_time) {
            self.state.active_sentence_index = index;
        }
    }
}
