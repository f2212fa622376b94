// SPDX-License-Identifier: MPL-2.0
//! Editing session: the single owner of transcript, selection and transport.
//!
//! Every command and player notification goes through [`EditorSession`],
//! which applies it to the transport and then refreshes the derived state in
//! a fixed order:
//!
//! 1. project the active sentence from the transport state,
//! 2. rewrite every `is_highlighted` flag from that projection,
//! 3. hand the projection to the scroll synchronizer.
//!
//! All commands are no-ops while no transcript is loaded.

use crate::application::port::{Player, ScrollSink, Transcriber};
use crate::application::query::{project, SelectedSentence, SelectionIndex};
use crate::config::SessionSettings;
use crate::diagnostics::{DiagnosticsHandle, SessionEventKind};
use crate::domain::error::TranscriptionError;
use crate::domain::playback::TransportState;
use crate::domain::time::{format_time, time_percentage, ProgressMarker};
use crate::domain::transcript::{Sentence, SentenceId, Transcript};
use crate::error::{Error, Result};
use crate::media::VideoFile;
use crate::scroll::{PendingScroll, ScrollSynchronizer};
use crate::transport::{PlaybackClock, PlayerEvent, TransportController, Transition};
use std::path::Path;
use std::time::Instant;

pub struct EditorSession<P, S> {
    transcript: Option<Transcript>,
    video: Option<VideoFile>,
    selection: SelectionIndex,
    clock: PlaybackClock<P>,
    transport: TransportController,
    scroll: ScrollSynchronizer,
    sink: S,
    settings: SessionSettings,
    processing: bool,
    last_load_error: Option<Error>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<P: Player, S: ScrollSink> EditorSession<P, S> {
    /// Creates an empty session with default settings.
    #[must_use]
    pub fn new(player: P, sink: S) -> Self {
        Self::with_settings(player, sink, SessionSettings::default())
    }

    #[must_use]
    pub fn with_settings(player: P, sink: S, settings: SessionSettings) -> Self {
        Self {
            transcript: None,
            video: None,
            selection: SelectionIndex::new(),
            clock: PlaybackClock::new(player),
            transport: TransportController::new(),
            scroll: ScrollSynchronizer::new(settings.scroll_delay),
            sink,
            settings,
            processing: false,
            last_load_error: None,
            diagnostics: None,
        }
    }

    /// Journals session events through `handle`.
    #[must_use]
    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }

    // =========================================================================
    // Read side
    // =========================================================================

    #[must_use]
    pub fn transcript(&self) -> Option<&Transcript> {
        self.transcript.as_ref()
    }

    #[must_use]
    pub fn video(&self) -> Option<&VideoFile> {
        self.video.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> &TransportState {
        self.transport.state()
    }

    /// Selected sentences in playback order.
    #[must_use]
    pub fn selected_sentences(&self) -> &[SelectedSentence] {
        self.selection.as_slice()
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// The selected sentence at the active index.
    #[must_use]
    pub fn current_selected_sentence(&self) -> Option<&SelectedSentence> {
        self.selection.get(self.transport.state().active_sentence_index)
    }

    /// The highlighted sentence, if any.
    #[must_use]
    pub fn active_sentence(&self) -> Option<&Sentence> {
        self.transcript.as_ref()?.highlighted()
    }

    /// Text shown over the video: the highlighted sentence.
    #[must_use]
    pub fn overlay_text(&self) -> Option<&str> {
        self.active_sentence().map(|sentence| sentence.text.as_str())
    }

    /// Playback position as a percentage of the video duration.
    #[must_use]
    pub fn progress_percentage(&self) -> f64 {
        self.transcript.as_ref().map_or(0.0, |transcript| {
            time_percentage(self.transport.state().current_time, transcript.duration)
        })
    }

    /// One marker per selected sentence, in playback order.
    #[must_use]
    pub fn progress_markers(&self) -> Vec<ProgressMarker> {
        let Some(transcript) = self.transcript.as_ref() else {
            return Vec::new();
        };
        let min_width = self.settings.min_marker_width.percent();
        self.selection
            .iter()
            .map(|sentence| {
                ProgressMarker::new(
                    sentence.id.clone(),
                    sentence.start_time,
                    sentence.end_time,
                    transcript.duration,
                    min_width,
                )
            })
            .collect()
    }

    /// `current / duration`, e.g. `1:23 / 10:00`.
    #[must_use]
    pub fn time_label(&self) -> String {
        let duration = self.transcript.as_ref().map_or(0.0, |t| t.duration);
        format!(
            "{} / {}",
            format_time(self.transport.state().current_time),
            format_time(duration)
        )
    }

    /// True while a transcription request is in flight.
    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// The error of the most recent failed load, cleared by the next
    /// successful one.
    #[must_use]
    pub fn last_load_error(&self) -> Option<&Error> {
        self.last_load_error.as_ref()
    }

    #[must_use]
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    #[must_use]
    pub fn pending_scroll(&self) -> Option<&PendingScroll> {
        self.scroll.pending()
    }

    #[must_use]
    pub fn player(&self) -> &P {
        self.clock.player()
    }

    pub fn player_mut(&mut self) -> &mut P {
        self.clock.player_mut()
    }

    #[must_use]
    pub fn scroll_sink(&self) -> &S {
        &self.sink
    }

    pub fn scroll_sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Flips the selection of sentence `id`.
    ///
    /// Returns false if no transcript is loaded or the id is unknown.
    pub fn toggle_sentence_selection(&mut self, id: &SentenceId) -> bool {
        let previously_active = self.current_selected_sentence().map(|s| s.id.clone());
        let Some(selected) = self
            .transcript
            .as_mut()
            .and_then(|transcript| transcript.toggle_selection(id))
        else {
            return false;
        };

        self.selection.recompute(self.transcript.as_ref());
        tracing::debug!(
            sentence_id = %id,
            selected,
            selected_count = self.selection.len(),
            "sentence_selection_toggled"
        );
        self.journal(SessionEventKind::SelectionToggled {
            sentence_id: id.to_string(),
            selected,
            selected_count: self.selection.len(),
        });

        let transition = self.transport.on_selection_changed(
            previously_active.as_ref(),
            &mut self.clock,
            self.selection.as_slice(),
        );
        self.apply(transition);
        true
    }

    pub fn toggle_play_pause(&mut self) {
        if self.transcript.is_none() {
            return;
        }
        let transition = self
            .transport
            .toggle_play_pause(&mut self.clock, self.selection.as_slice());
        self.apply(transition);
    }

    /// Seeks to `time` seconds; the player clamps out-of-range values.
    pub fn seek_to(&mut self, time: f64) {
        if self.transcript.is_none() {
            return;
        }
        let transition = self
            .transport
            .seek_to(time, &mut self.clock, self.selection.as_slice());
        self.apply(transition);
    }

    /// Jumps to the selected sentence at `index`.
    ///
    /// Returns false if `index` is out of bounds.
    pub fn seek_to_sentence(&mut self, index: usize) -> bool {
        if self.transcript.is_none() {
            return false;
        }
        let transition =
            self.transport
                .seek_to_sentence(index, &mut self.clock, self.selection.as_slice());
        self.apply(transition)
    }

    /// Jumps to the next selected sentence and returns its index, or `None`
    /// if there is no next one.
    pub fn next(&mut self) -> Option<usize> {
        if self.transcript.is_none() {
            return None;
        }
        let transition = self
            .transport
            .next(&mut self.clock, self.selection.as_slice());
        self.apply(transition)
            .then_some(self.transport.state().active_sentence_index)
    }

    /// Jumps to the previous selected sentence and returns its index, or
    /// `None` if there is no previous one.
    pub fn previous(&mut self) -> Option<usize> {
        if self.transcript.is_none() {
            return None;
        }
        let transition = self
            .transport
            .previous(&mut self.clock, self.selection.as_slice());
        self.apply(transition)
            .then_some(self.transport.state().active_sentence_index)
    }

    /// Feeds a notification from the player.
    pub fn handle_player_event(&mut self, event: PlayerEvent) {
        if self.transcript.is_none() {
            return;
        }
        let transition =
            self.transport
                .on_event(event, &mut self.clock, self.selection.as_slice());
        self.apply(transition);
    }

    /// Fires the scheduled scroll once its delay has elapsed.
    ///
    /// Call this regularly, e.g. from the UI frame loop.
    pub fn tick(&mut self, now: Instant) {
        if let Some(id) = self.scroll.tick(now, &mut self.sink) {
            tracing::trace!(sentence_id = %id, "scroll_issued");
            self.journal(SessionEventKind::ScrollIssued {
                sentence_id: id.to_string(),
            });
        }
    }

    /// Centers sentence `id` in the transcript list.
    pub fn scroll_to_sentence(&mut self, id: &SentenceId) -> bool {
        let known = self
            .transcript
            .as_ref()
            .is_some_and(|transcript| transcript.sentence(id).is_some());
        if known {
            self.scroll.scroll_to_sentence(id, &mut self.sink);
        }
        known
    }

    /// Aligns the header of section `id` with the top of the list.
    pub fn scroll_to_section(&mut self, id: &str) -> bool {
        let known = self
            .transcript
            .as_ref()
            .is_some_and(|transcript| transcript.section(id).is_some());
        if known {
            self.scroll.scroll_to_section(id, &mut self.sink);
        }
        known
    }

    /// Centers the selected sentence at the active index.
    pub fn scroll_to_current_selected_sentence(&mut self) -> bool {
        let Some(id) = self.current_selected_sentence().map(|s| s.id.clone()) else {
            return false;
        };
        self.scroll.scroll_to_sentence(&id, &mut self.sink);
        true
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Validates `path` and marks the session as processing.
    ///
    /// Pair with [`finish_load`](Self::finish_load) once the transcriber
    /// answers. The previous transcript stays usable in between.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `path` is not a video.
    pub fn begin_load(&mut self, path: impl AsRef<Path>) -> Result<VideoFile> {
        match VideoFile::from_path(path) {
            Ok(video) => {
                self.processing = true;
                tracing::info!(file = %video.file_name(), "video_load_started");
                Ok(video)
            }
            Err(err) => {
                self.record_load_failure(&err);
                Err(err)
            }
        }
    }

    /// Installs the transcription result for `video`.
    ///
    /// On failure the previous transcript, selection and transport state are
    /// left exactly as they were.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transcription`] if the transcriber failed or
    /// returned an invalid transcript.
    pub fn finish_load(
        &mut self,
        video: VideoFile,
        result: std::result::Result<Transcript, TranscriptionError>,
    ) -> Result<()> {
        self.processing = false;
        let transcript = match result.and_then(|transcript| {
            transcript.validate()?;
            Ok(transcript)
        }) {
            Ok(transcript) => transcript,
            Err(err) => {
                let err = Error::from(err);
                self.record_load_failure(&err);
                return Err(err);
            }
        };

        tracing::info!(
            file = %video.file_name(),
            duration_secs = transcript.duration,
            sentences = transcript.sentence_count(),
            "video_loaded"
        );
        self.journal(SessionEventKind::VideoLoaded {
            file_name: video.file_name(),
            duration_secs: transcript.duration,
            sentence_count: transcript.sentence_count(),
        });

        if self.transport.state().is_playing {
            self.clock.pause();
        }
        self.selection.recompute(Some(&transcript));
        self.transcript = Some(transcript);
        self.video = Some(video);
        self.last_load_error = None;
        self.transport.reset();
        self.scroll.reset();
        self.refresh();
        Ok(())
    }

    /// Transcribes the video at `path` and installs the result.
    ///
    /// Dropping the returned future before it completes clears the
    /// processing flag and leaves the session as it was.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for non-video files and
    /// [`Error::Transcription`] when transcription fails.
    pub async fn load_video<T: Transcriber>(
        &mut self,
        transcriber: &T,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let video = self.begin_load(path)?;
        let guard = ProcessingGuard { session: self };
        let result = transcriber.transcribe(&video).await;
        guard.session.finish_load(video, result)
    }

    /// Drops the video and transcript and resets the transport.
    pub fn clear(&mut self) {
        if self.transport.state().is_playing {
            self.clock.pause();
        }
        self.transcript = None;
        self.video = None;
        self.selection.recompute(None);
        self.transport.reset();
        self.scroll.reset();
        self.processing = false;
        self.last_load_error = None;
        tracing::info!("session_cleared");
        self.journal(SessionEventKind::SessionCleared);
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Logs `transition`, refreshes the derived state and returns false if
    /// the command was rejected.
    fn apply(&mut self, transition: Transition) -> bool {
        match transition {
            Transition::Rejected => return false,
            Transition::Unchanged => {}
            Transition::FreeToggled { play_requested } => {
                tracing::debug!(play_requested, "free_playback_toggled");
            }
            Transition::SelectionStarted { start_time } => {
                tracing::info!(
                    start_secs = start_time,
                    sentences = self.selection.len(),
                    "selection_playback_started"
                );
                self.journal(SessionEventKind::SelectionPlaybackStarted {
                    start_secs: start_time,
                });
            }
            Transition::PauseRequested => {
                tracing::debug!("selection_pause_requested");
            }
            Transition::Advanced { index } => {
                tracing::debug!(index, "selection_sentence_advanced");
                self.journal(SessionEventKind::SentenceAdvanced { index });
            }
            Transition::DriftCorrected { index } => {
                tracing::debug!(index, "selection_drift_corrected");
                self.journal(SessionEventKind::DriftCorrected { index });
            }
            Transition::SelectionFinished => {
                tracing::info!("selection_playback_finished");
                self.journal(SessionEventKind::SelectionPlaybackFinished);
            }
            Transition::SelectionStopped => {
                tracing::info!("selection_playback_stopped");
                self.journal(SessionEventKind::SelectionPlaybackStopped);
            }
            Transition::Seeked { time, active_index } => {
                tracing::debug!(position_secs = time, active_index, "seeked");
                self.journal(SessionEventKind::Seeked {
                    position_secs: time,
                });
            }
            Transition::Jumped { index } => {
                tracing::debug!(index, "jumped_to_sentence");
                self.journal(SessionEventKind::JumpedToSentence { index });
            }
            Transition::SelectionRemapped { index } => {
                tracing::debug!(index, "selection_remapped");
                self.journal(SessionEventKind::SelectionRemapped { index });
            }
        }
        self.refresh();
        true
    }

    fn refresh(&mut self) {
        let state = *self.transport.state();
        let active = project(
            self.transcript.as_ref(),
            self.selection.as_slice(),
            state.current_time,
            state.mode,
            state.active_sentence_index,
        )
        .cloned();

        if let Some(transcript) = self.transcript.as_mut() {
            transcript.apply_highlight(active.as_ref());
        }
        self.scroll.observe(active.as_ref(), Instant::now());
    }

    fn record_load_failure(&mut self, err: &Error) {
        tracing::warn!(error = %err, "video_load_failed");
        self.journal(SessionEventKind::LoadFailed {
            reason: err.to_string(),
        });
        self.last_load_error = Some(err.clone());
    }

    fn journal(&self, kind: SessionEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }
}

/// Clears the processing flag when a pending load is dropped.
struct ProcessingGuard<'a, P, S> {
    session: &'a mut EditorSession<P, S>,
}

impl<P, S> Drop for ProcessingGuard<'_, P, S> {
    fn drop(&mut self) {
        self.session.processing = false;
    }
}
