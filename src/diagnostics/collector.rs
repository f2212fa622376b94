// SPDX-License-Identifier: MPL-2.0
//! Journal collector for session events.
//!
//! The collector receives events from the editing session and stores them in
//! a circular buffer.

use std::time::Instant;

use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

use super::{CircularBuffer, JournalCapacity, SessionEvent, SessionEventKind};
use crate::config::SessionSettings;

/// Handle for sending session events to the collector.
///
/// Cheap to clone. Events travel over a bounded channel and are dropped
/// when it is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<SessionEvent>,
}

impl DiagnosticsHandle {
    /// Records an event without blocking.
    pub fn log(&self, kind: SessionEventKind) {
        let _ = self.event_tx.try_send(SessionEvent::new(kind));
    }
}

/// Central collector for session events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<SessionEvent>,
    event_rx: Receiver<SessionEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<SessionEvent>,
    collection_started_at: Instant,
}

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Event as written by [`DiagnosticsCollector::export_json`].
#[derive(Debug, Serialize)]
struct ExportedEvent<'a> {
    /// Milliseconds since the collector was created.
    offset_ms: u64,
    #[serde(flatten)]
    kind: &'a SessionEventKind,
}

#[derive(Debug, Serialize)]
struct ExportedJournal<'a> {
    collection_duration_ms: u64,
    event_count: usize,
    events: Vec<ExportedEvent<'a>>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: JournalCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
        }
    }

    /// Creates a collector sized by the journal capacity of `settings`.
    #[must_use]
    pub fn from_settings(settings: &SessionSettings) -> Self {
        Self::new(settings.journal_capacity)
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer.
    ///
    /// Call this periodically, e.g. from the same loop that ticks the session.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Records an event directly, bypassing the channel.
    pub fn log(&mut self, kind: SessionEventKind) {
        self.buffer.push(SessionEvent::new(kind));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &SessionEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Renders the journal as pretty-printed JSON with timestamps relative
    /// to the creation of the collector.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    #[allow(clippy::cast_possible_truncation)] // Session lengths in ms fit in u64
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events = self
            .buffer
            .iter()
            .map(|event| ExportedEvent {
                offset_ms: event
                    .timestamp
                    .saturating_duration_since(self.collection_started_at)
                    .as_millis() as u64,
                kind: &event.kind,
            })
            .collect::<Vec<_>>();
        let journal = ExportedJournal {
            collection_duration_ms: self.collection_started_at.elapsed().as_millis() as u64,
            event_count: events.len(),
            events,
        };
        serde_json::to_string_pretty(&journal)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(JournalCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_starts_empty() {
        let collector = DiagnosticsCollector::default();
        assert!(collector.is_empty());
        assert_eq!(collector.capacity(), 256);
    }

    #[test]
    fn collector_uses_configured_journal_capacity() {
        let settings = SessionSettings {
            journal_capacity: JournalCapacity::new(32),
            ..SessionSettings::default()
        };
        let mut collector = DiagnosticsCollector::from_settings(&settings);
        assert_eq!(collector.capacity(), 32);

        let handle = collector.handle();
        for index in 0..40 {
            handle.log(SessionEventKind::SentenceAdvanced { index });
        }
        collector.process_pending();
        assert_eq!(collector.len(), 32);
        assert_eq!(
            collector.iter().next().map(|event| event.kind.clone()),
            Some(SessionEventKind::SentenceAdvanced { index: 8 })
        );
    }

    #[test]
    fn handle_events_arrive_after_process_pending() {
        let mut collector = DiagnosticsCollector::new(JournalCapacity::new(16));
        let handle = collector.handle();

        handle.log(SessionEventKind::SentenceAdvanced { index: 1 });
        handle.clone().log(SessionEventKind::SelectionPlaybackFinished);
        assert!(collector.is_empty());

        collector.process_pending();
        let kinds: Vec<_> = collector.iter().map(|event| event.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                SessionEventKind::SentenceAdvanced { index: 1 },
                SessionEventKind::SelectionPlaybackFinished,
            ]
        );
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let mut collector = DiagnosticsCollector::new(JournalCapacity::new(4096));
        let handle = collector.handle();
        for index in 0..DEFAULT_CHANNEL_CAPACITY + 10 {
            handle.log(SessionEventKind::JumpedToSentence { index });
        }
        collector.process_pending();
        assert_eq!(collector.len(), DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn journal_evicts_oldest_at_capacity() {
        let mut collector = DiagnosticsCollector::new(JournalCapacity::new(16));
        for index in 0..20 {
            collector.log(SessionEventKind::SentenceAdvanced { index });
        }
        assert_eq!(collector.len(), 16);
        assert!(matches!(
            collector.iter().next().map(|event| &event.kind),
            Some(SessionEventKind::SentenceAdvanced { index: 4 })
        ));
    }

    #[test]
    fn export_json_lists_events_with_offsets() {
        let mut collector = DiagnosticsCollector::default();
        collector.log(SessionEventKind::Seeked { position_secs: 12.0 });
        collector.log(SessionEventKind::SessionCleared);

        let json = collector.export_json().expect("export should succeed");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["event_count"], 2);
        assert_eq!(value["events"][0]["type"], "seeked");
        assert_eq!(value["events"][0]["position_secs"], 12.0);
        assert!(value["events"][1]["offset_ms"].is_u64());
    }

    #[test]
    fn clear_removes_all_events() {
        let mut collector = DiagnosticsCollector::default();
        collector.log(SessionEventKind::SessionCleared);
        collector.clear();
        assert!(collector.is_empty());
    }
}
