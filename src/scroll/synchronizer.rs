// SPDX-License-Identifier: MPL-2.0
//! Debounced scroll synchronization.
//!
//! Every time the highlight is projected, [`ScrollSynchronizer::observe`]
//! receives the active sentence. A sentence different from the last one
//! scrolled to schedules a request that fires once its delay has elapsed,
//! giving the presentation layer time to settle. Scheduling again replaces
//! the pending request.
//!
//! The "last scrolled" marker is only replaced by another sentence; a `None`
//! highlight leaves it untouched, so leaving a sentence and coming back to
//! it does not scroll again.

use crate::application::port::{ScrollRequest, ScrollSink};
use crate::domain::transcript::SentenceId;
use crate::domain::ui::ScrollDelay;
use std::time::{Duration, Instant};

/// A scroll request waiting for its deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingScroll {
    sentence_id: SentenceId,
    deadline: Instant,
}

impl PendingScroll {
    #[must_use]
    pub fn sentence_id(&self) -> &SentenceId {
        &self.sentence_id
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Returns true once `now` has reached the deadline.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

#[derive(Debug, Clone)]
pub struct ScrollSynchronizer {
    delay: Duration,
    last_scrolled: Option<SentenceId>,
    pending: Option<PendingScroll>,
}

impl Default for ScrollSynchronizer {
    fn default() -> Self {
        Self::new(ScrollDelay::default())
    }
}

impl ScrollSynchronizer {
    #[must_use]
    pub fn new(delay: ScrollDelay) -> Self {
        Self {
            delay: delay.as_duration(),
            last_scrolled: None,
            pending: None,
        }
    }

    /// Feeds the latest projection result.
    ///
    /// Returns true if a new scroll was scheduled.
    pub fn observe(&mut self, active: Option<&SentenceId>, now: Instant) -> bool {
        let Some(id) = active else {
            return false;
        };
        if self.last_scrolled.as_ref() == Some(id) {
            return false;
        }
        self.pending = Some(PendingScroll {
            sentence_id: id.clone(),
            deadline: now + self.delay,
        });
        self.last_scrolled = Some(id.clone());
        true
    }

    /// Fires the pending request if it is due.
    ///
    /// Returns the id that was scrolled to, if any.
    pub fn tick<S: ScrollSink + ?Sized>(&mut self, now: Instant, sink: &mut S) -> Option<SentenceId> {
        if !self.pending.as_ref().is_some_and(|pending| pending.is_due(now)) {
            return None;
        }
        let pending = self.pending.take()?;
        sink.scroll_into_view(ScrollRequest::sentence(pending.sentence_id.clone()));
        Some(pending.sentence_id)
    }

    /// Drops the pending request. Safe to call when nothing is pending or
    /// the request already fired.
    ///
    /// Returns true if a request was dropped.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Drops the pending request and forgets the last scrolled sentence.
    pub fn reset(&mut self) {
        self.pending = None;
        self.last_scrolled = None;
    }

    #[must_use]
    pub fn pending(&self) -> Option<&PendingScroll> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn last_scrolled(&self) -> Option<&SentenceId> {
        self.last_scrolled.as_ref()
    }

    /// Centers `id` in the list right away.
    pub fn scroll_to_sentence<S: ScrollSink + ?Sized>(&self, id: &SentenceId, sink: &mut S) {
        sink.scroll_into_view(ScrollRequest::sentence(id.clone()));
    }

    /// Aligns the header of section `id` with the top of the list right away.
    pub fn scroll_to_section<S: ScrollSink + ?Sized>(&self, id: &str, sink: &mut S) {
        sink.scroll_into_view(ScrollRequest::section(id));
    }
}
