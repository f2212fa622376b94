// SPDX-License-Identifier: MPL-2.0
//! Scroll port definition.
//!
//! The transcript list lives in the presentation layer. The editor only asks
//! it to bring an element into view with a given vertical alignment.

use crate::domain::transcript::SentenceId;

/// Element of the transcript list to bring into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    Sentence(SentenceId),
    Section(String),
}

/// Vertical alignment of the target once scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlignment {
    /// Center the target in the viewport.
    Center,
    /// Align the target with the top of the viewport.
    Start,
}

/// A single "bring into view" request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: ScrollTarget,
    pub alignment: ScrollAlignment,
}

impl ScrollRequest {
    /// Sentences are centered.
    #[must_use]
    pub fn sentence(id: SentenceId) -> Self {
        Self {
            target: ScrollTarget::Sentence(id),
            alignment: ScrollAlignment::Center,
        }
    }

    /// Section headers are aligned to the top.
    #[must_use]
    pub fn section(id: impl Into<String>) -> Self {
        Self {
            target: ScrollTarget::Section(id.into()),
            alignment: ScrollAlignment::Start,
        }
    }
}

/// Port for the scrollable transcript list.
pub trait ScrollSink {
    fn scroll_into_view(&mut self, request: ScrollRequest);
}

/// Collects requests, for headless use and tests.
impl ScrollSink for Vec<ScrollRequest> {
    fn scroll_into_view(&mut self, request: ScrollRequest) {
        self.push(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_requests_are_centered() {
        let request = ScrollRequest::sentence("s1".into());
        assert_eq!(request.alignment, ScrollAlignment::Center);
        assert_eq!(request.target, ScrollTarget::Sentence("s1".into()));
    }

    #[test]
    fn section_requests_align_to_start() {
        let request = ScrollRequest::section("intro");
        assert_eq!(request.alignment, ScrollAlignment::Start);
        assert_eq!(request.target, ScrollTarget::Section("intro".into()));
    }

    #[test]
    fn vec_sink_records_in_order() {
        let mut sink: Vec<ScrollRequest> = Vec::new();
        sink.scroll_into_view(ScrollRequest::section("a"));
        sink.scroll_into_view(ScrollRequest::sentence("s2".into()));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[1].target, ScrollTarget::Sentence("s2".into()));
    }
}
