// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Scroll**: delay before the transcript list follows the highlight
//! - **Progress**: minimum width of selected-sentence markers
//! - **Diagnostics**: session journal capacity
//! - **Transcription**: simulated processing latency

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Default delay before scrolling the active sentence into view (ms).
pub const DEFAULT_SCROLL_DELAY_MS: u64 = 100;

/// Minimum scroll delay (ms).
pub const MIN_SCROLL_DELAY_MS: u64 = 0;

/// Maximum scroll delay (ms).
pub const MAX_SCROLL_DELAY_MS: u64 = 2000;

// ==========================================================================
// Progress Bar Defaults
// ==========================================================================

/// Default minimum width of a progress marker (percent of the bar).
pub const DEFAULT_MIN_MARKER_WIDTH_PERCENT: f64 = 0.5;

/// Largest accepted minimum marker width (percent of the bar).
pub const MAX_MIN_MARKER_WIDTH_PERCENT: f64 = 5.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of events kept by the session journal.
pub const DEFAULT_JOURNAL_CAPACITY: usize = 256;

/// Minimum journal capacity.
pub const MIN_JOURNAL_CAPACITY: usize = 16;

/// Maximum journal capacity.
pub const MAX_JOURNAL_CAPACITY: usize = 4096;

// ==========================================================================
// Transcription Defaults
// ==========================================================================

/// Default simulated processing latency of the file transcriber (ms).
pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 0;

/// Maximum simulated processing latency (ms).
pub const MAX_PROCESSING_DELAY_MS: u64 = 30_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MAX_SCROLL_DELAY_MS >= MIN_SCROLL_DELAY_MS);
    assert!(DEFAULT_SCROLL_DELAY_MS >= MIN_SCROLL_DELAY_MS);
    assert!(DEFAULT_SCROLL_DELAY_MS <= MAX_SCROLL_DELAY_MS);

    assert!(DEFAULT_MIN_MARKER_WIDTH_PERCENT >= 0.0);
    assert!(DEFAULT_MIN_MARKER_WIDTH_PERCENT <= MAX_MIN_MARKER_WIDTH_PERCENT);

    assert!(MIN_JOURNAL_CAPACITY > 0);
    assert!(MAX_JOURNAL_CAPACITY >= MIN_JOURNAL_CAPACITY);
    assert!(DEFAULT_JOURNAL_CAPACITY >= MIN_JOURNAL_CAPACITY);
    assert!(DEFAULT_JOURNAL_CAPACITY <= MAX_JOURNAL_CAPACITY);

    assert!(DEFAULT_PROCESSING_DELAY_MS <= MAX_PROCESSING_DELAY_MS);
};
