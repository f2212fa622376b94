// SPDX-License-Identifier: MPL-2.0
//! Presentation-facing newtypes.
//!
//! Type-safe wrappers for the values the presentation layer tunes,
//! guaranteed to stay within their valid ranges.

use std::time::Duration;

// =============================================================================
// ScrollDelay
// =============================================================================

/// Scroll delay bounds (0 to 2000 milliseconds).
pub mod scroll_delay_bounds {
    /// Minimum delay (scroll on the next tick).
    pub const MIN: u64 = 0;
    /// Maximum delay.
    pub const MAX: u64 = 2000;
    /// Default delay, long enough for a pending list update to settle.
    pub const DEFAULT: u64 = 100;
}

/// Delay between a highlight change and the matching scroll-into-view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollDelay(u64);

impl ScrollDelay {
    /// Creates a new scroll delay in milliseconds, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(scroll_delay_bounds::MIN, scroll_delay_bounds::MAX))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ScrollDelay {
    fn default() -> Self {
        Self(scroll_delay_bounds::DEFAULT)
    }
}

// =============================================================================
// MarkerWidth
// =============================================================================

/// Minimum progress marker width bounds (percent of the bar).
pub mod marker_width_bounds {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 5.0;
    pub const DEFAULT: f64 = 0.5;
}

/// Minimum width of a selected-sentence marker on the progress bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerWidth(f64);

impl MarkerWidth {
    /// Creates a new minimum width, clamping to valid range.
    ///
    /// NaN falls back to the default.
    #[must_use]
    pub fn new(percent: f64) -> Self {
        if percent.is_nan() {
            return Self::default();
        }
        Self(percent.clamp(marker_width_bounds::MIN, marker_width_bounds::MAX))
    }

    /// Returns the width as a percentage.
    #[must_use]
    pub fn percent(self) -> f64 {
        self.0
    }
}

impl Default for MarkerWidth {
    fn default() -> Self {
        Self(marker_width_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        DEFAULT_MIN_MARKER_WIDTH_PERCENT, DEFAULT_SCROLL_DELAY_MS, MAX_MIN_MARKER_WIDTH_PERCENT,
        MAX_SCROLL_DELAY_MS,
    };

    #[test]
    fn domain_bounds_match_config() {
        assert_eq!(scroll_delay_bounds::DEFAULT, DEFAULT_SCROLL_DELAY_MS);
        assert_eq!(scroll_delay_bounds::MAX, MAX_SCROLL_DELAY_MS);
        assert_eq!(marker_width_bounds::DEFAULT, DEFAULT_MIN_MARKER_WIDTH_PERCENT);
        assert_eq!(marker_width_bounds::MAX, MAX_MIN_MARKER_WIDTH_PERCENT);
    }

    #[test]
    fn scroll_delay_clamps() {
        assert_eq!(ScrollDelay::new(10_000).millis(), scroll_delay_bounds::MAX);
        assert_eq!(ScrollDelay::new(250).millis(), 250);
        assert_eq!(ScrollDelay::new(0).as_duration(), Duration::ZERO);
    }

    #[test]
    fn scroll_delay_default() {
        assert_eq!(ScrollDelay::default().as_duration(), Duration::from_millis(100));
    }

    #[test]
    fn marker_width_clamps_and_rejects_nan() {
        assert_eq!(MarkerWidth::new(-1.0).percent(), 0.0);
        assert_eq!(MarkerWidth::new(42.0).percent(), marker_width_bounds::MAX);
        assert_eq!(MarkerWidth::new(f64::NAN), MarkerWidth::default());
        assert_eq!(MarkerWidth::new(1.5).percent(), 1.5);
    }
}
