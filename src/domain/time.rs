// SPDX-License-Identifier: MPL-2.0
//! Time display helpers for the transport bar.
//!
//! Provides `M:SS` formatting and parsing, progress percentages and the
//! per-sentence markers drawn over the progress bar.

use super::transcript::SentenceId;

/// Seconds per minute as f64 for calculations.
const SECS_PER_MINUTE: f64 = 60.0;

/// Formats seconds as `M:SS`.
///
/// Minutes are not padded, seconds always use two digits and fractional
/// seconds are floored. Negative or non-finite input formats as `0:00`.
///
/// # Examples
///
/// ```
/// use highlight_reel::domain::time::format_time;
///
/// assert_eq!(format_time(83.9), "1:23");
/// assert_eq!(format_time(645.0), "10:45");
/// assert_eq!(format_time(5.0), "0:05");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Parses an `M:SS` string back into seconds.
///
/// Returns `None` if the string is not two colon-separated unsigned integers
/// or if the seconds part is not below 60.
///
/// # Examples
///
/// ```
/// use highlight_reel::domain::time::parse_time;
///
/// assert_eq!(parse_time("1:23"), Some(83.0));
/// assert_eq!(parse_time("1:75"), None);
/// assert_eq!(parse_time("abc"), None);
/// ```
#[must_use]
pub fn parse_time(value: &str) -> Option<f64> {
    let (minutes, seconds) = value.trim().split_once(':')?;
    if minutes.is_empty()
        || seconds.len() != 2
        || !minutes.bytes().all(|b| b.is_ascii_digit())
        || !seconds.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let minutes: u32 = minutes.parse().ok()?;
    let seconds: u32 = seconds.parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    Some(f64::from(minutes) * SECS_PER_MINUTE + f64::from(seconds))
}

/// Returns `time` as a percentage of `duration`, clamped to `[0, 100]`.
///
/// A zero, negative or non-finite duration yields 0.
#[must_use]
pub fn time_percentage(time: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 || time.is_nan() {
        return 0.0;
    }
    (time / duration * 100.0).clamp(0.0, 100.0)
}

/// Position of a selected sentence on the progress bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressMarker {
    pub sentence_id: SentenceId,
    /// Left edge as a percentage of the video duration.
    pub start_percent: f64,
    /// Width as a percentage of the video duration, never below the
    /// configured minimum so that short sentences stay visible.
    pub width_percent: f64,
}

impl ProgressMarker {
    /// Builds the marker for the interval `[start, end]` of a video of
    /// length `duration`.
    #[must_use]
    pub fn new(
        sentence_id: SentenceId,
        start: f64,
        end: f64,
        duration: f64,
        min_width_percent: f64,
    ) -> Self {
        Self {
            sentence_id,
            start_percent: time_percentage(start, duration),
            width_percent: time_percentage(end - start, duration).max(min_width_percent),
        }
    }
}
