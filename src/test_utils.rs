// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and a recording player.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::application::port::Player;

/// Default epsilon for f64 comparisons.
pub const F64_EPSILON: f64 = 1e-10;

/// A call made on [`RecordingPlayer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerCall {
    Seek(f64),
    Play,
    Pause,
}

/// In-memory player that clamps seeks to its duration and records calls.
///
/// Play and pause do not emit notifications; tests feed events by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingPlayer {
    pub time: f64,
    pub duration: f64,
    pub calls: Vec<PlayerCall>,
}

impl RecordingPlayer {
    pub fn new(duration: f64) -> Self {
        Self {
            time: 0.0,
            duration,
            calls: Vec::new(),
        }
    }

    /// Returns the seek targets in call order.
    pub fn seeks(&self) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                PlayerCall::Seek(time) => Some(*time),
                _ => None,
            })
            .collect()
    }
}

impl Player for RecordingPlayer {
    fn current_time(&self) -> f64 {
        self.time
    }

    fn set_current_time(&mut self, time: f64) {
        self.time = time.clamp(0.0, self.duration);
        self.calls.push(PlayerCall::Seek(self.time));
    }

    fn play(&mut self) {
        self.calls.push(PlayerCall::Play);
    }

    fn pause(&mut self) {
        self.calls.push(PlayerCall::Pause);
    }
}
