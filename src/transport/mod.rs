// SPDX-License-Identifier: MPL-2.0
//! Playback transport: clock adapter and the selection-aware state machine.

pub mod clock;
pub mod state;

pub use clock::{PlaybackClock, PlayerEvent};
pub use state::{TransportController, Transition};
