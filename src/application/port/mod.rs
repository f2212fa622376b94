// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that the presentation layer and
//! infrastructure adapters implement. These traits use only domain types,
//! keeping the playback core independent of concrete media elements,
//! transcription services and widget toolkits.
//!
//! # Available Ports
//!
//! - [`player`]: the external media element (time, play, pause)
//! - [`transcription`]: video to transcript service
//! - [`scroll`]: the scrollable transcript list
//!
//! # Example
//!
//! ```
//! use highlight_reel::application::port::Player;
//!
//! fn restart(player: &mut impl Player) {
//!     player.set_current_time(0.0);
//!     player.play();
//! }
//! ```

pub mod player;
pub mod scroll;
pub mod transcription;

// Re-export main types for convenience
pub use player::Player;
pub use scroll::{ScrollAlignment, ScrollRequest, ScrollSink, ScrollTarget};
pub use transcription::Transcriber;
