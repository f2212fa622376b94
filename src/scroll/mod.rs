// SPDX-License-Identifier: MPL-2.0
//! Keeps the transcript list scrolled to the active sentence.
//!
//! - [`ScrollSynchronizer`]: debounced, deduplicated "bring into view"
//! - [`PendingScroll`]: the scheduled request, fired by [`ScrollSynchronizer::tick`]

mod synchronizer;

pub use synchronizer::{PendingScroll, ScrollSynchronizer};
