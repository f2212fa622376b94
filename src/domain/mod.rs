// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core playback and transcript types with no I/O.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Apart from `serde` derives on the transcript model it depends only on
//! `std`.
//!
//! # Modules
//!
//! - [`diagnostics`]: Journal sizing ([`JournalCapacity`](diagnostics::JournalCapacity))
//! - [`error`]: Domain error types ([`TranscriptionError`](error::TranscriptionError))
//! - [`playback`]: Transport state ([`PlaybackMode`](playback::PlaybackMode),
//!   [`TransportState`](playback::TransportState))
//! - [`time`]: `M:SS` formatting, progress percentages and markers
//! - [`transcript`]: Interval model ([`Sentence`](transcript::Sentence),
//!   [`Section`](transcript::Section), [`Transcript`](transcript::Transcript))
//! - [`ui`]: Presentation tuning values ([`ScrollDelay`](ui::ScrollDelay),
//!   [`MarkerWidth`](ui::MarkerWidth))

pub mod diagnostics;
pub mod error;
pub mod playback;
pub mod time;
pub mod transcript;
pub mod ui;
