// SPDX-License-Identifier: MPL-2.0
//! Transcript domain types.
//!
//! Pure data: sentences, sections and the transcript that owns them.

pub mod types;

pub use types::{Section, Sentence, SentenceId, Transcript};
