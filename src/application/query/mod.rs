// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! These services derive read-only views from the transcript and transport
//! state; they never mutate it.
//!
//! # Available Services
//!
//! - [`selection`]: ordered selected sentences (`SelectionIndex`)
//! - [`highlight`]: active sentence projection (`project`)

pub mod highlight;
pub mod selection;

// Re-export main types
pub use highlight::project;
pub use selection::{position_containing, position_of, SelectedSentence, SelectionIndex};
