// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! - [`JournalCapacity`]: capacity of the session event journal

mod newtypes;

pub use newtypes::{journal_capacity_bounds, JournalCapacity};
