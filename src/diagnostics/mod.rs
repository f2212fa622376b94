// SPDX-License-Identifier: MPL-2.0
//! Diagnostics journal for editing sessions.
//!
//! Session transitions are captured as [`SessionEvent`]s and kept in a
//! memory-bounded circular buffer that can be exported as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`SessionEventKind`]: What happened (load, selection, transport, scroll)
//! - [`DiagnosticsCollector`]: Owns the buffer and drains the event channel
//! - [`DiagnosticsHandle`]: Cloneable, non-blocking sender held by the session

mod buffer;
mod collector;
mod events;

pub use buffer::{CircularBuffer, JournalCapacity};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{SessionEvent, SessionEventKind};
