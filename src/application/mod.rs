// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports and read-side queries.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Query services (CQRS read-side)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The transport and the editing session consume both

pub mod port;
pub mod query;
