// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports and the operations that drive them.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`operation`]: Remote operations requested by the UI and their execution
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer asks for [`operation::Operation`]s and never talks to
//!   the network directly

pub mod operation;
pub mod port;
