// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`gallery_store`]: Remote persistence of gallery rows
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no `reqwest` types)
//! - Implementations are `Send + Sync` and shared behind an `Arc`
//! - Futures are boxed and `'static` so callers can hand them to `Task::perform`

pub mod gallery_store;

pub use gallery_store::{GalleryStore, StoreError, StoreFuture, StoreResult};
