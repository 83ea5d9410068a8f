// SPDX-License-Identifier: MPL-2.0
//! Domain layer - gallery records and the drafts that edit them.
//!
//! Types here carry no UI or network handles. The only external crates used
//! are `serde` (row encoding) and `chrono` (creation timestamps).
//!
//! # Modules
//!
//! - [`gallery`]: Gallery records ([`GalleryItem`](gallery::GalleryItem),
//!   [`ItemId`](gallery::ItemId)), form drafts ([`Draft`](gallery::Draft))
//!   and the validated write payload ([`GalleryRow`](gallery::GalleryRow))

pub mod gallery;
