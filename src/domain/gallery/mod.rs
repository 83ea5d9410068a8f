// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.

mod draft;
mod item;

pub use draft::{Draft, DraftError, Field, GalleryRow};
pub use item::{sort_newest_first, GalleryItem, ItemId};
