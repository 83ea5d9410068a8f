// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`rest`]: PostgREST-style HTTP store (implements [`GalleryStore`]) and
//!   thumbnail fetching
//!
//! [`GalleryStore`]: crate::application::port::GalleryStore

pub mod rest;

pub use rest::{RestGalleryStore, UnavailableStore};
