// SPDX-License-Identifier: MPL-2.0
//! `gallery_admin` is a desktop admin panel for the gallery items stored
//! behind a PostgREST backend, built with the Iced GUI framework.
//!
//! Items can be listed, added, edited and deleted. Every write is followed
//! by a fresh fetch of the list, and outcomes are reported as toasts.

#![doc(html_root_url = "https://docs.rs/gallery_admin/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
mod test_utils;
