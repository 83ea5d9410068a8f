// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`gallery_panel`] - Item list with the add, edit and delete modals
//! - [`notifications`] - Toast notification system for user feedback
//! - [`widgets`] - Custom Iced widgets (refresh spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery_panel;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod widgets;
