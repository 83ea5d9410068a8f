// SPDX-License-Identifier: MPL-2.0
//! Form drafts and the validated payload written to the store.
//!
//! A [`Draft`] holds raw text exactly as typed. It only becomes a
//! [`GalleryRow`] through [`Draft::validate`], so nothing unvalidated ever
//! reaches the network layer.

use super::item::GalleryItem;
use serde::Serialize;
use std::fmt;
use url::Url;

/// Editable fields of a gallery item, as typed into a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub image: String,
    pub description: String,
    pub motivation: String,
}

/// Identifies a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Image,
    Description,
    Motivation,
}

/// Reasons a draft cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    MissingTitle,
    MissingImage,
    InvalidImageUrl,
}

impl DraftError {
    /// Returns the i18n message key for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DraftError::MissingTitle => "form-error-title-required",
            DraftError::MissingImage => "form-error-image-required",
            DraftError::InvalidImageUrl => "form-error-image-invalid",
        }
    }

    /// The field the error should be displayed next to.
    pub fn field(&self) -> Field {
        match self {
            DraftError::MissingTitle => Field::Title,
            DraftError::MissingImage | DraftError::InvalidImageUrl => Field::Image,
        }
    }
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::MissingTitle => write!(f, "Title is required"),
            DraftError::MissingImage => write!(f, "Image URL is required"),
            DraftError::InvalidImageUrl => write!(f, "Image URL must be an http(s) address"),
        }
    }
}

/// Row payload sent on insert and update.
///
/// Optional columns serialize as `null` so clearing a field on edit clears
/// it in the store too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryRow {
    pub title: String,
    pub image: String,
    pub description: Option<String>,
    pub motivation: Option<String>,
}

impl Draft {
    /// Mirrors an existing item into an editable draft.
    pub fn from_item(item: &GalleryItem) -> Self {
        Self {
            title: item.title.clone(),
            image: item.image.clone(),
            description: item.description.clone().unwrap_or_default(),
            motivation: item.motivation.clone().unwrap_or_default(),
        }
    }

    /// Returns the current text of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Image => &self.image,
            Field::Description => &self.description,
            Field::Motivation => &self.motivation,
        }
    }

    /// Replaces the text of a field.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::Image => self.image = value,
            Field::Description => self.description = value,
            Field::Motivation => self.motivation = value,
        }
    }

    /// Checks required fields and produces the payload to write.
    pub fn validate(&self) -> Result<GalleryRow, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::MissingTitle);
        }

        let image = self.image.trim();
        if image.is_empty() {
            return Err(DraftError::MissingImage);
        }
        if !is_http_url(image) {
            return Err(DraftError::InvalidImageUrl);
        }

        Ok(GalleryRow {
            title: title.to_string(),
            image: image.to_string(),
            description: non_blank(&self.description),
            motivation: non_blank(&self.motivation),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Accepts absolute `http`/`https` URLs with a non-empty host.
/// Absolute `http`/`https` URL with a host.
fn is_http_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}
