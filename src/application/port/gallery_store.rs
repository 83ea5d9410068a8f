// SPDX-License-Identifier: MPL-2.0
//! Gallery store port definition.
//!
//! This module defines the [`GalleryStore`] trait covering the four remote
//! operations the admin panel needs: list, insert, update and delete.
//!
//! # Design Notes
//!
//! - Every method issues exactly one remote call
//! - Any failure is a [`StoreError`] whose `Display` is the user-facing message
//! - No retries or rollback; a call either completes or fails

use crate::domain::gallery::{GalleryItem, GalleryRow, ItemId};
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// StoreError
// =============================================================================

/// Errors returned by a gallery store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No backend endpoint is configured.
    NotConfigured(String),

    /// The request could not be sent or the response not received.
    Request(String),

    /// The store answered with a non-success status.
    Status {
        /// HTTP status code.
        status: u16,
        /// Message reported by the store, or the status reason.
        message: String,
    },

    /// The response body could not be decoded.
    Decode(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotConfigured(reason) => write!(f, "Backend not configured: {reason}"),
            StoreError::Request(msg) => write!(f, "Request failed: {msg}"),
            StoreError::Status { status, message } => write!(f, "{message} (HTTP {status})"),
            StoreError::Decode(msg) => write!(f, "Unexpected response: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Boxed future returned by every store method.
pub type StoreFuture<T> = BoxFuture<'static, StoreResult<T>>;

// =============================================================================
// GalleryStore Trait
// =============================================================================

/// Remote table of gallery rows.
///
/// Implementations own whatever client they need and clone it into the
/// returned future, so the future does not borrow `self`.
pub trait GalleryStore: Send + Sync {
    /// Fetches every row, newest first.
    fn list(&self) -> StoreFuture<Vec<GalleryItem>>;

    /// Inserts one row. The store assigns its id and creation time.
    fn insert(&self, row: GalleryRow) -> StoreFuture<()>;

    /// Updates the row matching `id`.
    fn update(&self, id: ItemId, row: GalleryRow) -> StoreFuture<()>;

    /// Deletes the row matching `id`.
    fn delete(&self, id: ItemId) -> StoreFuture<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_store_message() {
        let err = StoreError::Status {
            status: 409,
            message: "duplicate key value violates unique constraint".into(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate key value violates unique constraint (HTTP 409)"
        );
    }

    #[test]
    fn not_configured_mentions_reason() {
        let err = StoreError::NotConfigured("missing backend url".into());
        assert!(err.to_string().contains("missing backend url"));
    }
}
