// SPDX-License-Identifier: MPL-2.0
//! REST adapter for the remote gallery table.
//!
//! - [`RestGalleryStore`]: the [`GalleryStore`] implementation
//! - [`UnavailableStore`]: stand-in used when no backend is configured
//! - [`shared`]: process-wide, lazily initialized store handle
//! - [`thumbnail`]: preview image downloads

mod error;
mod store;
pub mod thumbnail;

pub use store::RestGalleryStore;

use crate::application::port::{GalleryStore, StoreError, StoreFuture};
use crate::config::BackendConfig;
use crate::domain::gallery::{GalleryItem, GalleryRow, ItemId};
use std::sync::{Arc, OnceLock};

static SHARED: OnceLock<Arc<RestGalleryStore>> = OnceLock::new();

/// Returns the process-wide store, creating it from `config` on first use.
///
/// Later calls return the same handle regardless of `config`. A failed
/// initialization is not cached, so a corrected config can be retried.
pub fn shared(config: &BackendConfig) -> Result<Arc<dyn GalleryStore>, StoreError> {
    if let Some(store) = SHARED.get() {
        let store: Arc<dyn GalleryStore> = store.clone();
        return Ok(store);
    }
    let created = Arc::new(RestGalleryStore::new(config)?);
    let store: Arc<dyn GalleryStore> = SHARED.get_or_init(|| created).clone();
    Ok(store)
}

/// Store whose every call fails with [`StoreError::NotConfigured`].
///
/// Lets the UI start and report the problem through its normal failure path.
#[derive(Debug, Clone)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail<T: Send + 'static>(&self) -> StoreFuture<T> {
        let err = StoreError::NotConfigured(self.reason.clone());
        Box::pin(async move { Err(err) })
    }
}

impl GalleryStore for UnavailableStore {
    fn list(&self) -> StoreFuture<Vec<GalleryItem>> {
        self.fail()
    }

    fn insert(&self, _row: GalleryRow) -> StoreFuture<()> {
        self.fail()
    }

    fn update(&self, _id: ItemId, _row: GalleryRow) -> StoreFuture<()> {
        self.fail()
    }

    fn delete(&self, _id: ItemId) -> StoreFuture<()> {
        self.fail()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let store = UnavailableStore::new("no backend URL set");
        let err = store.list().await.unwrap_err();
        assert_eq!(err, StoreError::NotConfigured("no backend URL set".into()));
        assert!(store.delete(ItemId::Int(1)).await.is_err());
    }

    #[test]
    fn shared_rejects_missing_config_without_caching() {
        let err = shared(&BackendConfig::default()).err();
        assert!(matches!(err, Some(StoreError::NotConfigured(_))));
    }
}
