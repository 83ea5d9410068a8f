// SPDX-License-Identifier: MPL-2.0
//! Bounded cache of row previews, keyed by image URL.

use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Ready(Handle),
    Failed,
}

#[derive(Debug)]
pub struct ThumbnailCache {
    entries: LruCache<String, Thumbnail>,
}

impl ThumbnailCache {
    /// A zero capacity is treated as one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Marks `url` as loading and returns `true` when it needs fetching.
    ///
    /// URLs already cached, loaded or not, are only bumped in recency.
    pub fn request(&mut self, url: &str) -> bool {
        if self.entries.get(url).is_some() {
            return false;
        }
        self.entries.put(url.to_string(), Thumbnail::Loading);
        true
    }

    /// Grows the cache so `count` previews fit at once.
    ///
    /// Never shrinks; the configured size is a floor.
    pub fn reserve(&mut self, count: usize) {
        if let Some(capacity) = NonZeroUsize::new(count) {
            if capacity > self.entries.cap() {
                tracing::debug!(from = self.entries.cap().get(), to = count, "growing thumbnail cache");
                self.entries.resize(capacity);
            }
        }
    }

    /// Stores the outcome of a fetch.
    ///
    /// Results for URLs evicted since their request are dropped, so a late
    /// download never pushes out a preview still on screen.
    pub fn resolve(&mut self, url: String, result: Result<Vec<u8>, String>) {
        let Some(slot) = self.entries.peek_mut(&url) else {
            tracing::debug!(%url, "dropping thumbnail for evicted entry");
            return;
        };
        *slot = match result {
            Ok(bytes) => Thumbnail::Ready(Handle::from_bytes(bytes)),
            Err(err) => {
                tracing::debug!(%url, error = %err, "thumbnail unavailable");
                Thumbnail::Failed
            }
        };
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    /// Looks up `url` without touching recency (usable from `view`).
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&Thumbnail> {
        self.entries.peek(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
