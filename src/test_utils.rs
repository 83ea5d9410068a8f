// SPDX-License-Identifier: MPL-2.0
//! Test utilities shared by unit tests.
//!
//! [`FakeStore`] is an in-memory [`GalleryStore`] that records every call so
//! tests can assert exactly which remote operations a flow issued.

use crate::application::port::{GalleryStore, StoreError, StoreFuture};
use crate::domain::gallery::{GalleryItem, GalleryRow, ItemId};
use chrono::{Duration, TimeZone, Utc};
use std::sync::{Arc, Mutex};

/// A recorded store call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Insert(GalleryRow),
    Update(ItemId, GalleryRow),
    Delete(ItemId),
}

#[derive(Debug, Default)]
struct Inner {
    items: Vec<GalleryItem>,
    calls: Vec<Call>,
    fail_next: Option<String>,
    next_id: i64,
}

/// In-memory gallery table.
#[derive(Debug, Default)]
pub struct FakeStore {
    inner: Mutex<Inner>,
}

/// Builds an item created `day` days after a fixed epoch.
pub fn sample_item(id: i64, day: i64) -> GalleryItem {
    let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    GalleryItem {
        id: ItemId::Int(id),
        title: format!("Item {id}"),
        image: format!("https://cdn.example.com/{id}.png"),
        description: Some(format!("Description {id}")),
        motivation: None,
        created_at: epoch + Duration::days(day),
    }
}

impl FakeStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Creates a store pre-filled with `items` (kept newest first).
    pub fn with_items(mut items: Vec<GalleryItem>) -> Arc<Self> {
        crate::domain::gallery::sort_newest_first(&mut items);
        let next_id = items
            .iter()
            .filter_map(|item| match item.id {
                ItemId::Int(id) => Some(id),
                ItemId::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;
        Arc::new(Self {
            inner: Mutex::new(Inner {
                items,
                next_id,
                ..Inner::default()
            }),
        })
    }

    /// Makes the next call fail with `message`.
    pub fn fail_next(&self, message: &str) {
        self.inner.lock().unwrap().fail_next = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn items(&self) -> Vec<GalleryItem> {
        self.inner.lock().unwrap().items.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls().iter().filter(|c| **c == Call::List).count()
    }

    pub fn insert_calls(&self) -> Vec<GalleryRow> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Insert(row) => Some(row),
                _ => None,
            })
            .collect()
    }

    pub fn update_calls(&self) -> Vec<(ItemId, GalleryRow)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Update(id, row) => Some((id, row)),
                _ => None,
            })
            .collect()
    }

    pub fn delete_calls(&self) -> Vec<ItemId> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Delete(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(call.clone());
        if let Some(message) = inner.fail_next.take() {
            return Err(StoreError::Request(message));
        }
        match call {
            Call::List => {}
            Call::Insert(row) => {
                let id = inner.next_id;
                inner.next_id += 1;
                inner.items.insert(
                    0,
                    GalleryItem {
                        id: ItemId::Int(id),
                        title: row.title,
                        image: row.image,
                        description: row.description,
                        motivation: row.motivation,
                        created_at: Utc::now(),
                    },
                );
            }
            Call::Update(id, row) => {
                if let Some(item) = inner.items.iter_mut().find(|item| item.id == id) {
                    item.title = row.title;
                    item.image = row.image;
                    item.description = row.description;
                    item.motivation = row.motivation;
                }
            }
            Call::Delete(id) => inner.items.retain(|item| item.id != id),
        }
        Ok(())
    }
}

impl GalleryStore for FakeStore {
    fn list(&self) -> StoreFuture<Vec<GalleryItem>> {
        let result = self.record(Call::List).map(|()| self.items());
        Box::pin(async move { result })
    }

    fn insert(&self, row: GalleryRow) -> StoreFuture<()> {
        let result = self.record(Call::Insert(row));
        Box::pin(async move { result })
    }

    fn update(&self, id: ItemId, row: GalleryRow) -> StoreFuture<()> {
        let result = self.record(Call::Update(id, row));
        Box::pin(async move { result })
    }

    fn delete(&self, id: ItemId) -> StoreFuture<()> {
        let result = self.record(Call::Delete(id));
        Box::pin(async move { result })
    }
}
