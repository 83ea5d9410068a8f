// SPDX-License-Identifier: MPL-2.0
//! Remote operations requested by the gallery panel.
//!
//! The panel's state transitions are synchronous: they return an
//! [`Operation`] describing the single remote call they want, and the caller
//! runs it with [`execute`]. The resulting [`Completion`] is fed back into the
//! panel.

use super::port::{GalleryStore, StoreResult};
use crate::domain::gallery::{GalleryItem, GalleryRow, ItemId};
use std::sync::Arc;

/// Why a list fetch was issued. Decides which indicator the completion clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrigin {
    /// First fetch after startup (full-screen loading indicator).
    Initial,
    /// User pressed refresh (spinner indicator).
    Refresh,
    /// Re-fetch after a successful write.
    AfterWrite,
}

/// One remote call.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    List(ListOrigin),
    Create(GalleryRow),
    Update(ItemId, GalleryRow),
    Delete(ItemId),
}

/// Outcome of an executed [`Operation`].
#[derive(Debug, Clone)]
pub enum Completion {
    Listed {
        origin: ListOrigin,
        result: StoreResult<Vec<GalleryItem>>,
    },
    Created(StoreResult<()>),
    Updated {
        id: ItemId,
        result: StoreResult<()>,
    },
    Deleted {
        id: ItemId,
        result: StoreResult<()>,
    },
}

impl Operation {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::List(_) => "list",
            Operation::Create(_) => "create",
            Operation::Update(..) => "update",
            Operation::Delete(_) => "delete",
        }
    }
}

/// Runs `operation` against `store`.
pub async fn execute(store: Arc<dyn GalleryStore>, operation: Operation) -> Completion {
    tracing::debug!(operation = operation.name(), "sending remote operation");
    match operation {
        Operation::List(origin) => Completion::Listed {
            origin,
            result: store.list().await,
        },
        Operation::Create(row) => Completion::Created(store.insert(row).await),
        Operation::Update(id, row) => {
            let result = store.update(id.clone(), row).await;
            Completion::Updated { id, result }
        }
        Operation::Delete(id) => {
            let result = store.delete(id.clone()).await;
            Completion::Deleted { id, result }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeStore;

    #[tokio::test]
    async fn execute_routes_each_operation_to_one_store_call() {
        let store = FakeStore::new();
        let shared: Arc<dyn GalleryStore> = store.clone();

        execute(shared.clone(), Operation::List(ListOrigin::Initial)).await;
        execute(
            shared.clone(),
            Operation::Create(GalleryRow {
                title: "A".into(),
                image: "http://x/a.png".into(),
                description: None,
                motivation: None,
            }),
        )
        .await;
        execute(shared.clone(), Operation::Delete(ItemId::Int(7))).await;

        let calls = store.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(store.list_calls(), 1);
        assert_eq!(store.insert_calls().len(), 1);
        assert_eq!(store.delete_calls(), vec![ItemId::Int(7)]);
    }

    #[tokio::test]
    async fn execute_keeps_id_on_update_completion() {
        let store = FakeStore::new();
        let completion = execute(
            store.clone(),
            Operation::Update(
                ItemId::Int(4),
                GalleryRow {
                    title: "B".into(),
                    image: "https://x/b.png".into(),
                    description: None,
                    motivation: None,
                },
            ),
        )
        .await;
        match completion {
            Completion::Updated { id, result } => {
                assert_eq!(id, ItemId::Int(4));
                assert!(result.is_ok());
            }
            other => panic!("unexpected completion: {other:?}"),
        }
    }

    #[tokio::test]
    async fn execute_passes_store_failures_through() {
        let store = FakeStore::new();
        store.fail_next("boom");
        let completion = execute(store.clone(), Operation::List(ListOrigin::Refresh)).await;
        match completion {
            Completion::Listed { origin, result } => {
                assert_eq!(origin, ListOrigin::Refresh);
                assert!(result.unwrap_err().to_string().contains("boom"));
            }
            other => panic!("unexpected completion: {other:?}"),
        }
    }
}
