// SPDX-License-Identifier: MPL-2.0
//! Gallery records as returned by the remote store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier of a gallery row.
///
/// Backends expose either integer or UUID/text primary keys, so both JSON
/// numbers and strings are accepted. The client never fabricates one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Int(id) => write!(f, "{id}"),
            ItemId::Text(id) => write!(f, "{id}"),
        }
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        ItemId::Int(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId::Text(id.to_string())
    }
}

/// A single gallery record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: ItemId,
    pub title: String,
    /// Absolute URL of the hosted image.
    pub image: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub motivation: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Orders items newest first.
///
/// The sort is stable, so a list already ordered by the store is left as is.
pub fn sort_newest_first(items: &mut [GalleryItem]) {
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
