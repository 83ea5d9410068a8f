// SPDX-License-Identifier: MPL-2.0
//! Fetching preview images for gallery rows.
//!
//! Images are hosted outside the store, so these requests go to arbitrary
//! URLs without the store's API key.

use std::sync::OnceLock;
use std::time::Duration;

/// Responses larger than this are not decoded as previews.
pub const MAX_THUMBNAIL_BYTES: u64 = 16 * 1024 * 1024;

const THUMBNAIL_TIMEOUT_SECS: u64 = 20;

static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

fn client() -> &'static reqwest::Client {
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(Duration::from_secs(THUMBNAIL_TIMEOUT_SECS))
            .user_agent(concat!("gallery_admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "falling back to default HTTP client for thumbnails");
                reqwest::Client::new()
            })
    })
}

/// Downloads the image at `url`.
///
/// Errors are plain strings; a failed preview only shows a placeholder.
pub async fn fetch(url: String) -> Result<Vec<u8>, String> {
    let response = client()
        .get(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("HTTP status: {}", response.status()));
    }

    if let Some(len) = response.content_length() {
        if len > MAX_THUMBNAIL_BYTES {
            return Err(format!("image too large ({len} bytes)"));
        }
    }

    let bytes = response.bytes().await.map_err(|e| e.to_string())?;
    if bytes.len() as u64 > MAX_THUMBNAIL_BYTES {
        return Err(format!("image too large ({} bytes)", bytes.len()));
    }
    Ok(bytes.to_vec())
}
