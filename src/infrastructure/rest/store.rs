// SPDX-License-Identifier: MPL-2.0
//! HTTP gallery store speaking the PostgREST dialect.
//!
//! | Operation | Request                                                   |
//! |-----------|-----------------------------------------------------------|
//! | list      | `GET  /rest/v1/{table}?select=*&order=created_at.desc`    |
//! | insert    | `POST /rest/v1/{table}` (`Prefer: return=minimal`)        |
//! | update    | `PATCH /rest/v1/{table}?id=eq.{id}`                       |
//! | delete    | `DELETE /rest/v1/{table}?id=eq.{id}`                      |
//!
//! Every request carries the API key both as `apikey` and as a bearer token.

use super::error;
use crate::application::port::{GalleryStore, StoreError, StoreFuture, StoreResult};
use crate::config::BackendConfig;
use crate::domain::gallery::{sort_newest_first, GalleryItem, GalleryRow, ItemId};
use reqwest::{Client, Method, Request, Response};
use std::sync::Arc;
use url::Url;

const REST_PREFIX: &str = "/rest/v1";

/// Resolved endpoint for one gallery table.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Endpoint {
    base_url: String,
    api_key: String,
    table: String,
}

impl Endpoint {
    fn from_config(config: &BackendConfig) -> StoreResult<Self> {
        let base_url = config
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| StoreError::NotConfigured("no backend URL set".into()))?;
        let parsed = Url::parse(base_url).map_err(|err| {
            StoreError::NotConfigured(format!("invalid backend URL '{base_url}': {err}"))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(StoreError::NotConfigured(format!(
                "backend URL must be an http:// or https:// address (got '{base_url}')"
            )));
        }
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| StoreError::NotConfigured("no API key set".into()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            table: config.table().to_string(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}{}/{}", self.base_url, REST_PREFIX, self.table)
    }
}

/// [`GalleryStore`] backed by a remote REST endpoint.
#[derive(Debug, Clone)]
pub struct RestGalleryStore {
    http: Client,
    endpoint: Arc<Endpoint>,
}

impl RestGalleryStore {
    /// Builds a store from the `[backend]` settings.
    pub fn new(config: &BackendConfig) -> StoreResult<Self> {
        let endpoint = Endpoint::from_config(config)?;
        let http = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(concat!("gallery_admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StoreError::Request(e.to_string()))?;

        tracing::info!(
            url = %endpoint.base_url,
            table = %endpoint.table,
            "gallery store initialized"
        );

        Ok(Self {
            http,
            endpoint: Arc::new(endpoint),
        })
    }

    fn request(&self, method: Method) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.endpoint.table_url())
            .header("apikey", &self.endpoint.api_key)
            .bearer_auth(&self.endpoint.api_key)
    }

    fn list_request(&self) -> StoreResult<Request> {
        self.request(Method::GET)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .header(reqwest::header::ACCEPT, "application/json")
            .build()
            .map_err(|e| error::from_reqwest(&e))
    }

    fn insert_request(&self, row: &GalleryRow) -> StoreResult<Request> {
        self.request(Method::POST)
            .header("Prefer", "return=minimal")
            .json(row)
            .build()
            .map_err(|e| error::from_reqwest(&e))
    }

    fn update_request(&self, id: &ItemId, row: &GalleryRow) -> StoreResult<Request> {
        self.request(Method::PATCH)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=minimal")
            .json(row)
            .build()
            .map_err(|e| error::from_reqwest(&e))
    }

    fn delete_request(&self, id: &ItemId) -> StoreResult<Request> {
        self.request(Method::DELETE)
            .query(&[("id", format!("eq.{id}"))])
            .build()
            .map_err(|e| error::from_reqwest(&e))
    }
}

/// Sends `request` and turns non-2xx answers into [`StoreError::Status`].
async fn send(http: Client, request: StoreResult<Request>) -> StoreResult<Response> {
    let request = request?;
    let method = request.method().clone();
    let response = http
        .execute(request)
        .await
        .map_err(|e| error::from_reqwest(&e))?;

    let status = response.status();
    if status.is_success() {
        tracing::debug!(%method, status = status.as_u16(), "store request succeeded");
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(error::from_response_body(
        status.as_u16(),
        status.canonical_reason(),
        &body,
    ))
}

impl GalleryStore for RestGalleryStore {
    fn list(&self) -> StoreFuture<Vec<GalleryItem>> {
        let http = self.http.clone();
        let request = self.list_request();
        Box::pin(async move {
            let response = send(http, request).await?;
            let mut items: Vec<GalleryItem> = response
                .json()
                .await
                .map_err(|e| StoreError::Decode(e.to_string()))?;
            sort_newest_first(&mut items);
            Ok(items)
        })
    }

    fn insert(&self, row: GalleryRow) -> StoreFuture<()> {
        let http = self.http.clone();
        let request = self.insert_request(&row);
        Box::pin(async move { send(http, request).await.map(|_| ()) })
    }

    fn update(&self, id: ItemId, row: GalleryRow) -> StoreFuture<()> {
        let http = self.http.clone();
        let request = self.update_request(&id, &row);
        Box::pin(async move { send(http, request).await.map(|_| ()) })
    }

    fn delete(&self, id: ItemId) -> StoreFuture<()> {
        let http = self.http.clone();
        let request = self.delete_request(&id);
        Box::pin(async move { send(http, request).await.map(|_| ()) })
    }
}
