// SPDX-License-Identifier: MPL-2.0
//! Conversion of failed HTTP exchanges into [`StoreError`]s.

use crate::application::port::StoreError;
use serde::Deserialize;

/// Error body returned by PostgREST-compatible endpoints.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    // Gateways in front of the store use these instead of `message`.
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

/// Builds the error for a non-success response.
///
/// Prefers the store's own message, then the raw body, then the status reason.
pub(super) fn from_response_body(status: u16, reason: Option<&str>, body: &str) -> StoreError {
    let body = body.trim();

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if parsed.code.is_some() || parsed.details.is_some() || parsed.hint.is_some() {
            tracing::debug!(
                status,
                code = parsed.code.as_deref().unwrap_or_default(),
                details = parsed.details.as_deref().unwrap_or_default(),
                hint = parsed.hint.as_deref().unwrap_or_default(),
                "store rejected request"
            );
        }
        if let Some(message) = parsed
            .message
            .or(parsed.msg)
            .or(parsed.error)
            .filter(|m| !m.trim().is_empty())
        {
            return StoreError::Status { status, message };
        }
    }

    let message = if !body.is_empty() && !body.starts_with('{') && !body.starts_with('<') {
        body.to_string()
    } else {
        reason.unwrap_or("Request rejected").to_string()
    };
    StoreError::Status { status, message }
}

/// Maps a transport-level failure.
pub(super) fn from_reqwest(err: &reqwest::Error) -> StoreError {
    if err.is_decode() {
        StoreError::Decode(err.to_string())
    } else if err.is_timeout() {
        StoreError::Request(format!("timed out: {err}"))
    } else {
        StoreError::Request(err.to_string())
    }
}
