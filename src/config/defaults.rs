// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Backend**: Table name and HTTP timeouts
//! - **Display**: Thumbnail cache sizing

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Table holding gallery rows.
pub const DEFAULT_TABLE: &str = "gallery_items";

/// Whole-request timeout for store calls (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection establishment timeout (in seconds).
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Upper bound accepted for either timeout (in seconds).
pub const MAX_TIMEOUT_SECS: u64 = 300;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Number of decoded thumbnails kept in memory.
pub const DEFAULT_THUMBNAIL_CACHE_SIZE: usize = 64;

/// Minimum thumbnail cache size.
pub const MIN_THUMBNAIL_CACHE_SIZE: usize = 1;

/// Maximum thumbnail cache size.
pub const MAX_THUMBNAIL_CACHE_SIZE: usize = 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_cache_default_is_within_bounds() {
        assert!(DEFAULT_THUMBNAIL_CACHE_SIZE >= MIN_THUMBNAIL_CACHE_SIZE);
        assert!(DEFAULT_THUMBNAIL_CACHE_SIZE <= MAX_THUMBNAIL_CACHE_SIZE);
    }

    #[test]
    fn timeouts_are_within_bounds() {
        assert!(DEFAULT_CONNECT_TIMEOUT_SECS <= DEFAULT_REQUEST_TIMEOUT_SECS);
        assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_TIMEOUT_SECS);
    }
}
