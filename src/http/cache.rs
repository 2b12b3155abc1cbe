//! Conditional request support
//!
//! `ETag` generation and `If-None-Match` evaluation for static file
//! responses. The fallback document is served uncached on purpose, so
//! none of this applies to it.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Generate a quoted `ETag` from response bytes using fast hashing
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    let v = hasher.finish();
    format!("\"{v:x}\"")
}

/// Check whether a client `If-None-Match` value matches the current `ETag`
///
/// Handles comma-separated candidate lists and the `*` wildcard. Returns
/// true when a 304 should be sent instead of the body.
pub fn etag_matches(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|candidates| {
        candidates
            .split(',')
            .any(|e| e.trim() == etag || e.trim() == "*")
    })
}
