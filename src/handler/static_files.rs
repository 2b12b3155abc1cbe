//! Static file resolution and serving
//!
//! Resolves a request path against the document root and either serves the
//! file's bytes with a detected content type, or substitutes the fallback
//! document at status 200 so client-side routing can take over.

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Resolve a request path to a readable regular file inside the root
///
/// Returns `None` for missing files, directories without an index, and
/// any path that escapes the root after canonicalization. `root` must
/// already be canonical.
pub fn resolve_file(root: &Path, request_path: &str, index_name: &str) -> Option<PathBuf> {
    let relative = request_path.trim_start_matches('/');
    let mut candidate = root.join(relative);

    // A directory is served through its index document, the same name
    // as the fallback document
    if candidate.is_dir() {
        candidate = candidate.join(index_name);
    }

    // Canonicalization both resolves ".." sequences and fails on
    // nonexistent paths, so the containment check below is authoritative
    let canonical = candidate.canonicalize().ok()?;
    if !canonical.starts_with(root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            request_path,
            canonical.display()
        ));
        return None;
    }

    canonical.is_file().then_some(canonical)
}

/// Read a resolved file and pair it with its content type
pub async fn load_file(file_path: &Path) -> Option<(Vec<u8>, &'static str)> {
    let content = fs::read(file_path).await.ok()?;
    let content_type = mime::content_type_for(file_path.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}

/// Serve the file at the request path, or the fallback document
pub async fn serve_path(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    if let Some(file_path) = resolve_file(&state.root, ctx.path, &state.config.server.fallback) {
        // An unreadable file falls through to the fallback branch, same
        // as a missing one
        if let Some((content, content_type)) = load_file(&file_path).await {
            if ctx.access_log {
                logger::log_response(200, content.len());
            }
            return build_file_response(&content, content_type, ctx);
        }
    }

    serve_fallback(ctx, state).await
}

/// Serve the fallback document, read fresh from disk on every miss
///
/// The response keeps the requested URL: status 200, `text/html`, no
/// redirect. A missing or unreadable fallback document is the one
/// condition this server reports as a 500.
pub async fn serve_fallback(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let fallback_path = state.fallback_path();
    match fs::read(&fallback_path).await {
        Ok(content) => {
            if ctx.access_log {
                logger::log_response(200, content.len());
            }
            http::response::build_fallback_response(content, ctx.is_head)
        }
        Err(e) => {
            logger::log_error(&format!(
                "Fallback document unavailable '{}': {e}",
                fallback_path.display()
            ));
            http::build_500_response("fallback document unavailable")
        }
    }
}

/// Build the file response, honoring `If-None-Match`
fn build_file_response(
    content: &[u8],
    content_type: &str,
    ctx: &RequestContext<'_>,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(content);
    if cache::etag_matches(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }
    http::response::build_file_response(content, content_type, &etag, ctx.is_head)
}
