//! Request routing dispatch
//!
//! Entry point for HTTP request processing: method validation, header
//! extraction, then the one routing decision this server makes — file on
//! disk or fallback document.

use crate::config::AppState;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use super::static_files;

/// Request context for a single routing decision
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub access_log: bool,
}

/// Main entry point for HTTP request handling
///
/// Generic over the body type because the handler never reads the request
/// body; tests drive it with synthetic requests.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    // Only the path component participates in the existence check; the
    // query string is ignored
    let path = uri.path();
    let is_head = *method == Method::HEAD;

    let access_log = state.config.logging.access_log;
    if access_log {
        logger::log_request(method, uri, req.version());
    }

    if let Some(resp) = check_http_method(method) {
        return Ok(resp);
    }

    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let ctx = RequestContext {
        path,
        is_head,
        if_none_match: req
            .headers()
            .get("if-none-match")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
        access_log,
    };

    Ok(static_files::serve_path(&ctx, &state).await)
}

/// Check HTTP method and return an early response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}
