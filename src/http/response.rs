//! HTTP response builders
//!
//! One builder per response shape the server can produce. Builders never
//! panic; a failed build degrades to an empty response and logs the error.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build a 200 response for a static file with conditional-request headers
pub fn build_file_response(
    data: &[u8],
    content_type: &str,
    etag: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(data.to_owned())
    };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("ETag", etag)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build the 200 fallback-document response
///
/// Status 200 and `text/html` with the document bytes, nothing else: no
/// redirect, no ETag, so the client URL stays what was requested and the
/// document is re-read on every miss.
pub fn build_fallback_response(data: Vec<u8>, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { Bytes::from(data) };

    Response::builder()
        .status(200)
        .header("Content-Type", "text/html")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("fallback", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 304 Not Modified response
pub fn build_304_response(etag: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(304)
        .header("ETag", etag)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build OPTIONS response
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 500 Internal Server Error response with a diagnostic body
pub fn build_500_response(message: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(format!(
            "500 Internal Server Error: {message}"
        ))))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_response_shape() {
        let resp = build_fallback_response(b"<!doctype html>".to_vec(), false);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/html");
        assert!(resp.headers().get("Location").is_none());
        assert!(resp.headers().get("ETag").is_none());
    }

    #[test]
    fn test_fallback_head_keeps_length() {
        let resp = build_fallback_response(b"<html></html>".to_vec(), true);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "13");
    }

    #[test]
    fn test_file_response_carries_etag() {
        let resp = build_file_response(b"body", "text/css", "\"abcd\"", false);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["ETag"], "\"abcd\"");
        assert_eq!(resp.headers()["Content-Type"], "text/css");
    }

    #[test]
    fn test_405_lists_allowed_methods() {
        let resp = build_405_response();
        assert_eq!(resp.status(), 405);
        assert_eq!(resp.headers()["Allow"], "GET, HEAD, OPTIONS");
    }

    #[test]
    fn test_500_includes_diagnostic() {
        let resp = build_500_response("fallback document missing");
        assert_eq!(resp.status(), 500);
    }
}
