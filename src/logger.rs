use chrono::Local;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;

/// The single startup line required on stdout
pub fn log_server_start(addr: &SocketAddr) {
    println!("Serving HTTP on http://{addr} (fallback routing enabled)");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[Error] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!(
        "[{}] {} {} {:?}",
        Local::now().format("%d/%b/%Y:%H:%M:%S"),
        method,
        uri,
        version
    );
}

pub fn log_headers_count(count: usize, show: bool) {
    if show {
        println!("[Headers] Count: {count}");
    }
}

/// Access line for a completed response
pub fn log_response(status: u16, size: usize) {
    println!(
        "[{}] -> {status} ({size} bytes)",
        Local::now().format("%d/%b/%Y:%H:%M:%S")
    );
}

pub fn log_warning(message: &str) {
    eprintln!("[Warning] {message}");
}

pub fn log_error(message: &str) {
    eprintln!("[Error] {message}");
}
