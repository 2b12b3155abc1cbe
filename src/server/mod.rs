// Server module entry point
// Listener creation and the accept loop

pub mod connection;
pub mod listener;

pub use listener::create_listener;

use crate::config::AppState;
use crate::logger;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Accept connections until the process is killed
///
/// There is no shutdown protocol; a failed accept is logged and the loop
/// continues, so one bad connection never stops the server.
pub async fn run(
    listener: TcpListener,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                connection::accept_connection(stream, peer_addr, &state);
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
