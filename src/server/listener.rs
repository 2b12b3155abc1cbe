// Listener creation
// Binds through socket2 so bind options are explicit and bind errors
// surface before the accept loop starts

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Create a bound, non-blocking `TcpListener` for the given address.
///
/// `SO_REUSEADDR` is set so a dev server restarted in quick succession is
/// not blocked by a port in TIME_WAIT. Bind and listen failures are
/// returned to the caller, which treats them as fatal.
pub fn create_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;

    // Non-blocking mode is required before handing the socket to tokio
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
