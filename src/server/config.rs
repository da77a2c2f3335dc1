//! Server configuration.

use std::net::SocketAddr;
use std::time::Duration;

/// HTTP server configuration.
#[derive(Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The maximum number of concurrent connections.
    pub max_connections: usize,
    /// The read buffer size.
    pub read_buffer_size: usize,
    /// How long a connection may live before it is abandoned. Covers the
    /// whole exchange: waiting for bytes, dispatching, and writing.
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8080".parse().expect("valid literal address"),
            max_connections: 1024,
            read_buffer_size: 8192,
            request_timeout: Duration::from_secs(5),
        }
    }
}
