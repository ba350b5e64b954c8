//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use user_registry::domain::ports::UserRegistry;

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) registry: Arc<dyn UserRegistry>,
}

impl ServerConfig {
    /// Construct a server configuration serving `registry` on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, registry: Arc<dyn UserRegistry>) -> Self {
        Self {
            bind_addr,
            registry,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
