//! TCP server assembly
//!
//! Socket construction, the accept loop, and the thread-per-connection
//! hand-off live here. All per-request work happens in [`connection`];
//! connections share nothing but the read-only config.

pub mod connection;

use crate::config::ServerConfig;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use tracing::{debug, error, info};

/// Accept-queue depth for the listening socket
const BACKLOG: i32 = 128;

/// A bound HTTP server, ready to accept connections
pub struct Server {
    listener: TcpListener,
    config: Arc<ServerConfig>,
}

impl Server {
    /// Bind to an address
    ///
    /// The socket gets SO_REUSEADDR so a restart does not trip over the
    /// previous instance lingering in TIME_WAIT.
    pub fn bind(addr: SocketAddr, config: ServerConfig) -> std::io::Result<Self> {
        let domain = if addr.is_ipv4() {
            Domain::IPV4
        } else {
            Domain::IPV6
        };

        let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
        socket.set_reuse_address(true)?;
        socket.bind(&addr.into())?;
        socket.listen(BACKLOG)?;

        let listener: TcpListener = socket.into();
        info!(address = %listener.local_addr()?, "listening");

        Ok(Server {
            listener,
            config: Arc::new(config),
        })
    }

    /// Address the listener actually bound to
    ///
    /// Useful when binding to port 0 and needing the assigned port back.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept connections until the process ends
    ///
    /// Each accepted connection runs on its own thread with no shared
    /// mutable state. A failed accept is logged and the loop keeps going.
    pub fn run(&self) -> std::io::Result<()> {
        loop {
            match self.listener.accept() {
                Ok((stream, peer)) => {
                    debug!(peer = %peer, "connection accepted");
                    let config = Arc::clone(&self.config);
                    thread::spawn(move || serve(stream, peer, &config));
                }
                Err(err) => {
                    error!(error = %err, "accept failed");
                }
            }
        }
    }
}

fn serve(stream: TcpStream, peer: SocketAddr, config: &ServerConfig) {
    match connection::handle_connection(stream, config) {
        Ok(()) => debug!(peer = %peer, "connection closed"),
        Err(err) => debug!(peer = %peer, error = %err, "connection abandoned"),
    }
}
