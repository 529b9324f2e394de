//! UDP Query Dispatcher
//!
//! Sends one A-record query per call and waits for a single response,
//! bounded by the configured timeout. Timeout, transport error, and a
//! malformed response all come back as `ResolveError`; the orchestrator
//! treats them uniformly and only the trace distinguishes them. No
//! retry lives at this layer.

use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use async_trait::async_trait;
use rootwalk_application::ports::{QueryDispatcher, QueryReply};
use rootwalk_domain::ResolveError;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Maximum UDP DNS response size accepted without EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

const DNS_PORT: u16 = 53;

pub struct UdpQueryDispatcher {
    timeout: Duration,
    port: u16,
}

impl UdpQueryDispatcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            port: DNS_PORT,
        }
    }

    /// Query a non-standard port. Used to point the dispatcher at test
    /// servers bound to an ephemeral port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

#[async_trait]
impl QueryDispatcher for UdpQueryDispatcher {
    async fn query(&self, server: Ipv4Addr, domain: &str) -> Result<QueryReply, ResolveError> {
        let server_addr = SocketAddr::from((server, self.port));
        let request_bytes = MessageBuilder::build_a_query(domain)?;

        let socket = UdpSocket::bind("0.0.0.0:0")
            .await
            .map_err(|e| ResolveError::Transport {
                server: server_addr.to_string(),
                reason: format!("Failed to bind socket: {}", e),
            })?;

        socket
            .connect(server_addr)
            .await
            .map_err(|e| ResolveError::Transport {
                server: server_addr.to_string(),
                reason: format!("Failed to connect: {}", e),
            })?;

        socket
            .send(&request_bytes)
            .await
            .map_err(|e| ResolveError::Transport {
                server: server_addr.to_string(),
                reason: format!("Failed to send query: {}", e),
            })?;

        debug!(
            server = %server_addr,
            domain = %domain,
            bytes_sent = request_bytes.len(),
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let len = tokio::time::timeout(self.timeout, socket.recv(&mut recv_buf))
            .await
            .map_err(|_| ResolveError::QueryTimeout {
                server: server_addr.to_string(),
            })?
            .map_err(|e| ResolveError::Transport {
                server: server_addr.to_string(),
                reason: format!("Failed to receive response: {}", e),
            })?;

        debug!(
            server = %server_addr,
            bytes_received = len,
            "UDP response received"
        );

        ResponseParser::parse(server, &recv_buf[..len])
    }
}
