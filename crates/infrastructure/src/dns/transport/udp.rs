//! UDP transport for upstream DNS queries (RFC 1035 §4.2.1).
//!
//! Messages are sent as-is with no framing. A fresh ephemeral socket is used
//! for every exchange; truncated replies are returned unchanged.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use ferrous_recursor_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Classic DNS UDP payload limit without EDNS(0).
pub const MAX_UDP_MESSAGE_SIZE: usize = 512;

#[derive(Debug, Default, Clone, Copy)]
pub struct UdpTransport;

impl UdpTransport {
    pub fn new() -> Self {
        Self
    }

    fn bind_addr_for(server: SocketAddr) -> SocketAddr {
        if server.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let socket = UdpSocket::bind(Self::bind_addr_for(server))
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        let bytes_sent = tokio::time::timeout(timeout, socket.send_to(message_bytes, server))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: server.to_string(),
            })?
            .map_err(|e| {
                DomainError::IoError(format!("Failed to send UDP query to {}: {}", server, e))
            })?;

        debug!(server = %server, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_MESSAGE_SIZE];

        let (bytes_received, from_addr) =
            tokio::time::timeout(timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| DomainError::TransportTimeout {
                    server: server.to_string(),
                })?
                .map_err(|e| {
                    DomainError::IoError(format!(
                        "Failed to receive UDP response from {}: {}",
                        server, e
                    ))
                })?;

        if from_addr.ip() != server.ip() {
            warn!(
                expected = %server,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(server = %server, bytes_received = bytes_received, "UDP response received");

        Ok(TransportResponse { bytes: recv_buf })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
