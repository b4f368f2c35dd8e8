pub mod udp;

use async_trait::async_trait;
use ferrous_recursor_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,
}

/// One request/response exchange with a nameserver. The target is chosen per
/// call since the resolver talks to a different server on every hop.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
