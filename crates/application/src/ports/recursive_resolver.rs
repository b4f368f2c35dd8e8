use async_trait::async_trait;
use ferrous_recursor_domain::{DnsQuery, DomainError};
use hickory_proto::op::Message;
use hickory_proto::rr::RData;
use std::net::{Ipv4Addr, SocketAddr};

/// A reply obtained from an authoritative server, kept byte-for-byte so it
/// can be relayed to the client unchanged.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub bytes: Vec<u8>,
    pub message: Message,
    /// Nameserver that produced the final reply.
    pub server: SocketAddr,
}

impl UpstreamResponse {
    /// A records of the answer section as `(address, ttl)`, in wire order.
    pub fn answer_addresses(&self) -> Vec<(Ipv4Addr, u32)> {
        self.message
            .answers()
            .iter()
            .filter_map(|record| match record.data() {
                RData::A(a) => Some((a.0, record.ttl())),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
pub trait RecursiveResolver: Send + Sync {
    /// Walks the delegation tree for `query`. Every failure is soft: the
    /// error says why no root produced an answer.
    async fn resolve(&self, query: &DnsQuery) -> Result<UpstreamResponse, DomainError>;
}
