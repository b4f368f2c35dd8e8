use super::RecordType;
use std::net::Ipv4Addr;

/// An address record produced locally (cache hit or interceptor) rather than
/// relayed from an upstream nameserver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub domain: String,

    pub record_type: RecordType,

    pub address: Ipv4Addr,

    pub ttl: u32,
}

impl DnsRecord {
    pub fn new(domain: String, address: Ipv4Addr, ttl: u32) -> Self {
        Self {
            domain,
            record_type: RecordType::A,
            address,
            ttl,
        }
    }
}
