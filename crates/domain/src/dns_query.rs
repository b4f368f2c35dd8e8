use super::RecordType;
use std::sync::Arc;

/// A client question as seen by the resolver: transaction id, normalized name
/// and record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub id: u16,
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(id: u16, domain: &str, record_type: RecordType) -> Self {
        Self {
            id,
            domain: Self::normalize_name(domain).into(),
            record_type,
        }
    }

    /// Lower-cases the name and strips the trailing root dot, so that
    /// `WWW.Example.COM.` and `www.example.com` share a cache key.
    pub fn normalize_name(name: &str) -> String {
        name.trim_end_matches('.').to_ascii_lowercase()
    }

    /// Fully qualified form used on the wire.
    pub fn fqdn(&self) -> String {
        format!("{}.", self.domain)
    }
}
