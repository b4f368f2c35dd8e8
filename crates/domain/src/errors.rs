use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Response transaction id {received} does not match query transaction id {expected}")]
    ProtocolMismatch { expected: u16, received: u16 },

    #[error("Referral from {server} carried neither glue nor resolvable nameservers")]
    NoCandidates { server: String },

    #[error("All {attempted} candidate nameservers failed for {domain}")]
    BranchExhausted { domain: String, attempted: usize },

    #[error("No root server produced an answer for {0}")]
    TotalExhaustion(String),

    #[error("Referral chain for {domain} exceeded {max_depth} hops")]
    ReferralDepthExceeded { domain: String, max_depth: usize },

    #[error("Unsupported query type: {0}")]
    UnsupportedQueryType(String),

    #[error("Cache store unreadable: {0}")]
    CacheStoreUnreadable(String),

    #[error("Cache store write failed: {0}")]
    CacheStoreWrite(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },
}
