use ferrous_recursor_domain::{DomainError, LiveAnswer};
use std::net::Ipv4Addr;

/// Name-keyed address cache with per-record ttl bookkeeping.
pub trait AnswerCachePort: Send + Sync {
    /// Live records for `name`, or `None` on a miss. A key holding any
    /// expired record is evicted and reported as a miss.
    fn lookup(&self, name: &str) -> Option<Vec<LiveAnswer>>;

    /// Replaces the entry for `name` and persists the cache. Empty `records`
    /// leave the cache untouched.
    fn store(&self, name: &str, records: &[(Ipv4Addr, u32)]) -> Result<(), DomainError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
