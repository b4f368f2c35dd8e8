use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// One cached address for a name, with the ttl it was received with and the
/// unix second it was stored at.
///
/// Serialized as an `[address, ttl, inserted_at]` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(Ipv4Addr, u32, u64)", into = "(Ipv4Addr, u32, u64)")]
pub struct CachedAnswer {
    pub address: Ipv4Addr,
    pub ttl: u32,
    pub inserted_at: u64,
}

impl CachedAnswer {
    pub fn new(address: Ipv4Addr, ttl: u32, inserted_at: u64) -> Self {
        Self {
            address,
            ttl,
            inserted_at,
        }
    }

    /// `inserted_at + ttl - now`; zero or negative means expired. Saturates
    /// at the `i64` bounds for timestamps a hand-edited store may carry.
    pub fn remaining_ttl(&self, now: u64) -> i64 {
        let remaining = i128::from(self.inserted_at) + i128::from(self.ttl) - i128::from(now);
        i64::try_from(remaining).unwrap_or(if remaining > 0 { i64::MAX } else { i64::MIN })
    }

    pub fn is_live(&self, now: u64) -> bool {
        self.remaining_ttl(now) > 0
    }
}

impl From<(Ipv4Addr, u32, u64)> for CachedAnswer {
    fn from((address, ttl, inserted_at): (Ipv4Addr, u32, u64)) -> Self {
        Self::new(address, ttl, inserted_at)
    }
}

impl From<CachedAnswer> for (Ipv4Addr, u32, u64) {
    fn from(answer: CachedAnswer) -> Self {
        (answer.address, answer.ttl, answer.inserted_at)
    }
}

/// A cache hit: the address and the seconds it still has to live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveAnswer {
    pub address: Ipv4Addr,
    pub remaining_ttl: u32,
}
