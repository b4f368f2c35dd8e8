use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Per round-trip timeout towards a single nameserver.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Upper bound on referral hops for one top-level resolution.
    #[serde(default = "default_max_referral_depth")]
    pub max_referral_depth: usize,

    /// Port nameservers are contacted on.
    #[serde(default = "default_upstream_port")]
    pub upstream_port: u16,

    /// Replaces the built-in root hints when non-empty.
    #[serde(default)]
    pub root_hints: Vec<String>,
}

impl ResolverConfig {
    pub fn parsed_root_hints(&self) -> Result<Vec<Ipv4Addr>, String> {
        self.root_hints
            .iter()
            .map(|hint| {
                hint.parse::<Ipv4Addr>()
                    .map_err(|e| format!("invalid root hint '{}': {}", hint, e))
            })
            .collect()
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            query_timeout_ms: default_query_timeout_ms(),
            max_referral_depth: default_max_referral_depth(),
            upstream_port: default_upstream_port(),
            root_hints: Vec::new(),
        }
    }
}

fn default_query_timeout_ms() -> u64 {
    2000
}

fn default_max_referral_depth() -> usize {
    16
}

fn default_upstream_port() -> u16 {
    53
}
