use std::collections::{HashMap, HashSet};
use std::net::Ipv4Addr;

/// Bookkeeping for one walk from a root server: the nameservers already asked
/// and the hop limit. Nested nameserver-address resolutions get their own
/// context.
#[derive(Debug)]
pub struct WalkContext {
    visited: HashSet<Ipv4Addr>,
    max_depth: usize,
}

impl WalkContext {
    pub fn new(max_depth: usize) -> Self {
        Self {
            visited: HashSet::new(),
            max_depth,
        }
    }

    pub fn exceeds(&self, depth: usize) -> bool {
        depth > self.max_depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Records `server`; `false` if it was already asked during this walk.
    pub fn visit(&mut self, server: Ipv4Addr) -> bool {
        self.visited.insert(server)
    }

    pub fn was_visited(&self, server: &Ipv4Addr) -> bool {
        self.visited.contains(server)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

/// Nameserver-name lookups made on behalf of one client query, shared by every
/// walk and nested walk it spawns. A name is resolved at most once: later
/// referrals reuse the outcome, and a name still being resolved further up
/// the chain yields no address.
#[derive(Debug, Default)]
pub struct NameserverLookups {
    in_progress: HashSet<String>,
    settled: HashMap<String, Option<Ipv4Addr>>,
}

impl NameserverLookups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcome of an earlier lookup of `name`, if one finished.
    pub fn settled(&self, name: &str) -> Option<Option<Ipv4Addr>> {
        self.settled.get(name).copied()
    }

    /// Marks `name` as being resolved; `false` if it already is.
    pub fn begin(&mut self, name: &str) -> bool {
        self.in_progress.insert(name.to_string())
    }

    pub fn finish(&mut self, name: &str, address: Option<Ipv4Addr>) {
        self.in_progress.remove(name);
        self.settled.insert(name.to_string(), address);
    }

    pub fn attempted_count(&self) -> usize {
        self.settled.len() + self.in_progress.len()
    }
}
