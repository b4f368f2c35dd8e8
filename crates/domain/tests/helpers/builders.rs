#![allow(dead_code)]
use ferrous_recursor_domain::CachedAnswer;
use std::net::Ipv4Addr;
use std::str::FromStr;

pub struct CachedAnswerBuilder {
    address: Ipv4Addr,
    ttl: u32,
    inserted_at: u64,
}

impl CachedAnswerBuilder {
    pub fn new() -> Self {
        Self {
            address: Ipv4Addr::new(93, 184, 216, 34),
            ttl: 300,
            inserted_at: 1_000,
        }
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = Ipv4Addr::from_str(address).unwrap();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn inserted_at(mut self, inserted_at: u64) -> Self {
        self.inserted_at = inserted_at;
        self
    }

    pub fn build(self) -> CachedAnswer {
        CachedAnswer::new(self.address, self.ttl, self.inserted_at)
    }
}

impl Default for CachedAnswerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
