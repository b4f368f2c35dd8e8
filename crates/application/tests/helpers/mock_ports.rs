#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_recursor_application::ports::{
    AnswerCachePort, QueryInterceptor, RecursiveResolver, UpstreamResponse,
};
use ferrous_recursor_domain::{DnsQuery, DnsRecord, DomainError, LiveAnswer};
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record};
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub fn upstream_answer(id: u16, domain: &str, addresses: &[(&str, u32)]) -> UpstreamResponse {
    let mut message = Message::new(id, MessageType::Response, OpCode::Query);
    let name = Name::from_str(&format!("{}.", domain)).unwrap();
    for (address, ttl) in addresses {
        let ip = Ipv4Addr::from_str(address).unwrap();
        message.add_answer(Record::from_rdata(name.clone(), *ttl, RData::A(A(ip))));
    }

    UpstreamResponse {
        bytes: vec![],
        message,
        server: SocketAddr::from(([10, 0, 0, 1], 53)),
    }
}

pub struct MockRecursiveResolver {
    responses: Mutex<HashMap<String, UpstreamResponse>>,
    calls: AtomicUsize,
}

impl MockRecursiveResolver {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_response(&self, domain: &str, response: UpstreamResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(domain.to_string(), response);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecursiveResolver for MockRecursiveResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<UpstreamResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .get(query.domain.as_ref())
            .cloned()
            .ok_or_else(|| DomainError::TotalExhaustion(query.domain.to_string()))
    }
}

#[derive(Default)]
pub struct InMemoryAnswerCache {
    entries: Mutex<HashMap<String, Vec<LiveAnswer>>>,
    stores: AtomicUsize,
    fail_stores: bool,
}

impl InMemoryAnswerCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_stores: true,
            ..Self::default()
        }
    }

    pub fn seed(&self, name: &str, answers: Vec<LiveAnswer>) {
        self.entries.lock().unwrap().insert(name.to_string(), answers);
    }

    pub fn stores(&self) -> usize {
        self.stores.load(Ordering::SeqCst)
    }

    pub fn get(&self, name: &str) -> Option<Vec<LiveAnswer>> {
        self.entries.lock().unwrap().get(name).cloned()
    }
}

impl AnswerCachePort for InMemoryAnswerCache {
    fn lookup(&self, name: &str) -> Option<Vec<LiveAnswer>> {
        self.get(name)
    }

    fn store(&self, name: &str, records: &[(Ipv4Addr, u32)]) -> Result<(), DomainError> {
        if records.is_empty() {
            return Ok(());
        }
        self.stores.fetch_add(1, Ordering::SeqCst);
        if self.fail_stores {
            return Err(DomainError::CacheStoreWrite("disk full".to_string()));
        }
        let answers = records
            .iter()
            .map(|(address, ttl)| LiveAnswer {
                address: *address,
                remaining_ttl: *ttl,
            })
            .collect();
        self.entries.lock().unwrap().insert(name.to_string(), answers);
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

/// Claims every query whose name ends with `suffix`.
pub struct SuffixInterceptor {
    pub suffix: &'static str,
    pub address: Ipv4Addr,
}

impl QueryInterceptor for SuffixInterceptor {
    fn name(&self) -> &'static str {
        "suffix"
    }

    fn intercept(&self, query: &DnsQuery) -> Option<Vec<DnsRecord>> {
        query
            .domain
            .ends_with(self.suffix)
            .then(|| vec![DnsRecord::new(query.domain.to_string(), self.address, 60)])
    }
}
