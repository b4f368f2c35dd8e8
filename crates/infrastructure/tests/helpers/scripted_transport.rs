#![allow(dead_code)]
use super::zone::{build_reply, Reply};
use async_trait::async_trait;
use ferrous_recursor_domain::DomainError;
use ferrous_recursor_infrastructure::dns::transport::{DnsTransport, TransportResponse};
use hickory_proto::op::Message;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SentQuery {
    pub server: SocketAddr,
    pub name: String,
    pub id: u16,
    pub recursion_desired: bool,
}

/// In-memory nameservers. A route keyed by server and question name wins
/// over a route keyed by server alone; unrouted servers time out.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: HashMap<(Ipv4Addr, Option<String>), Reply>,
    sent: Mutex<Vec<SentQuery>>,
    replies: Mutex<Vec<Vec<u8>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, server: [u8; 4], reply: Reply) -> Self {
        self.routes.insert((Ipv4Addr::from(server), None), reply);
        self
    }

    pub fn route_name(mut self, server: [u8; 4], name: &str, reply: Reply) -> Self {
        self.routes
            .insert((Ipv4Addr::from(server), Some(name.to_string())), reply);
        self
    }

    pub fn sent(&self) -> Vec<SentQuery> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn servers_asked(&self) -> Vec<Ipv4Addr> {
        self.sent()
            .iter()
            .filter_map(|q| match q.server.ip() {
                IpAddr::V4(ip) => Some(ip),
                IpAddr::V6(_) => None,
            })
            .collect()
    }

    pub fn names_asked(&self) -> Vec<String> {
        self.sent().into_iter().map(|q| q.name).collect()
    }

    pub fn last_reply(&self) -> Option<Vec<u8>> {
        self.replies.lock().unwrap().last().cloned()
    }

    fn lookup(&self, server: Ipv4Addr, name: &str) -> Option<&Reply> {
        self.routes
            .get(&(server, Some(name.to_string())))
            .or_else(|| self.routes.get(&(server, None)))
    }
}

#[async_trait]
impl DnsTransport for ScriptedTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let request = Message::from_vec(message_bytes).unwrap();
        let name = request.queries()[0].name().to_utf8();

        self.sent.lock().unwrap().push(SentQuery {
            server,
            name: name.clone(),
            id: request.id(),
            recursion_desired: request.recursion_desired(),
        });

        let timeout = || DomainError::TransportTimeout {
            server: server.to_string(),
        };

        let IpAddr::V4(ip) = server.ip() else {
            return Err(timeout());
        };
        let reply = self.lookup(ip, &name).ok_or_else(timeout)?;
        let bytes = build_reply(&request, reply).ok_or_else(timeout)?;

        self.replies.lock().unwrap().push(bytes.clone());

        Ok(TransportResponse { bytes })
    }

    fn protocol_name(&self) -> &'static str {
        "SCRIPTED"
    }
}
