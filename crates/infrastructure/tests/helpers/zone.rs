#![allow(dead_code)]
use ferrous_recursor_domain::{DnsQuery, RecordType};
use ferrous_recursor_infrastructure::dns::forwarding::MessageBuilder;
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::{A, CNAME, NS, SOA};
use hickory_proto::rr::{Name, RData, Record};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// What a scripted nameserver says back.
#[derive(Debug, Clone)]
pub enum Reply {
    /// A records for the question name.
    Answer(Vec<(Ipv4Addr, u32)>),
    /// Delegation to `nameservers`, with optional glue.
    Referral {
        nameservers: Vec<&'static str>,
        glue: Vec<(&'static str, Ipv4Addr)>,
    },
    /// SOA in the authority section.
    Negative,
    /// No answer and no glue; the authority section holds only a CNAME.
    AliasOnlyAuthority,
    /// An answer carrying a transaction id other than the query's.
    WrongId(Vec<(Ipv4Addr, u32)>),
    Timeout,
    Garbage,
}

impl Reply {
    pub fn answer(ip: [u8; 4], ttl: u32) -> Self {
        Reply::Answer(vec![(Ipv4Addr::from(ip), ttl)])
    }

    pub fn glue(ns: &'static str, ip: [u8; 4]) -> Self {
        Reply::Referral {
            nameservers: vec![ns],
            glue: vec![(ns, Ipv4Addr::from(ip))],
        }
    }

    pub fn delegate(nameservers: Vec<&'static str>) -> Self {
        Reply::Referral {
            nameservers,
            glue: Vec::new(),
        }
    }
}

fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

fn a(owner: &Name, ip: Ipv4Addr, ttl: u32) -> Record {
    Record::from_rdata(owner.clone(), ttl, RData::A(A(ip)))
}

/// Wire bytes of `reply` answering `request`. `None` for `Timeout`.
pub fn build_reply(request: &Message, reply: &Reply) -> Option<Vec<u8>> {
    let question = request.queries().first()?;
    let owner = question.name().clone();

    let id = match reply {
        Reply::WrongId(_) => request.id().wrapping_add(1),
        _ => request.id(),
    };
    let mut message = Message::new(id, MessageType::Response, OpCode::Query);
    message.add_query(question.clone());

    match reply {
        Reply::Answer(records) | Reply::WrongId(records) => {
            message.set_authoritative(true);
            for (ip, ttl) in records {
                message.add_answer(a(&owner, *ip, *ttl));
            }
        }
        Reply::Referral { nameservers, glue } => {
            let zone = owner.base_name();
            for ns in nameservers {
                message.add_name_server(Record::from_rdata(
                    zone.clone(),
                    172800,
                    RData::NS(NS(name(ns))),
                ));
            }
            for (ns, ip) in glue {
                message.add_additional(a(&name(ns), *ip, 172800));
            }
        }
        Reply::Negative => {
            let soa = SOA::new(
                name("ns1.example."),
                name("hostmaster.example."),
                2024010101,
                3600,
                900,
                604800,
                300,
            );
            message.set_authoritative(true);
            message.add_name_server(Record::from_rdata(name("example."), 300, RData::SOA(soa)));
        }
        Reply::AliasOnlyAuthority => {
            message.add_name_server(Record::from_rdata(
                owner.clone(),
                300,
                RData::CNAME(CNAME(name("alias.example."))),
            ));
        }
        Reply::Timeout => return None,
        Reply::Garbage => return Some(vec![0xde, 0xad]),
    }

    Some(MessageBuilder::serialize_message(&message).unwrap())
}

/// A client datagram asking for `domain`.
pub fn client_query(id: u16, domain: &str, record_type: RecordType) -> Vec<u8> {
    let query = DnsQuery::new(id, domain, record_type);
    let mut bytes = MessageBuilder::build_query(&query).unwrap();
    // Stub resolvers ask for recursion.
    bytes[2] |= 0x01;
    bytes
}
