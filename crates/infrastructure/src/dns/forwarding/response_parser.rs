use ferrous_recursor_domain::DomainError;
use hickory_proto::op::Message;
use hickory_proto::rr::{RData, RecordType};
use std::net::Ipv4Addr;
use tracing::debug;

/// What a nameserver reply means for the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    /// SOA in the authority section: the name or type does not exist.
    Negative,
    /// At least one A record in the answer section.
    Answer,
    /// Neither; the authority/additional sections point further down.
    Referral,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<Message, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        debug!(
            id = message.id(),
            rcode = ?message.response_code(),
            answers = message.answers().len(),
            authority = message.name_servers().len(),
            additional = message.additionals().len(),
            "DNS response parsed"
        );

        Ok(message)
    }

    /// SOA is checked before the answer section, so a reply carrying both is
    /// treated as negative.
    pub fn classify(message: &Message) -> ReplyKind {
        if message
            .name_servers()
            .iter()
            .any(|record| record.record_type() == RecordType::SOA)
        {
            ReplyKind::Negative
        } else if !Self::answer_addresses(message).is_empty() {
            ReplyKind::Answer
        } else {
            ReplyKind::Referral
        }
    }

    pub fn answer_addresses(message: &Message) -> Vec<Ipv4Addr> {
        message
            .answers()
            .iter()
            .filter_map(|record| match record.data() {
                RData::A(a) => Some(a.0),
                _ => None,
            })
            .collect()
    }

    /// Glue: every A record of the additional section, in wire order.
    pub fn glue_addresses(message: &Message) -> Vec<Ipv4Addr> {
        message
            .additionals()
            .iter()
            .filter_map(|record| match record.data() {
                RData::A(a) => Some(a.0),
                _ => None,
            })
            .collect()
    }

    /// Host names of the NS records in the authority section, in wire order.
    pub fn delegated_nameservers(message: &Message) -> Vec<String> {
        message
            .name_servers()
            .iter()
            .filter_map(|record| match record.data() {
                RData::NS(ns) => Some(ns.0.to_utf8()),
                _ => None,
            })
            .collect()
    }
}
