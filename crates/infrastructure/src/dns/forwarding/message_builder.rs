//! DNS Message Builder
//!
//! Constructs the iterative queries sent to root, TLD and authoritative
//! servers in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use ferrous_recursor_domain::{DnsQuery, DomainError};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a DNS query message for `query` and serialize to wire format bytes
    ///
    /// The message carries the query's own transaction id so the reply can
    /// be matched against it and relayed to the client unchanged. Recursion
    /// is not requested: every hop is asked only for what it knows itself.
    pub fn build_query(query: &DnsQuery) -> Result<Vec<u8>, DomainError> {
        let name = Name::from_str(&query.fqdn()).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", query.domain, e))
        })?;

        let mut question = Query::new();
        question.set_name(name);
        question.set_query_type(RecordTypeMapper::to_hickory(&query.record_type));
        question.set_query_class(hickory_proto::rr::DNSClass::IN);

        let mut message = Message::new(query.id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(false);
        message.add_query(question);

        Self::serialize_message(&message)
    }

    /// Serialize a Message to wire format bytes
    pub fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
