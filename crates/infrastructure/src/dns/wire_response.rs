//! Replies synthesized locally, for cache hits, interceptors and errors.
//! Resolved answers are relayed as the upstream bytes and never pass here.

use crate::dns::forwarding::MessageBuilder;
use ferrous_recursor_domain::{DnsRecord, DomainError};
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record};
use std::str::FromStr;

fn reply_to(request: &Message, rcode: ResponseCode) -> Message {
    let mut reply = Message::new(request.id(), MessageType::Response, request.op_code());
    reply.set_recursion_desired(request.recursion_desired());
    reply.set_recursion_available(true);
    reply.set_response_code(rcode);
    reply.add_queries(request.queries().to_vec());
    reply
}

/// NOERROR reply echoing the question, one A answer per record.
pub fn build_records_response(
    request: &Message,
    records: &[DnsRecord],
) -> Result<Vec<u8>, DomainError> {
    let mut reply = reply_to(request, ResponseCode::NoError);

    for record in records {
        let owner = Name::from_str(&format!("{}.", record.domain)).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", record.domain, e))
        })?;
        reply.add_answer(Record::from_rdata(
            owner,
            record.ttl,
            RData::A(A(record.address)),
        ));
    }

    MessageBuilder::serialize_message(&reply)
}

/// Empty reply carrying `rcode`, question echoed.
pub fn build_error_response(
    request: &Message,
    rcode: ResponseCode,
) -> Result<Vec<u8>, DomainError> {
    MessageBuilder::serialize_message(&reply_to(request, rcode))
}
