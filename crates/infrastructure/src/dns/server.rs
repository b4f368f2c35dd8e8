use crate::dns::forwarding::RecordTypeMapper;
use crate::dns::wire_response::{build_error_response, build_records_response};
use ferrous_recursor_application::use_cases::{HandleDnsQueryUseCase, QueryOutcome};
use ferrous_recursor_domain::{DnsQuery, DomainError};
use hickory_proto::op::{Message, MessageType, ResponseCode};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Turns one inbound datagram into the bytes to send back, if any.
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// `None` means the datagram is dropped without a reply.
    pub async fn handle_raw_udp(&self, bytes: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let request = match Message::from_vec(bytes) {
            Ok(message) => message,
            Err(e) => {
                warn!(client = %client, error = %e, len = bytes.len(), "Dropping unparseable datagram");
                return None;
            }
        };

        if request.message_type() != MessageType::Query {
            debug!(client = %client, id = request.id(), "Ignoring non-query message");
            return None;
        }

        let Some(question) = request.queries().first() else {
            warn!(client = %client, id = request.id(), "Query without question");
            return respond_with_error(&request, ResponseCode::FormErr);
        };

        let domain = question.name().to_utf8();
        let hickory_record_type = question.query_type();

        info!(domain = %domain, record_type = ?hickory_record_type, client = %client, "DNS query received");

        let Some(record_type) = RecordTypeMapper::from_hickory(hickory_record_type) else {
            warn!(record_type = ?hickory_record_type, "Unsupported record type");
            return respond_with_error(&request, ResponseCode::NotImp);
        };

        let query = DnsQuery::new(request.id(), &domain, record_type);

        match self.use_case.execute(&query).await {
            Ok(QueryOutcome::Resolved(response)) => Some(response.bytes),
            Ok(QueryOutcome::Cached(records))
            | Ok(QueryOutcome::Intercepted { records, .. }) => {
                debug!(domain = %query.domain, answers = records.len(), "Sending local answer");
                match build_records_response(&request, &records) {
                    Ok(reply) => Some(reply),
                    Err(e) => {
                        error!(error = %e, domain = %query.domain, "Failed to build response");
                        respond_with_error(&request, ResponseCode::ServFail)
                    }
                }
            }
            Err(DomainError::UnsupportedQueryType(record_type)) => {
                debug!(domain = %query.domain, record_type = %record_type, "Query type not walked");
                respond_with_error(&request, ResponseCode::NotImp)
            }
            Err(e) => {
                error!(error = %e, domain = %query.domain, "Query resolution failed");
                respond_with_error(&request, ResponseCode::ServFail)
            }
        }
    }
}

fn respond_with_error(request: &Message, code: ResponseCode) -> Option<Vec<u8>> {
    debug!(code = ?code, "Sending error response");
    match build_error_response(request, code) {
        Ok(reply) => Some(reply),
        Err(e) => {
            error!(error = %e, "Failed to build error response");
            None
        }
    }
}
