use super::root_hints::effective_root_hints;
use super::walk::{NameserverLookups, WalkContext};
use crate::dns::forwarding::{MessageBuilder, ReplyKind, ResponseParser};
use crate::dns::transport::DnsTransport;
use async_trait::async_trait;
use ferrous_recursor_application::ports::{RecursiveResolver, UpstreamResponse};
use ferrous_recursor_domain::config::ResolverConfig;
use ferrous_recursor_domain::{DnsQuery, DomainError, RecordType};
use futures::future::{BoxFuture, FutureExt};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Iterative resolver: asks the root servers in order and follows referrals
/// down to a server that answers the question or denies it with an SOA.
///
/// Candidates are tried one at a time. Glue addresses are used when the
/// referral carries them; otherwise each delegated nameserver name is resolved
/// from the first root hint, and its address walked before the next name is
/// looked up. Each nameserver name is resolved at most once per client query.
pub struct IterativeResolver {
    transport: Arc<dyn DnsTransport>,
    root_hints: Vec<Ipv4Addr>,
    upstream_port: u16,
    query_timeout: Duration,
    max_referral_depth: usize,
}

impl IterativeResolver {
    pub fn new(transport: Arc<dyn DnsTransport>) -> Self {
        Self::from_config(transport, &ResolverConfig::default(), &[])
    }

    pub fn from_config(
        transport: Arc<dyn DnsTransport>,
        config: &ResolverConfig,
        root_overrides: &[Ipv4Addr],
    ) -> Self {
        let root_hints = effective_root_hints(root_overrides);

        info!(
            roots = root_hints.len(),
            upstream_port = config.upstream_port,
            timeout_ms = config.query_timeout_ms,
            max_referral_depth = config.max_referral_depth,
            transport = transport.protocol_name(),
            "Iterative resolver created"
        );

        Self {
            transport,
            root_hints,
            upstream_port: config.upstream_port,
            query_timeout: Duration::from_millis(config.query_timeout_ms),
            max_referral_depth: config.max_referral_depth,
        }
    }

    pub fn root_hints(&self) -> &[Ipv4Addr] {
        &self.root_hints
    }

    /// Tries every root in order with a fresh walk each time. Nameserver-name
    /// lookups are shared across the roots since they always start from the
    /// first one.
    async fn resolve_from_roots(&self, query: &DnsQuery) -> Result<UpstreamResponse, DomainError> {
        let mut lookups = NameserverLookups::new();

        for (index, root) in self.root_hints.iter().enumerate() {
            let mut ctx = WalkContext::new(self.max_referral_depth);

            match self.walk(query, *root, 0, &mut ctx, &mut lookups).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    warn!(
                        domain = %query.domain,
                        root = %root,
                        root_index = index,
                        servers_asked = ctx.visited_count(),
                        nameserver_lookups = lookups.attempted_count(),
                        error = %e,
                        "Walk from root server failed"
                    );
                }
            }
        }

        Err(DomainError::TotalExhaustion(query.domain.to_string()))
    }

    fn walk<'a>(
        &'a self,
        query: &'a DnsQuery,
        server: Ipv4Addr,
        depth: usize,
        ctx: &'a mut WalkContext,
        lookups: &'a mut NameserverLookups,
    ) -> BoxFuture<'a, Result<UpstreamResponse, DomainError>> {
        async move {
            if ctx.exceeds(depth) {
                return Err(DomainError::ReferralDepthExceeded {
                    domain: query.domain.to_string(),
                    max_depth: ctx.max_depth(),
                });
            }
            ctx.visit(server);

            let response = self.exchange(query, server).await?;

            match ResponseParser::classify(&response.message) {
                ReplyKind::Negative => {
                    debug!(domain = %query.domain, server = %server, depth, "SOA in authority, negative answer");
                    return Ok(response);
                }
                ReplyKind::Answer => {
                    debug!(domain = %query.domain, server = %server, depth, "Answer received");
                    return Ok(response);
                }
                ReplyKind::Referral => {}
            }

            let glue = ResponseParser::glue_addresses(&response.message);
            let mut attempted = 0usize;

            if !glue.is_empty() {
                debug!(domain = %query.domain, server = %server, depth, glue = glue.len(), "Following glue");

                for candidate in glue {
                    if ctx.was_visited(&candidate) {
                        debug!(candidate = %candidate, "Nameserver already asked, skipping");
                        continue;
                    }
                    attempted += 1;

                    match self.walk(query, candidate, depth + 1, &mut *ctx, &mut *lookups).await {
                        Ok(answer) => return Ok(answer),
                        Err(e) => {
                            debug!(domain = %query.domain, candidate = %candidate, error = %e, "Candidate failed");
                        }
                    }
                }
            } else {
                let nameservers = ResponseParser::delegated_nameservers(&response.message);
                debug!(
                    domain = %query.domain,
                    server = %server,
                    depth,
                    nameservers = nameservers.len(),
                    "Referral without glue, resolving nameserver names"
                );

                for ns_name in nameservers {
                    let Some(candidate) = self
                        .resolve_nameserver(&ns_name, depth + 1, &mut *lookups)
                        .await
                    else {
                        continue;
                    };
                    if ctx.was_visited(&candidate) {
                        debug!(candidate = %candidate, nameserver = %ns_name, "Nameserver already asked, skipping");
                        continue;
                    }
                    attempted += 1;

                    match self.walk(query, candidate, depth + 1, &mut *ctx, &mut *lookups).await {
                        Ok(answer) => return Ok(answer),
                        Err(e) => {
                            debug!(
                                domain = %query.domain,
                                nameserver = %ns_name,
                                candidate = %candidate,
                                error = %e,
                                "Candidate failed"
                            );
                        }
                    }
                }
            }

            if attempted == 0 {
                Err(DomainError::NoCandidates {
                    server: server.to_string(),
                })
            } else {
                Err(DomainError::BranchExhausted {
                    domain: query.domain.to_string(),
                    attempted,
                })
            }
        }
        .boxed()
    }

    /// Independent A lookup for a nameserver host name, rooted at the first
    /// root hint. The nested walk starts at `depth` so that chains of
    /// glue-less delegations stay bounded, and `lookups` keeps a name from
    /// being resolved twice or from within its own resolution.
    fn resolve_nameserver<'a>(
        &'a self,
        ns_name: &'a str,
        depth: usize,
        lookups: &'a mut NameserverLookups,
    ) -> BoxFuture<'a, Option<Ipv4Addr>> {
        async move {
            let first_root = *self.root_hints.first()?;
            let ns_query = DnsQuery::new(fastrand::u16(..), ns_name, RecordType::A);
            let key = ns_query.domain.to_string();

            if let Some(address) = lookups.settled(&key) {
                debug!(nameserver = %key, address = ?address, "Nameserver name already looked up");
                return address;
            }
            if !lookups.begin(&key) {
                debug!(nameserver = %key, "Nameserver name depends on itself, skipping");
                return None;
            }

            let mut ctx = WalkContext::new(self.max_referral_depth);
            let address = match self
                .walk(&ns_query, first_root, depth, &mut ctx, &mut *lookups)
                .await
            {
                Ok(response) => {
                    let address = ResponseParser::answer_addresses(&response.message)
                        .into_iter()
                        .next();
                    debug!(nameserver = %key, address = ?address, "Nameserver name resolved");
                    address
                }
                Err(e) => {
                    debug!(nameserver = %key, error = %e, "Nameserver name did not resolve");
                    None
                }
            };

            lookups.finish(&key, address);
            address
        }
        .boxed()
    }

    async fn exchange(
        &self,
        query: &DnsQuery,
        server: Ipv4Addr,
    ) -> Result<UpstreamResponse, DomainError> {
        let server_addr = SocketAddr::from((server, self.upstream_port));
        let request = MessageBuilder::build_query(query)?;

        let reply = self
            .transport
            .send(server_addr, &request, self.query_timeout)
            .await?;

        let message = ResponseParser::parse(&reply.bytes)?;
        if message.id() != query.id {
            return Err(DomainError::ProtocolMismatch {
                expected: query.id,
                received: message.id(),
            });
        }

        Ok(UpstreamResponse {
            bytes: reply.bytes,
            message,
            server: server_addr,
        })
    }
}

#[async_trait]
impl RecursiveResolver for IterativeResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<UpstreamResponse, DomainError> {
        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            "IterativeResolver: starting walk from root hints"
        );

        self.resolve_from_roots(query).await
    }
}
