use crate::ports::{AnswerCachePort, QueryInterceptor, RecursiveResolver, UpstreamResponse};
use ferrous_recursor_domain::{DnsQuery, DnsRecord, DomainError};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// How a query was answered.
#[derive(Debug, Clone)]
pub enum QueryOutcome {
    Intercepted {
        interceptor: &'static str,
        records: Vec<DnsRecord>,
    },
    Cached(Vec<DnsRecord>),
    Resolved(UpstreamResponse),
}

pub struct HandleDnsQueryUseCase {
    resolver: Arc<dyn RecursiveResolver>,
    cache: Option<Arc<dyn AnswerCachePort>>,
    interceptors: Vec<Arc<dyn QueryInterceptor>>,
}

impl HandleDnsQueryUseCase {
    pub fn new(resolver: Arc<dyn RecursiveResolver>) -> Self {
        Self {
            resolver,
            cache: None,
            interceptors: Vec::new(),
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn AnswerCachePort>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_interceptor(mut self, interceptor: Arc<dyn QueryInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub async fn execute(&self, query: &DnsQuery) -> Result<QueryOutcome, DomainError> {
        let start = Instant::now();

        if !query.record_type.is_walkable() {
            debug!(domain = %query.domain, record_type = %query.record_type, "Query type not resolvable");
            return Err(DomainError::UnsupportedQueryType(
                query.record_type.to_string(),
            ));
        }

        for interceptor in &self.interceptors {
            if let Some(records) = interceptor.intercept(query) {
                debug!(
                    domain = %query.domain,
                    interceptor = interceptor.name(),
                    answers = records.len(),
                    "Query intercepted"
                );
                return Ok(QueryOutcome::Intercepted {
                    interceptor: interceptor.name(),
                    records,
                });
            }
        }

        if let Some(records) = self.check_cache(query) {
            debug!(domain = %query.domain, answers = records.len(), "Cache HIT");
            return Ok(QueryOutcome::Cached(records));
        }

        let response = self.resolver.resolve(query).await?;

        self.store_in_cache(query, &response);

        info!(
            domain = %query.domain,
            server = %response.server,
            answers = response.message.answers().len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Query resolved"
        );

        Ok(QueryOutcome::Resolved(response))
    }

    fn check_cache(&self, query: &DnsQuery) -> Option<Vec<DnsRecord>> {
        let cache = self.cache.as_ref()?;
        let answers = cache.lookup(&query.domain)?;

        Some(
            answers
                .into_iter()
                .map(|answer| {
                    DnsRecord::new(query.domain.to_string(), answer.address, answer.remaining_ttl)
                })
                .collect(),
        )
    }

    fn store_in_cache(&self, query: &DnsQuery, response: &UpstreamResponse) {
        let Some(cache) = &self.cache else {
            return;
        };

        let addresses = response.answer_addresses();
        if let Err(e) = cache.store(&query.domain, &addresses) {
            warn!(error = %e, domain = %query.domain, "Failed to persist answer cache");
        }
    }
}
