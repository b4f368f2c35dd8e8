use ferrous_recursor_domain::{DnsQuery, DnsRecord};

/// Answers selected queries locally, ahead of the cache and the resolver.
pub trait QueryInterceptor: Send + Sync {
    fn name(&self) -> &'static str;

    /// `Some(records)` claims the query; `None` passes it on.
    fn intercept(&self, query: &DnsQuery) -> Option<Vec<DnsRecord>>;
}
