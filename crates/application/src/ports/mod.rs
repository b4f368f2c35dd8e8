mod answer_cache;
mod query_interceptor;
mod recursive_resolver;

pub use answer_cache::AnswerCachePort;
pub use query_interceptor::QueryInterceptor;
pub use recursive_resolver::{RecursiveResolver, UpstreamResponse};

// Re-export for convenience
pub use ferrous_recursor_domain::DnsQuery;
