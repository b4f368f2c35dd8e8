use crate::bootstrap::init_answer_cache;
use ferrous_recursor_application::use_cases::HandleDnsQueryUseCase;
use ferrous_recursor_domain::Config;
use ferrous_recursor_infrastructure::dns::{
    cache::AnswerCache, IterativeResolver, MultiplyInterceptor, UdpTransport,
};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub resolver: Arc<IterativeResolver>,
    pub cache: Option<Arc<AnswerCache>>,
    pub handler_use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        info!("Initializing DNS services");

        let root_overrides = config
            .resolver
            .parsed_root_hints()
            .map_err(anyhow::Error::msg)?;
        if !root_overrides.is_empty() {
            info!(roots = root_overrides.len(), "Using configured root hints");
        }

        let resolver = Arc::new(IterativeResolver::from_config(
            Arc::new(UdpTransport::new()),
            &config.resolver,
            &root_overrides,
        ));
        let cache = init_answer_cache(config)?;

        let mut use_case = HandleDnsQueryUseCase::new(resolver.clone());

        if let Some(cache) = &cache {
            use_case = use_case.with_cache(cache.clone());
        }

        let multiply = &config.interceptors.multiply;
        if multiply.enabled {
            info!(keyword = %multiply.keyword, ttl = multiply.ttl, "Multiply interceptor enabled");
            use_case = use_case.with_interceptor(Arc::new(MultiplyInterceptor::from_config(multiply)));
        }

        Ok(Self {
            resolver,
            cache,
            handler_use_case: Arc::new(use_case),
        })
    }
}
