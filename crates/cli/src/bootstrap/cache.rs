use ferrous_recursor_domain::Config;
use ferrous_recursor_infrastructure::dns::cache::{AnswerCache, JsonFileStore};
use std::sync::Arc;
use tracing::{error, info};

/// `None` when caching is disabled. An unreadable store aborts startup.
pub fn init_answer_cache(config: &Config) -> anyhow::Result<Option<Arc<AnswerCache>>> {
    if !config.cache.enabled {
        info!("Answer cache disabled");
        return Ok(None);
    }

    let store = Arc::new(JsonFileStore::new(&config.cache.path));
    let cache = AnswerCache::load_with_system_clock(store).map_err(|e| {
        error!(path = %config.cache.path, error = %e, "Cannot load answer cache");
        e
    })?;

    info!(path = %config.cache.path, "Answer cache ready");
    Ok(Some(Arc::new(cache)))
}
