use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// JSON file holding the answer cache between restarts.
    #[serde(default = "default_cache_path")]
    pub path: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_cache_path(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_cache_path() -> String {
    "cache.json".to_string()
}
