use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct InterceptorsConfig {
    #[serde(default)]
    pub multiply: MultiplyConfig,
}

/// Answers `<n>.<m>...multiply...` names with `127.0.0.<product % 256>`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MultiplyConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_keyword")]
    pub keyword: String,

    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

impl Default for MultiplyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            keyword: default_keyword(),
            ttl: default_ttl(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_keyword() -> String {
    "multiply".to_string()
}

fn default_ttl() -> u32 {
    60
}
