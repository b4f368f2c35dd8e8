use serde::{Deserialize, Serialize};

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::interceptors::InterceptorsConfig;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-recursor.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-recursor/config.toml";

/// Main configuration structure for Ferrous Recursor
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listening socket
    #[serde(default)]
    pub server: ServerConfig,

    /// Iterative resolution settings
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Answer cache and its backing file
    #[serde(default)]
    pub cache: CacheConfig,

    /// Query interceptors run before the cache
    #[serde(default)]
    pub interceptors: InterceptorsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-recursor.toml in current directory
    /// 3. /etc/ferrous-recursor/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(path) = overrides.cache_path {
            self.cache.path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.resolver.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Resolver query timeout cannot be 0".to_string(),
            ));
        }

        if self.resolver.max_referral_depth == 0 {
            return Err(ConfigError::Validation(
                "Maximum referral depth cannot be 0".to_string(),
            ));
        }

        self.resolver
            .parsed_root_hints()
            .map_err(ConfigError::Validation)?;

        if self.interceptors.multiply.enabled && self.interceptors.multiply.keyword.is_empty() {
            return Err(ConfigError::Validation(
                "Multiply interceptor keyword cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub cache_path: Option<String>,
    pub log_level: Option<String>,
}
