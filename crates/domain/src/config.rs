pub mod cache;
pub mod errors;
pub mod interceptors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod server;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use interceptors::{InterceptorsConfig, MultiplyConfig};
pub use logging::{LogFormat, LoggingConfig};
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
