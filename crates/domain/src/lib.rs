//! Ferrous Recursor Domain Layer
pub mod cached_answer;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;

pub use cached_answer::{CachedAnswer, LiveAnswer};
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::DnsQuery;
pub use dns_record::{DnsRecord, RecordType};
pub use errors::DomainError;
