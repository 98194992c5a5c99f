//! sqldns domain layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod owner_name;

pub use config::{
    CliOverrides, Config, ConfigError, DatabaseConfig, LoggingConfig, ResolverConfig,
    ZonesConfig,
};
pub use dns_record::{RecordType, ZoneRecord, STATIC_SOA_TTL};
pub use errors::DomainError;
pub use owner_name::{relative_name, wildcard_candidates, WILDCARD_LABEL};
