pub mod database;
pub mod env;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod zones;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use zones::ZonesConfig;
