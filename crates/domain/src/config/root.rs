use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use super::zones::ZonesConfig;

/// Main configuration structure for sqldns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Backing store connection and pool limits
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Record resolution behaviour
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Zone list refresh
    #[serde(default)]
    pub zones: ZonesConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. sqldns.toml in current directory
    /// 3. /etc/sqldns/config.toml
    /// 4. Default configuration
    ///
    /// The result is validated; an invalid value aborts the load.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("sqldns.toml").exists() {
            Self::from_file("sqldns.toml")?
        } else if std::path::Path::new("/etc/sqldns/config.toml").exists() {
            Self::from_file("/etc/sqldns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(dsn) = overrides.dsn {
            self.database.dsn = dsn;
        }
        if let Some(prefix) = overrides.table_prefix {
            self.database.table_prefix = prefix;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let db = &self.database;

        if db.dsn.trim().is_empty() {
            return Err(ConfigError::Validation("dsn cannot be empty".to_string()));
        }

        // The prefix is spliced into SQL text, so it must be a plain identifier.
        if !db
            .table_prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ConfigError::Validation(format!(
                "table_prefix '{}' may only contain ASCII letters, digits and '_'",
                db.table_prefix
            )));
        }

        if db.max_open_connections == 0 {
            return Err(ConfigError::Validation(
                "max_open_connections must be at least 1".to_string(),
            ));
        }

        if db.max_idle_connections > db.max_open_connections {
            return Err(ConfigError::Validation(format!(
                "max_idle_connections ({}) cannot exceed max_open_connections ({})",
                db.max_idle_connections, db.max_open_connections
            )));
        }

        if db.max_lifetime_secs == 0 {
            return Err(ConfigError::Validation(
                "max_lifetime_secs must be at least 1".to_string(),
            ));
        }

        if self.zones.refresh_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "refresh_interval_secs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dsn: Option<String>,
    pub table_prefix: Option<String>,
    pub log_level: Option<String>,
}
