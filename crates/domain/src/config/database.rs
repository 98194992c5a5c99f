use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::env::expand_env;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Connection string; `$VAR` and `${VAR}` are expanded from the
    /// environment before use.
    #[serde(default = "default_dsn")]
    pub dsn: String,

    #[serde(default = "default_table_prefix")]
    pub table_prefix: String,

    #[serde(default = "default_max_open_connections")]
    pub max_open_connections: u32,

    #[serde(default = "default_max_idle_connections")]
    pub max_idle_connections: u32,

    #[serde(default = "default_max_lifetime_secs")]
    pub max_lifetime_secs: u64,

    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn table_name(&self) -> String {
        format!("{}records", self.table_prefix)
    }

    pub fn expanded_dsn(&self) -> String {
        expand_env(&self.dsn, |key| std::env::var(key).ok())
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: default_dsn(),
            table_prefix: default_table_prefix(),
            max_open_connections: default_max_open_connections(),
            max_idle_connections: default_max_idle_connections(),
            max_lifetime_secs: default_max_lifetime_secs(),
            idle_timeout_secs: default_idle_timeout_secs(),
        }
    }
}

fn default_dsn() -> String {
    "sqlite://./sqldns.db".to_string()
}

fn default_table_prefix() -> String {
    "sqldns_".to_string()
}

fn default_max_open_connections() -> u32 {
    10
}

fn default_max_idle_connections() -> u32 {
    10
}

fn default_max_lifetime_secs() -> u64 {
    60
}

fn default_idle_timeout_secs() -> u64 {
    600
}
