use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Invalid {record_type} record content: {content:?}")]
    Format {
        record_type: String,
        content: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn format(record_type: impl Into<String>, content: impl Into<String>) -> Self {
        DomainError::Format {
            record_type: record_type.into(),
            content: content.into(),
        }
    }
}

impl From<ConfigError> for DomainError {
    fn from(err: ConfigError) -> Self {
        DomainError::Config(err.to_string())
    }
}
