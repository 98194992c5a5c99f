use sqldns_domain::{DatabaseConfig, DomainError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Connection;
use std::str::FromStr;
use tracing::{error, info, warn};

/// Opens the shared pool described by `cfg`.
///
/// The connection string is environment-expanded first. At most
/// `max_open_connections` connections exist at once; callers beyond that
/// wait for one to be released. Connections are recycled after
/// `max_lifetime_secs` and idle ones are closed after `idle_timeout_secs`.
pub async fn create_pool(cfg: &DatabaseConfig) -> Result<SqlitePool, DomainError> {
    let dsn = cfg.expanded_dsn();

    let options = SqliteConnectOptions::from_str(&dsn).map_err(|e| {
        error!(error = %e, "Invalid connection string");
        DomainError::Connection(e.to_string())
    })?;

    // sqlx has no idle-count cap; idle connections are bounded by the pool
    // size and reaped by idle_timeout.
    if cfg.max_idle_connections < cfg.max_open_connections {
        warn!(
            max_idle_connections = cfg.max_idle_connections,
            idle_timeout_secs = cfg.idle_timeout_secs,
            "Idle connections above the idle limit are closed only after idle_timeout"
        );
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_open_connections)
        .max_lifetime(cfg.max_lifetime())
        .idle_timeout(cfg.idle_timeout())
        .connect_with(options)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to open connection pool");
            DomainError::Connection(e.to_string())
        })?;

    info!(
        max_open_connections = cfg.max_open_connections,
        max_idle_connections = cfg.max_idle_connections,
        max_lifetime_secs = cfg.max_lifetime_secs,
        "Connection pool created"
    );

    Ok(pool)
}

/// Round-trips one connection to the backing store.
pub async fn ping(pool: &SqlitePool) -> Result<(), DomainError> {
    let mut conn = pool.acquire().await.map_err(|e| {
        error!(error = %e, "Failed to acquire connection for ping");
        DomainError::Connection(e.to_string())
    })?;

    conn.ping().await.map_err(|e| {
        error!(error = %e, "Database ping failed");
        DomainError::Connection(e.to_string())
    })
}
