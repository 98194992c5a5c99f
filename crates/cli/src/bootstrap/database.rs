use sqldns_application::ports::RecordStore;
use sqldns_domain::DatabaseConfig;
use sqldns_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

/// Opens the connection pool. Any failure aborts startup.
pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!(table = %cfg.table_name(), "Initializing database");

    create_pool(cfg).await.map_err(|e| {
        error!(error = %e, "Failed to initialize connection pool");
        anyhow::anyhow!(e)
    })
}

/// Pings the record store once. Failure aborts startup; there is no retry.
pub async fn verify_store(store: &dyn RecordStore) -> anyhow::Result<()> {
    store.ping().await.map_err(|e| {
        error!(error = %e, "Startup ping failed");
        anyhow::anyhow!(e)
    })?;

    info!("Database reachable");
    Ok(())
}
