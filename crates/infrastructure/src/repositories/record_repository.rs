use async_trait::async_trait;
use sqldns_application::ports::RecordStore;
use sqldns_domain::{DomainError, RecordType, ZoneRecord};
use sqlx::SqlitePool;
use tracing::{error, instrument};

use crate::database;

type RecordRow = (String, String, i64, String, String);

/// [`RecordStore`] over the `<prefix>records` table.
pub struct SqliteRecordStore {
    pool: SqlitePool,
    table: String,
}

impl SqliteRecordStore {
    /// `table` is spliced into SQL text and must already be validated.
    pub fn new(pool: SqlitePool, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn select_sql(&self, filters: &str) -> String {
        format!(
            "SELECT name, zone, ttl, record_type, content FROM {} WHERE {}",
            self.table, filters
        )
    }

    fn row_to_record(row: RecordRow) -> Result<ZoneRecord, DomainError> {
        let (name, zone, ttl, record_type, content) = row;
        let ttl = u32::try_from(ttl).map_err(|_| {
            error!(name = %name, zone = %zone, ttl, "Stored ttl out of range");
            DomainError::Query(format!("ttl {} out of range for {}.{}", ttl, name, zone))
        })?;
        Ok(ZoneRecord {
            name,
            zone,
            ttl,
            record_type,
            content,
        })
    }

    async fn fetch_records(
        &self,
        sql: &str,
        zone: &str,
        name: Option<&str>,
        types: &[RecordType],
    ) -> Result<Vec<ZoneRecord>, DomainError> {
        let mut query = sqlx::query_as::<_, RecordRow>(sql).bind(zone);
        if let Some(name) = name {
            query = query.bind(name);
        }
        for record_type in types {
            query = query.bind(record_type.as_str());
        }

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            error!(error = %e, zone, "Failed to query records");
            DomainError::Query(e.to_string())
        })?;

        rows.into_iter().map(Self::row_to_record).collect()
    }
}

fn type_placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    #[instrument(skip(self))]
    async fn find_by_name_and_types(
        &self,
        zone: &str,
        name: &str,
        types: &[RecordType],
    ) -> Result<Vec<ZoneRecord>, DomainError> {
        if types.is_empty() {
            return Ok(Vec::new());
        }
        let sql = self.select_sql(&format!(
            "zone = ? AND name = ? AND record_type IN ({})",
            type_placeholders(types.len())
        ));
        self.fetch_records(&sql, zone, Some(name), types).await
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, zone: &str, name: &str) -> Result<Vec<ZoneRecord>, DomainError> {
        let sql = self.select_sql("zone = ? AND name = ?");
        self.fetch_records(&sql, zone, Some(name), &[]).await
    }

    #[instrument(skip(self))]
    async fn find_by_types(
        &self,
        zone: &str,
        types: &[RecordType],
    ) -> Result<Vec<ZoneRecord>, DomainError> {
        if types.is_empty() {
            return Ok(Vec::new());
        }
        let sql = self.select_sql(&format!(
            "zone = ? AND record_type IN ({})",
            type_placeholders(types.len())
        ));
        self.fetch_records(&sql, zone, None, types).await
    }

    #[instrument(skip(self))]
    async fn distinct_zones(&self) -> Result<Vec<String>, DomainError> {
        let sql = format!("SELECT DISTINCT zone FROM {}", self.table);
        let rows = sqlx::query_as::<_, (String,)>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query zones");
                DomainError::Query(e.to_string())
            })?;

        Ok(rows.into_iter().map(|(zone,)| zone).collect())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        database::ping(&self.pool).await
    }
}
