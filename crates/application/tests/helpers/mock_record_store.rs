#![allow(dead_code)]

use async_trait::async_trait;
use sqldns_application::ports::RecordStore;
use sqldns_domain::{DomainError, RecordType, ZoneRecord};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    ByNameAndTypes {
        zone: String,
        name: String,
        types: Vec<RecordType>,
    },
    ByName {
        zone: String,
        name: String,
    },
    ByTypes {
        zone: String,
        types: Vec<RecordType>,
    },
    DistinctZones,
    Ping,
}

pub fn record(name: &str, zone: &str, ttl: u32, record_type: &str, content: &str) -> ZoneRecord {
    ZoneRecord::new(name, zone, ttl, record_type, content)
}

/// In-memory records table with a failure switch and a call log.
#[derive(Clone)]
pub struct MockRecordStore {
    rows: Arc<RwLock<Vec<ZoneRecord>>>,
    calls: Arc<RwLock<Vec<StoreCall>>>,
    should_fail: Arc<AtomicBool>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    pub fn with_rows(rows: Vec<ZoneRecord>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
            calls: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub async fn set_rows(&self, rows: Vec<ZoneRecord>) {
        *self.rows.write().await = rows;
    }

    pub async fn calls(&self) -> Vec<StoreCall> {
        self.calls.read().await.clone()
    }

    async fn record_call(&self, call: StoreCall) -> Result<(), DomainError> {
        self.calls.write().await.push(call);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::Query("connection reset by peer".to_string()));
        }
        Ok(())
    }

    async fn select<F>(&self, filter: F) -> Vec<ZoneRecord>
    where
        F: Fn(&ZoneRecord) -> bool,
    {
        self.rows
            .read()
            .await
            .iter()
            .filter(|r| filter(r))
            .cloned()
            .collect()
    }
}

fn has_type(record: &ZoneRecord, types: &[RecordType]) -> bool {
    types.iter().any(|t| t.as_str() == record.record_type)
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn find_by_name_and_types(
        &self,
        zone: &str,
        name: &str,
        types: &[RecordType],
    ) -> Result<Vec<ZoneRecord>, DomainError> {
        self.record_call(StoreCall::ByNameAndTypes {
            zone: zone.to_string(),
            name: name.to_string(),
            types: types.to_vec(),
        })
        .await?;
        Ok(self
            .select(|r| r.zone == zone && r.name == name && has_type(r, types))
            .await)
    }

    async fn find_by_name(&self, zone: &str, name: &str) -> Result<Vec<ZoneRecord>, DomainError> {
        self.record_call(StoreCall::ByName {
            zone: zone.to_string(),
            name: name.to_string(),
        })
        .await?;
        Ok(self.select(|r| r.zone == zone && r.name == name).await)
    }

    async fn find_by_types(
        &self,
        zone: &str,
        types: &[RecordType],
    ) -> Result<Vec<ZoneRecord>, DomainError> {
        self.record_call(StoreCall::ByTypes {
            zone: zone.to_string(),
            types: types.to_vec(),
        })
        .await?;
        Ok(self.select(|r| r.zone == zone && has_type(r, types)).await)
    }

    async fn distinct_zones(&self) -> Result<Vec<String>, DomainError> {
        self.record_call(StoreCall::DistinctZones).await?;
        let mut zones: Vec<String> = Vec::new();
        for row in self.rows.read().await.iter() {
            if !zones.contains(&row.zone) {
                zones.push(row.zone.clone());
            }
        }
        Ok(zones)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.record_call(StoreCall::Ping).await
    }
}
