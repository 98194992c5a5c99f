#![allow(dead_code)]

use async_trait::async_trait;
use sqldns_application::ports::RecordStore;
use sqldns_domain::{DomainError, RecordType, ZoneRecord};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Serves a fixed zone list; record lookups always come back empty.
#[derive(Clone, Default)]
pub struct MockZoneStore {
    zones: Arc<RwLock<Vec<String>>>,
    zone_loads: Arc<AtomicUsize>,
    should_fail: Arc<AtomicBool>,
}

impl MockZoneStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zones(zones: &[&str]) -> Self {
        let store = Self::new();
        *store.zones.try_write().unwrap() = zones.iter().map(|z| z.to_string()).collect();
        store
    }

    pub async fn set_zones(&self, zones: &[&str]) {
        *self.zones.write().await = zones.iter().map(|z| z.to_string()).collect();
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn zone_loads(&self) -> usize {
        self.zone_loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordStore for MockZoneStore {
    async fn find_by_name_and_types(
        &self,
        _zone: &str,
        _name: &str,
        _types: &[RecordType],
    ) -> Result<Vec<ZoneRecord>, DomainError> {
        Ok(Vec::new())
    }

    async fn find_by_name(&self, _zone: &str, _name: &str) -> Result<Vec<ZoneRecord>, DomainError> {
        Ok(Vec::new())
    }

    async fn find_by_types(
        &self,
        _zone: &str,
        _types: &[RecordType],
    ) -> Result<Vec<ZoneRecord>, DomainError> {
        Ok(Vec::new())
    }

    async fn distinct_zones(&self) -> Result<Vec<String>, DomainError> {
        self.zone_loads.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::Query("database is locked".to_string()));
        }
        Ok(self.zones.read().await.clone())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
