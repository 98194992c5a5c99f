use chrono::Utc;
use sqldns_domain::DomainError;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::ports::RecordStore;
use crate::services::{ZoneCache, ZoneSnapshot};

pub struct RefreshZonesUseCase {
    store: Arc<dyn RecordStore>,
    cache: Arc<ZoneCache>,
}

impl RefreshZonesUseCase {
    pub fn new(store: Arc<dyn RecordStore>, cache: Arc<ZoneCache>) -> Self {
        Self { store, cache }
    }

    /// Reloads the zone list. On failure the cached list is left as it was.
    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<usize, DomainError> {
        let zones = self.store.distinct_zones().await.inspect_err(|e| {
            error!(error = %e, "Failed to load zones; keeping previous zone list");
        })?;

        let snapshot = ZoneSnapshot::new(zones, Utc::now());
        let count = snapshot.zones().len();
        self.cache.replace(snapshot);

        info!(zones = count, "Zone list refreshed");
        Ok(count)
    }
}
