use sqldns_application::ports::RecordStore;
use sqldns_application::services::{MappingContext, ZoneCache};
use sqldns_application::use_cases::{
    FindRecordsUseCase, RefreshZonesUseCase, ResolveHostAddressesUseCase,
};
use sqldns_domain::Config;
use sqldns_infrastructure::repositories::SqliteRecordStore;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Services {
    pub store: Arc<dyn RecordStore>,
    pub zone_cache: Arc<ZoneCache>,
    pub refresh_zones: Arc<RefreshZonesUseCase>,
    pub find_records: Arc<FindRecordsUseCase>,
    pub resolve_hosts: Arc<ResolveHostAddressesUseCase>,
}

impl Services {
    pub fn new(config: &Config, pool: SqlitePool) -> Self {
        let store: Arc<dyn RecordStore> =
            Arc::new(SqliteRecordStore::new(pool, config.database.table_name()));

        let zone_cache = Arc::new(ZoneCache::new());
        let refresh_zones = Arc::new(RefreshZonesUseCase::new(store.clone(), zone_cache.clone()));

        let find_records = Arc::new(
            FindRecordsUseCase::new(store.clone())
                .with_wildcard_fallback(config.resolver.wildcard_fallback),
        );
        let resolve_hosts = Arc::new(ResolveHostAddressesUseCase::new(
            find_records.clone(),
            MappingContext::from(&config.resolver),
        ));

        Self {
            store,
            zone_cache,
            refresh_zones,
            find_records,
            resolve_hosts,
        }
    }
}
