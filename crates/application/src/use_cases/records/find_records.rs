use sqldns_domain::{
    relative_name, wildcard_candidates, DomainError, RecordType, ZoneRecord,
};
use std::sync::Arc;
use tracing::{debug, error, instrument};

use crate::ports::RecordStore;

/// Exact-match lookups against the records table.
pub struct FindRecordsUseCase {
    store: Arc<dyn RecordStore>,
    wildcard_fallback: bool,
}

impl FindRecordsUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            wildcard_fallback: false,
        }
    }

    /// Retry unmatched names against wildcard owners.
    pub fn with_wildcard_fallback(mut self, enabled: bool) -> Self {
        self.wildcard_fallback = enabled;
        self
    }

    /// Rows at `name` whose type is one of `types`.
    ///
    /// An apex lookup for exactly `[SOA]` matches on zone and type alone.
    /// Rows matched through a wildcard owner come back keyed by `name`.
    #[instrument(skip(self))]
    pub async fn by_zone_and_types(
        &self,
        zone: &str,
        name: &str,
        types: &[RecordType],
    ) -> Result<Vec<ZoneRecord>, DomainError> {
        let records = self.lookup(zone, name, types).await?;

        if records.is_empty() && self.wildcard_fallback && name != zone {
            return self.wildcard_lookup(zone, name, types).await;
        }

        Ok(records)
    }

    /// Every row at `name`, whatever its type.
    #[instrument(skip(self))]
    pub async fn by_zone_and_name(
        &self,
        zone: &str,
        name: &str,
    ) -> Result<Vec<ZoneRecord>, DomainError> {
        let relative = relative_name(zone, name);
        self.store
            .find_by_name(zone, &relative)
            .await
            .inspect_err(|e| error!(error = %e, zone, name, "Record lookup failed"))
    }

    /// Placeholder SOA for zones without one; never touches the store.
    pub fn static_soa(&self, zone: &str, name: &str) -> Vec<ZoneRecord> {
        vec![ZoneRecord::static_soa(zone, name)]
    }

    async fn lookup(
        &self,
        zone: &str,
        name: &str,
        types: &[RecordType],
    ) -> Result<Vec<ZoneRecord>, DomainError> {
        let relative = relative_name(zone, name);

        let result = if relative.is_empty() && types == [RecordType::SOA] {
            self.store.find_by_types(zone, types).await
        } else {
            self.store.find_by_name_and_types(zone, &relative, types).await
        };

        result.inspect_err(|e| error!(error = %e, zone, name, "Record lookup failed"))
    }

    async fn wildcard_lookup(
        &self,
        zone: &str,
        name: &str,
        types: &[RecordType],
    ) -> Result<Vec<ZoneRecord>, DomainError> {
        for candidate in wildcard_candidates(zone, name) {
            let mut records = self.lookup(zone, &candidate, types).await?;
            if !records.is_empty() {
                debug!(zone, name, wildcard = %candidate, "Matched wildcard owner");
                let owner = relative_name(zone, name);
                for record in &mut records {
                    record.name.clone_from(&owner);
                }
                return Ok(records);
            }
        }
        Ok(Vec::new())
    }
}
