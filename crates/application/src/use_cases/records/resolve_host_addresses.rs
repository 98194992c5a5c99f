use hickory_proto::rr::Record;
use sqldns_domain::{DomainError, RecordType};
use std::sync::Arc;
use tracing::{error, instrument};

use super::FindRecordsUseCase;
use crate::services::{MappingContext, RecordMapper};

/// A, AAAA and CNAME answers for one owner name, as resource records.
pub struct ResolveHostAddressesUseCase {
    find_records: Arc<FindRecordsUseCase>,
    ctx: MappingContext,
}

impl ResolveHostAddressesUseCase {
    pub fn new(find_records: Arc<FindRecordsUseCase>, ctx: MappingContext) -> Self {
        Self { find_records, ctx }
    }

    /// Answers are owned by `name` as queried. Fails on the first row that
    /// cannot be mapped; no partial answers.
    #[instrument(skip(self))]
    pub async fn execute(&self, zone: &str, name: &str) -> Result<Vec<Record>, DomainError> {
        let records = self
            .find_records
            .by_zone_and_types(zone, name, &RecordType::HOST_ADDRESS)
            .await?;

        records
            .iter()
            .map(|record| RecordMapper::map_with_owner(record, name, &self.ctx))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| error!(error = %e, zone, name, "Host address mapping failed"))
    }
}
