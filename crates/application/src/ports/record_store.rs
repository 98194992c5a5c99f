use async_trait::async_trait;
use sqldns_domain::{DomainError, RecordType, ZoneRecord};

/// Read-only access to the records table.
///
/// `name` arguments are storage keys, already made relative to `zone`.
/// Rows are returned in storage order; no match is an empty vector.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn find_by_name_and_types(
        &self,
        zone: &str,
        name: &str,
        types: &[RecordType],
    ) -> Result<Vec<ZoneRecord>, DomainError>;

    async fn find_by_name(&self, zone: &str, name: &str) -> Result<Vec<ZoneRecord>, DomainError>;

    /// Rows of `zone` with one of `types`, whatever their owner.
    async fn find_by_types(
        &self,
        zone: &str,
        types: &[RecordType],
    ) -> Result<Vec<ZoneRecord>, DomainError>;

    async fn distinct_zones(&self) -> Result<Vec<String>, DomainError>;

    async fn ping(&self) -> Result<(), DomainError>;
}
