mod find_records;
mod resolve_host_addresses;

pub use find_records::FindRecordsUseCase;
pub use resolve_host_addresses::ResolveHostAddressesUseCase;
