pub mod records;
pub mod zones;

pub use records::{FindRecordsUseCase, ResolveHostAddressesUseCase};
pub use zones::RefreshZonesUseCase;
