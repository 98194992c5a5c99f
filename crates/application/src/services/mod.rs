pub mod record_mapper;
pub mod zone_cache;

pub use record_mapper::{MappingContext, RecordMapper};
pub use zone_cache::{ZoneCache, ZoneSnapshot};
