mod record_type;
mod zone_record;

pub use record_type::RecordType;
pub use zone_record::{ZoneRecord, STATIC_SOA_TTL};
