use super::RecordType;

/// TTL carried by the synthesized placeholder SOA.
pub const STATIC_SOA_TTL: u32 = 60;

/// One row of the records table, or a synthesized equivalent.
///
/// `name` holds the owner column exactly as stored: a name relative to
/// `zone`, the empty string, or the zone itself for apex rows. A `ttl` of 0
/// means the configured default applies when the record is mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRecord {
    pub name: String,
    pub zone: String,
    pub ttl: u32,
    pub record_type: String,
    pub content: String,
}

impl ZoneRecord {
    pub fn new(
        name: impl Into<String>,
        zone: impl Into<String>,
        ttl: u32,
        record_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            zone: zone.into(),
            ttl,
            record_type: record_type.into(),
            content: content.into(),
        }
    }

    /// Placeholder SOA for zones without an explicit SOA row.
    pub fn static_soa(zone: &str, name: &str) -> Self {
        let content = format!(
            "{{'ttl':100,'mbox':hostmaster.{zone},'ns':ns1.{zone}, 'refresh':44,'retry':55,'expire':66}}"
        );
        Self::new(name, zone, STATIC_SOA_TTL, RecordType::SOA.as_str(), content)
    }

    /// Parsed type tag, `None` for tags outside [`RecordType`].
    pub fn kind(&self) -> Option<RecordType> {
        self.record_type.parse().ok()
    }

    /// Fully qualified owner name (without the trailing root dot).
    ///
    /// The stored key is always relative, so any non-empty key other than
    /// the apex form gets the zone appended, even when it already contains
    /// the zone text.
    pub fn owner_name(&self) -> String {
        if self.name.is_empty() || self.name == self.zone {
            return self.zone.clone();
        }
        format!("{}.{}", self.name, self.zone)
    }

    pub fn effective_ttl(&self, default_ttl: u32) -> u32 {
        if self.ttl == 0 {
            default_ttl
        } else {
            self.ttl
        }
    }
}
