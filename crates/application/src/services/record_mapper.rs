//! Conversion of stored rows into protocol resource records.
//!
//! Each supported [`RecordType`] owns one content parser; the table in
//! [`content_parser`] is an exhaustive match so a new type tag cannot be
//! added without deciding how (or whether) it maps.

use hickory_proto::rr::rdata::{A, AAAA, CNAME};
use hickory_proto::rr::{Name, RData, Record};
use sqldns_domain::{DomainError, RecordType, ResolverConfig, ZoneRecord};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use tracing::warn;

type ContentParser = fn(&str) -> Option<RData>;

/// Settings the mapper needs from the active configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingContext {
    pub default_ttl: u32,
}

impl MappingContext {
    pub fn new(default_ttl: u32) -> Self {
        Self { default_ttl }
    }
}

impl From<&ResolverConfig> for MappingContext {
    fn from(config: &ResolverConfig) -> Self {
        Self::new(config.default_ttl)
    }
}

pub struct RecordMapper;

impl RecordMapper {
    /// Builds the IN-class resource record for `record`, owned by the name
    /// reconstructed from its stored key.
    pub fn map(record: &ZoneRecord, ctx: &MappingContext) -> Result<Record, DomainError> {
        Self::map_with_owner(record, &record.owner_name(), ctx)
    }

    /// Builds the IN-class resource record for `record` answering for `owner`.
    ///
    /// The ttl is the stored one, or the context default when it is 0.
    pub fn map_with_owner(
        record: &ZoneRecord,
        owner: &str,
        ctx: &MappingContext,
    ) -> Result<Record, DomainError> {
        let parser = record.kind().and_then(content_parser).ok_or_else(|| {
            warn!(record_type = %record.record_type, "Unsupported record type");
            DomainError::format(&record.record_type, &record.content)
        })?;

        let rdata = parser(&record.content).ok_or_else(|| {
            warn!(
                record_type = %record.record_type,
                content = %record.content,
                "Record content does not match its type"
            );
            DomainError::format(&record.record_type, &record.content)
        })?;

        let name = parse_name(owner).ok_or_else(|| {
            warn!(owner = %owner, "Invalid owner name");
            DomainError::format(&record.record_type, owner)
        })?;

        Ok(Record::from_rdata(
            name,
            record.effective_ttl(ctx.default_ttl),
            rdata,
        ))
    }
}

fn content_parser(kind: RecordType) -> Option<ContentParser> {
    match kind {
        RecordType::A => Some(parse_a as ContentParser),
        RecordType::AAAA => Some(parse_aaaa as ContentParser),
        RecordType::CNAME => Some(parse_cname as ContentParser),
        RecordType::SOA
        | RecordType::NS
        | RecordType::MX
        | RecordType::TXT
        | RecordType::PTR
        | RecordType::SRV
        | RecordType::CAA => None,
    }
}

fn parse_a(content: &str) -> Option<RData> {
    Ipv4Addr::from_str(content).ok().map(|ip| RData::A(A(ip)))
}

fn parse_aaaa(content: &str) -> Option<RData> {
    Ipv6Addr::from_str(content).ok().map(|ip| RData::AAAA(AAAA(ip)))
}

fn parse_cname(content: &str) -> Option<RData> {
    parse_name(content).map(|name| RData::CNAME(CNAME(name)))
}

/// Parses a domain name and makes it fully qualified.
fn parse_name(name: &str) -> Option<Name> {
    if name.is_empty() || name == "." {
        return None;
    }
    let fqdn = if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    };
    Name::from_str(&fqdn).ok()
}
