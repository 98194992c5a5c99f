use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// The served zone names as of one refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneSnapshot {
    zones: Vec<String>,
    refreshed_at: Option<DateTime<Utc>>,
}

impl ZoneSnapshot {
    /// Builds a snapshot, dropping repeated names while keeping first-seen order.
    pub fn new(zones: Vec<String>, refreshed_at: DateTime<Utc>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(zones.len());
        for zone in zones {
            if !unique.contains(&zone) {
                unique.push(zone);
            }
        }
        Self {
            zones: unique,
            refreshed_at: Some(refreshed_at),
        }
    }

    pub fn zones(&self) -> &[String] {
        &self.zones
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn contains(&self, zone: &str) -> bool {
        self.zones.iter().any(|z| z == zone)
    }

    /// Longest cached zone that is `qname` itself or one of its parents.
    pub fn best_match(&self, qname: &str) -> Option<&str> {
        let qname = qname.trim_end_matches('.');
        self.zones
            .iter()
            .filter(|zone| {
                qname == zone.as_str()
                    || (qname.len() > zone.len()
                        && qname.ends_with(zone.as_str())
                        && qname.as_bytes()[qname.len() - zone.len() - 1] == b'.')
            })
            .max_by_key(|zone| zone.len())
            .map(String::as_str)
    }
}

/// Current zone list, swapped as a whole on every successful refresh.
pub struct ZoneCache {
    current: ArcSwap<ZoneSnapshot>,
}

impl ZoneCache {
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(ZoneSnapshot::default()),
        }
    }

    pub fn snapshot(&self) -> Arc<ZoneSnapshot> {
        self.current.load_full()
    }

    pub fn replace(&self, snapshot: ZoneSnapshot) {
        self.current.store(Arc::new(snapshot));
    }
}

impl Default for ZoneCache {
    fn default() -> Self {
        Self::new()
    }
}
