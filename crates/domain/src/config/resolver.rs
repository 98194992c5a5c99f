use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// TTL applied to rows whose stored ttl is 0.
    #[serde(default = "default_ttl")]
    pub default_ttl: u32,

    /// Retry unmatched names against `*` owners, walking towards the apex.
    #[serde(default)]
    pub wildcard_fallback: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_ttl: default_ttl(),
            wildcard_fallback: false,
        }
    }
}

fn default_ttl() -> u32 {
    300
}
