//! Owner-name arithmetic shared by the resolver and the store adapters.

/// The reserved wildcard label.
pub const WILDCARD_LABEL: &str = "*";

const WILDCARD_PREFIX: &str = "*.";

/// Storage key for `name` inside `zone`.
///
/// The apex maps to the empty string. Any other name has the literal suffix
/// `"." + zone` removed; a name outside the zone is returned unchanged and
/// will simply match no row.
pub fn relative_name(zone: &str, name: &str) -> String {
    if name == zone {
        return String::new();
    }
    let suffix = format!(".{}", zone);
    name.strip_suffix(suffix.as_str()).unwrap_or(name).to_string()
}

/// Wildcard owners to try, in order, when `name` has no exact match.
///
/// `x.y.z` in zone `z` yields `*.y.z` then `*.z`. The bare `*` is never
/// produced and no candidate climbs above the zone apex.
pub fn wildcard_candidates(zone: &str, name: &str) -> Vec<String> {
    let mut candidates = Vec::new();
    if name == zone || name == WILDCARD_LABEL {
        return candidates;
    }

    let zone_suffix = format!(".{}", zone);
    let mut current = name.to_string();
    loop {
        let base = current.strip_prefix(WILDCARD_PREFIX).unwrap_or(&current);
        let Some(boundary) = next_label_boundary(base) else {
            break;
        };
        let parent = &base[boundary + 1..];
        if parent != zone && !parent.ends_with(zone_suffix.as_str()) {
            break;
        }

        let candidate = format!("{}{}", WILDCARD_PREFIX, parent);
        candidates.push(candidate.clone());
        current = candidate;
    }
    candidates
}

/// Byte offset of the first unescaped `.` in `name`.
fn next_label_boundary(name: &str) -> Option<usize> {
    let bytes = name.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'.' => return Some(i),
            _ => i += 1,
        }
    }
    None
}
