use sqldns_domain::{relative_name, wildcard_candidates};

#[test]
fn test_relative_name_of_apex_is_empty() {
    for zone in ["example.com", "a.b.c.d", "lan", ""] {
        assert_eq!(relative_name(zone, zone), "");
    }
}

#[test]
fn test_relative_name_strips_zone_suffix() {
    assert_eq!(relative_name("example.com", "www.example.com"), "www");
    assert_eq!(relative_name("example.com", "a.b.example.com"), "a.b");
    assert_eq!(relative_name("lan", "printer.lan"), "printer");
}

#[test]
fn test_relative_name_label_plus_zone_roundtrip() {
    let zones = ["example.com", "corp.example.org", "x"];
    let labels = ["www", "mail", "a.b", "_sip._tcp", "*"];

    for zone in zones {
        for label in labels {
            let name = format!("{}.{}", label, zone);
            assert_eq!(relative_name(zone, &name), label, "name {}", name);
        }
    }
}

#[test]
fn test_relative_name_outside_zone_is_unchanged() {
    assert_eq!(relative_name("example.com", "www.example.org"), "www.example.org");
    assert_eq!(relative_name("example.com", "notexample.com"), "notexample.com");
    assert_eq!(relative_name("example.com", "com"), "com");
}

#[test]
fn test_wildcard_cascade_walks_towards_apex() {
    assert_eq!(wildcard_candidates("z", "x.y.z"), vec!["*.y.z", "*.z"]);
    assert_eq!(
        wildcard_candidates("example.com", "a.b.example.com"),
        vec!["*.b.example.com", "*.example.com"]
    );
}

#[test]
fn test_wildcard_cascade_from_wildcard_name_skips_itself() {
    assert_eq!(wildcard_candidates("z", "*.y.z"), vec!["*.z"]);
    assert!(wildcard_candidates("z", "*.z").is_empty());
}

#[test]
fn test_wildcard_cascade_stops_at_bare_wildcard_and_apex() {
    assert!(wildcard_candidates("z", "z").is_empty());
    assert!(wildcard_candidates("z", "*").is_empty());
    assert!(wildcard_candidates("example.com", "example.com").is_empty());
}

#[test]
fn test_wildcard_cascade_never_leaves_zone() {
    assert!(wildcard_candidates("example.com", "www.example.org").is_empty());
    assert_eq!(
        wildcard_candidates("example.com", "www.example.com"),
        vec!["*.example.com"]
    );
}

#[test]
fn test_wildcard_cascade_ignores_escaped_dots() {
    assert_eq!(
        wildcard_candidates("example.com", r"a\.b.example.com"),
        vec!["*.example.com"]
    );
}
