use parcelkit_types::EntityUid;
use std::collections::HashSet;
use std::str::FromStr;

// ── EntityUid ─────────────────────────────────────────────────────

#[test]
fn uid_new_is_unique() {
    let a = EntityUid::new();
    let b = EntityUid::new();
    assert_ne!(a, b);
}

#[test]
fn uid_display_and_from_str_roundtrip() {
    let uid = EntityUid::new();
    let parsed = EntityUid::from_str(&uid.to_string()).unwrap();
    assert_eq!(uid, parsed);
}

#[test]
fn uid_from_str_rejects_garbage() {
    assert!(EntityUid::from_str("not-a-uuid").is_err());
}

#[test]
fn uid_many_are_distinct() {
    let uids: HashSet<_> = (0..100).map(|_| EntityUid::new()).collect();
    assert_eq!(uids.len(), 100);
}

#[test]
fn uid_serde_is_transparent() {
    let uid = EntityUid::new();
    let json = serde_json::to_string(&uid).unwrap();
    assert_eq!(json, format!("\"{uid}\""));
    let back: EntityUid = serde_json::from_str(&json).unwrap();
    assert_eq!(back, uid);
}
