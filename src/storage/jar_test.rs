use super::*;
use crate::storage::clock::ManualClock;
use std::time::Duration;

fn jar() -> (ManualClock, MemoryCookieJar<ManualClock>) {
    let clock = ManualClock::at("2026-10-18T12:00:00+00:00");
    (clock.clone(), MemoryCookieJar::new(clock))
}

#[test]
fn empty_jar_yields_empty_string() {
    let (_, jar) = jar();
    assert_eq!(jar.cookie_string().unwrap(), "");
}

#[test]
fn set_cookie_stores_pair_without_attributes() {
    let (_, jar) = jar();
    jar.set_cookie("a=1; expires=Mon, 19 Oct 2026 00:00:00 GMT; path=/; samesite=lax").unwrap();
    jar.set_cookie("b=2; expires=Mon, 19 Oct 2026 00:00:00 GMT; path=/; samesite=lax").unwrap();
    assert_eq!(jar.cookie_string().unwrap(), "a=1; b=2");
}

#[test]
fn set_cookie_replaces_same_name() {
    let (_, jar) = jar();
    jar.set_cookie("a=1; path=/").unwrap();
    jar.set_cookie("a=2; path=/").unwrap();
    assert_eq!(jar.cookie_string().unwrap(), "a=2");
    assert_eq!(jar.live_count(), 1);
}

#[test]
fn expired_cookie_disappears_when_clock_passes_expiry() {
    let (clock, jar) = jar();
    jar.set_cookie("a=1; expires=Mon, 19 Oct 2026 00:00:00 GMT; path=/").unwrap();
    assert_eq!(jar.live_count(), 1);

    clock.advance(Duration::from_secs(12 * 3600));
    assert_eq!(jar.cookie_string().unwrap(), "");
    assert_eq!(jar.live_count(), 0);
}

#[test]
fn epoch_expiry_removes_immediately() {
    let (_, jar) = jar();
    jar.set_cookie("a=1; path=/").unwrap();
    jar.set_cookie("a=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/").unwrap();
    assert_eq!(jar.cookie_string().unwrap(), "");
}

#[test]
fn malformed_assignment_is_rejected() {
    let (_, jar) = jar();
    assert!(matches!(jar.set_cookie("no-equals-sign"), Err(StorageError::Rejected(_))));
    assert!(matches!(
        jar.set_cookie("a=1; expires=not a date"),
        Err(StorageError::Rejected(_))
    ));
}

#[test]
fn insert_raw_bypasses_encoding() {
    let (_, jar) = jar();
    jar.insert_raw("k", "%7Bbroken");
    assert_eq!(jar.cookie_string().unwrap(), "k=%7Bbroken");
}
