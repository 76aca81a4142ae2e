//! `document.cookie` string formatting and lookup.
//!
//! Values are percent-encoded with the same reserved set as JavaScript's
//! `encodeURIComponent`, so cookies written here stay readable by any other
//! script on the page and vice versa.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use chrono::{DateTime, TimeZone, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Attribute suffix applied to every cookie this crate writes.
pub const COOKIE_ATTRIBUTES: &str = "path=/; samesite=lax";

/// Characters left unescaped by `encodeURIComponent`: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a cookie name or value.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// Decode a percent-encoded cookie value.
///
/// Invalid UTF-8 after decoding yields `None`, matching the way
/// `decodeURIComponent` throws on malformed sequences.
pub fn decode_component(encoded: &str) -> Option<String> {
    percent_decode_str(encoded).decode_utf8().ok().map(|s| s.into_owned())
}

/// Format an expiry instant the way `Date.prototype.toUTCString` does,
/// e.g. `Thu, 01 Jan 1970 00:00:00 GMT`.
pub fn http_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    at.with_timezone(&Utc).format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Build the full assignment string for `document.cookie`.
pub fn format_set_cookie<Tz: TimeZone>(name: &str, value: &str, expires: &DateTime<Tz>) -> String {
    format!(
        "{}={}; expires={}; {COOKIE_ATTRIBUTES}",
        encode_component(name),
        encode_component(value),
        http_date(expires),
    )
}

/// Find `name` in a `document.cookie` style string (`a=1; b=2`).
///
/// The first matching pair wins. The raw (still encoded) value is returned.
pub fn find_raw<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split("; ")
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Find and decode `name` in a `document.cookie` style string.
pub fn find(cookies: &str, name: &str) -> Option<String> {
    find_raw(cookies, name).and_then(decode_component)
}
