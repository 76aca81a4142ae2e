use super::*;

// =============================================================
// encode_component / decode_component
// =============================================================

#[test]
fn encode_leaves_unreserved_characters() {
    assert_eq!(encode_component("inspiTap.dailyQuote"), "inspiTap.dailyQuote");
    assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
}

#[test]
fn encode_escapes_json_like_encode_uri_component() {
    let json = r#"{"date":"2026-10-18","index":3,"language":"english"}"#;
    assert_eq!(
        encode_component(json),
        "%7B%22date%22%3A%222026-10-18%22%2C%22index%22%3A3%2C%22language%22%3A%22english%22%7D"
    );
}

#[test]
fn encode_escapes_space_and_separators() {
    assert_eq!(encode_component("a b;c=d"), "a%20b%3Bc%3Dd");
}

#[test]
fn encode_utf8_as_percent_bytes() {
    assert_eq!(encode_component("ñ"), "%C3%B1");
}

#[test]
fn decode_reverses_encode() {
    let raw = "Lo que pensamos, en eso nos convertimos.";
    assert_eq!(decode_component(&encode_component(raw)).as_deref(), Some(raw));
}

#[test]
fn decode_rejects_invalid_utf8() {
    assert_eq!(decode_component("%FF%FE"), None);
}

// =============================================================
// http_date / format_set_cookie
// =============================================================

#[test]
fn http_date_formats_epoch() {
    let epoch = DateTime::<Utc>::UNIX_EPOCH;
    assert_eq!(http_date(&epoch), "Thu, 01 Jan 1970 00:00:00 GMT");
}

#[test]
fn http_date_converts_offset_to_gmt() {
    let at = DateTime::parse_from_rfc3339("2026-10-19T00:00:00-05:00").unwrap();
    assert_eq!(http_date(&at), "Mon, 19 Oct 2026 05:00:00 GMT");
}

#[test]
fn format_set_cookie_appends_expiry_and_attributes() {
    let epoch = DateTime::<Utc>::UNIX_EPOCH;
    assert_eq!(
        format_set_cookie("inspiTap.theme", "light", &epoch),
        "inspiTap.theme=light; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/; samesite=lax"
    );
}

// =============================================================
// find
// =============================================================

#[test]
fn find_returns_none_on_empty_string() {
    assert_eq!(find("", "inspiTap.theme"), None);
}

#[test]
fn find_matches_first_and_later_pairs() {
    let cookies = "inspiTap.theme=light; inspiTap.language=spanish";
    assert_eq!(find(cookies, "inspiTap.theme").as_deref(), Some("light"));
    assert_eq!(find(cookies, "inspiTap.language").as_deref(), Some("spanish"));
}

#[test]
fn find_requires_exact_name() {
    let cookies = "xinspiTap.theme=light; inspiTap.themes=dark";
    assert_eq!(find(cookies, "inspiTap.theme"), None);
}

#[test]
fn find_first_duplicate_wins() {
    let cookies = "k=one; k=two";
    assert_eq!(find(cookies, "k").as_deref(), Some("one"));
}

#[test]
fn find_decodes_value() {
    let cookies = "k=%7B%22a%22%3A1%7D";
    assert_eq!(find(cookies, "k").as_deref(), Some(r#"{"a":1}"#));
}

#[test]
fn find_returns_empty_value() {
    assert_eq!(find("k=", "k").as_deref(), Some(""));
}
