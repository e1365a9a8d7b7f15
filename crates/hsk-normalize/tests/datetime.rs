//! Behavior tests for date canonicalization.
//!
//! Exact wall-clock assertions use the UTC policy so they hold under any
//! host timezone; local-policy tests assert offset-independent facts
//! (sub-second truncation, round-trip identity) only.

use chrono::{Local, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use hsk_normalize::datetime::TRANSPORT_PATTERN;
use hsk_normalize::{
    DateFormat, TimezonePolicy, date_from_string, date_from_string_with_format,
    date_from_string_without_timezone, date_string_with_format, date_to_transport_string,
    find_date_from_string, short_format,
};

fn naive(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .and_then(|date| date.and_hms_opt(h, mi, s))
        .expect("valid test datetime")
}

// =========================================================================
// Transport parsing
// =========================================================================

#[test]
fn utc_policy_parses_exact_wall_clock() {
    let transport_utc = DateFormat::new(TRANSPORT_PATTERN, TimezonePolicy::Utc);
    assert_eq!(
        transport_utc.parse("2020-05-01T10:15:30.000+0000"),
        Some(naive(2020, 5, 1, 10, 15, 30))
    );
    // The offset is applied before conversion.
    assert_eq!(
        transport_utc.parse("2020-05-01T10:15:30.000+0530"),
        Some(naive(2020, 5, 1, 4, 45, 30))
    );
}

#[test]
fn canonical_format_of_utc_parse_is_exact() {
    let transport_utc = DateFormat::new(TRANSPORT_PATTERN, TimezonePolicy::Utc);
    let parsed = transport_utc
        .parse("2020-05-01T10:15:30.000+0000")
        .expect("transport parse");
    assert_eq!(DateFormat::canonical().format(&parsed), "2020-05-01 10:15:30");
}

#[test]
fn local_parse_truncates_subseconds() {
    let parsed = date_from_string("2020-05-01T10:15:30.987+0000").expect("transport parse");
    // Offsets are whole minutes everywhere, so the second and sub-second
    // fields survive conversion to any host timezone.
    assert_eq!(parsed.second(), 30);
    assert_eq!(parsed.nanosecond(), 0);
}

#[test]
fn transport_parse_rejects_non_matching_input() {
    assert_eq!(date_from_string(""), None);
    assert_eq!(date_from_string("2020-05-01"), None);
    assert_eq!(date_from_string("2020-05-01 10:15:30"), None);
    assert_eq!(date_from_string("not a date"), None);
}

#[test]
fn transport_parse_requires_three_millisecond_digits() {
    // the wire format always carries .SSS; a bare-second timestamp is
    // a different format, not a sloppy transport one
    assert_eq!(date_from_string("2020-05-01T10:15:30+0000"), None);
    assert_eq!(date_from_string("2020-05-01T10:15:30.9+0000"), None);
    assert_eq!(date_from_string("2020-05-01T10:15:30.98+0000"), None);
}

// =========================================================================
// Offset-stripped parsing
// =========================================================================

#[test]
fn stripped_parse_takes_the_wall_clock_verbatim() {
    // Everything after the fractional dot, including the offset, is
    // discarded, so the result never depends on the host timezone.
    assert_eq!(
        date_from_string_without_timezone("2020-05-01T10:15:30.987+0530"),
        Some(naive(2020, 5, 1, 10, 15, 30))
    );
    assert_eq!(
        date_from_string_without_timezone("2020-05-01T10:15:30.000+0000"),
        Some(naive(2020, 5, 1, 10, 15, 30))
    );
}

#[test]
fn stripped_parse_accepts_input_without_fraction() {
    assert_eq!(
        date_from_string_without_timezone("2020-05-01T10:15:30"),
        Some(naive(2020, 5, 1, 10, 15, 30))
    );
}

#[test]
fn stripped_parse_rejects_non_matching_input() {
    assert_eq!(date_from_string_without_timezone(""), None);
    assert_eq!(date_from_string_without_timezone("2020-05-01"), None);
    assert_eq!(date_from_string_without_timezone("garbage.000"), None);
}

// =========================================================================
// Canonical-form lookup
// =========================================================================

#[test]
fn find_date_parses_canonical_form_only() {
    assert_eq!(
        find_date_from_string("2020-05-01 10:15:30"),
        Some(naive(2020, 5, 1, 10, 15, 30))
    );
    assert_eq!(find_date_from_string("2020-05-01T10:15:30"), None);
    assert_eq!(find_date_from_string("2020-05-01"), None);
}

#[test]
fn canonicalization_is_idempotent() {
    let parsed = date_from_string("2020-05-01T10:15:30.987+0000").expect("transport parse");
    let rendered = DateFormat::canonical().format(&parsed);
    assert_eq!(find_date_from_string(&rendered), Some(parsed));
}

// =========================================================================
// Caller-supplied patterns
// =========================================================================

#[test]
fn caller_pattern_formats_with_fixed_locale() {
    let value = naive(2020, 5, 1, 10, 15, 30);
    assert_eq!(date_string_with_format("%d/%m/%Y", &value), "01/05/2020");
    assert_eq!(
        date_string_with_format("%Y-%m-%d %H:%M", &value),
        "2020-05-01 10:15"
    );
}

#[test]
fn invalid_caller_pattern_formats_to_empty() {
    assert_eq!(date_string_with_format("%Q", &naive(2020, 5, 1, 0, 0, 0)), "");
}

#[test]
fn fail_fast_parser_accepts_matching_input() {
    assert_eq!(
        date_from_string_with_format("%d/%m/%Y", "01/05/2020").expect("parses"),
        naive(2020, 5, 1, 0, 0, 0)
    );
    assert_eq!(
        date_from_string_with_format("%Y-%m-%d %H:%M:%S", "2020-05-01 10:15:30").expect("parses"),
        naive(2020, 5, 1, 10, 15, 30)
    );
}

#[test]
fn fail_fast_parser_surfaces_pattern_and_input() {
    let err = date_from_string_with_format("%Y-%m-%d %H:%M:%S", "not a date")
        .expect_err("mismatch must be an error");
    let message = err.to_string();
    assert!(message.contains("%Y-%m-%d %H:%M:%S"));
    assert!(message.contains("not a date"));
}

// =========================================================================
// Shared short formatter
// =========================================================================

#[test]
fn short_format_is_a_single_shared_instance() {
    let first = short_format();
    let second = short_format();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn short_format_round_trips_dates() {
    let format = short_format();
    assert_eq!(format.pattern(), "%Y-%m-%d");
    assert_eq!(format.parse("2020-05-01"), Some(naive(2020, 5, 1, 0, 0, 0)));
    assert_eq!(format.format(&naive(2020, 5, 1, 10, 15, 30)), "2020-05-01");
}

// =========================================================================
// Transport serialization
// =========================================================================

#[test]
fn transport_string_round_trips_through_local_parse() {
    let wall = naive(2021, 6, 15, 12, 30, 45);
    let local = Local
        .from_local_datetime(&wall)
        .single()
        .expect("unambiguous local time");
    let wire = date_to_transport_string(&local);
    assert_eq!(date_from_string(&wire), Some(wall));
}
