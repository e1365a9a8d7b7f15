//! Date string canonicalization for backend payloads.
//!
//! The study backend transmits instants as offset-aware millisecond
//! timestamps. Screens and storage layers work with whole-second
//! wall-clock values, so every parse here canonicalizes: parse with the
//! wire pattern, then round-trip the result through the canonical
//! pattern to drop sub-second and offset precision.
//!
//! Two parsing families exist and stay separate:
//!
//! - the canonicalizing parsers return `Option`; a mismatched input is
//!   absence, not an error;
//! - [`date_from_string_with_format`] is fail-fast and returns a
//!   [`DateFormatError`] the caller must surface.

use std::sync::LazyLock;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use thiserror::Error;

/// Offset-aware millisecond wire pattern used by the study backend.
/// The literal dot keeps the fraction mandatory when parsing; `%.3f`
/// would accept input without one.
pub const TRANSPORT_PATTERN: &str = "%Y-%m-%dT%H:%M:%S.%3f%z";

/// Wire pattern with the offset and fractional seconds removed.
pub const STRIPPED_PATTERN: &str = "%Y-%m-%dT%H:%M:%S";

/// Whole-second, offset-free canonical pattern.
pub const CANONICAL_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// Date-only pattern backing [`short_format`].
pub const SHORT_PATTERN: &str = "%Y-%m-%d";

static SHORT_FORMAT: LazyLock<DateFormat> = LazyLock::new(DateFormat::short);

/// How an offset-aware input is mapped onto a wall-clock value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimezonePolicy {
    /// Convert the parsed instant to the host's local timezone.
    Local,
    /// Convert the parsed instant to UTC.
    Utc,
    /// The pattern carries no offset; take the wall clock as written.
    Stripped,
}

/// An immutable format pattern paired with a timezone policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
    tz: TimezonePolicy,
}

impl DateFormat {
    /// Build a format from a chrono pattern and a timezone policy.
    pub fn new(pattern: impl Into<String>, tz: TimezonePolicy) -> Self {
        Self {
            pattern: pattern.into(),
            tz,
        }
    }

    /// The backend wire format, mapped to local wall-clock time.
    pub fn transport() -> Self {
        Self::new(TRANSPORT_PATTERN, TimezonePolicy::Local)
    }

    /// The wire format with offset and fractional seconds removed.
    pub fn stripped() -> Self {
        Self::new(STRIPPED_PATTERN, TimezonePolicy::Stripped)
    }

    /// The whole-second canonical format.
    pub fn canonical() -> Self {
        Self::new(CANONICAL_PATTERN, TimezonePolicy::Stripped)
    }

    /// The date-only format backing the shared instance.
    pub fn short() -> Self {
        Self::new(SHORT_PATTERN, TimezonePolicy::Stripped)
    }

    /// The chrono pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The timezone policy applied when parsing.
    pub fn policy(&self) -> TimezonePolicy {
        self.tz
    }

    /// Format a wall-clock value with this pattern.
    ///
    /// An invalid pattern yields an empty string rather than a panic.
    pub fn format(&self, value: &NaiveDateTime) -> String {
        use std::fmt::Write as _;

        let mut out = String::new();
        match write!(out, "{}", value.format(&self.pattern)) {
            Ok(()) => out,
            Err(_) => String::new(),
        }
    }

    /// Parse an input string with this pattern.
    ///
    /// Offset-aware policies require the pattern to consume an offset;
    /// [`TimezonePolicy::Stripped`] takes the wall clock as written, and
    /// date-only patterns parse to midnight. Returns `None` when the
    /// input does not match.
    pub fn parse(&self, input: &str) -> Option<NaiveDateTime> {
        match self.tz {
            TimezonePolicy::Local => DateTime::parse_from_str(input, &self.pattern)
                .ok()
                .map(|dt| dt.with_timezone(&Local).naive_local()),
            TimezonePolicy::Utc => DateTime::parse_from_str(input, &self.pattern)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).naive_utc()),
            TimezonePolicy::Stripped => parse_naive(input, &self.pattern).ok(),
        }
    }
}

/// Error from the fail-fast pattern parser.
#[derive(Debug, Error)]
pub enum DateFormatError {
    /// Input text does not match the supplied pattern.
    #[error("date {input:?} does not match pattern {pattern:?}: {source}")]
    Parse {
        pattern: String,
        input: String,
        #[source]
        source: chrono::format::ParseError,
    },
}

/// Canonicalize a backend timestamp into a whole-second local wall-clock
/// value.
///
/// Returns `None` when the input does not match the wire pattern.
pub fn date_from_string(input: &str) -> Option<NaiveDateTime> {
    let parsed = DateFormat::transport().parse(input)?;
    canonicalize(parsed)
}

/// Canonicalize a backend timestamp, ignoring its offset entirely.
///
/// Everything from the fractional-seconds dot onward is discarded before
/// parsing, so the result is the wall clock exactly as transmitted.
pub fn date_from_string_without_timezone(input: &str) -> Option<NaiveDateTime> {
    let head = match input.split_once('.') {
        Some((head, _)) => head,
        None => input,
    };
    let parsed = DateFormat::stripped().parse(head)?;
    canonicalize(parsed)
}

/// Parse a string already in canonical whole-second form. No round-trip.
pub fn find_date_from_string(input: &str) -> Option<NaiveDateTime> {
    DateFormat::canonical().parse(input)
}

/// Format a wall-clock value with a caller-supplied pattern.
pub fn date_string_with_format(pattern: &str, value: &NaiveDateTime) -> String {
    DateFormat::new(pattern, TimezonePolicy::Stripped).format(value)
}

/// Parse with a caller-supplied pattern, failing hard on mismatch.
///
/// Unlike the canonicalizing parsers, a malformed input here is an error
/// the caller must surface, never a silent absence.
pub fn date_from_string_with_format(
    pattern: &str,
    input: &str,
) -> Result<NaiveDateTime, DateFormatError> {
    parse_naive(input, pattern).map_err(|source| DateFormatError::Parse {
        pattern: pattern.to_owned(),
        input: input.to_owned(),
        source,
    })
}

/// Serialize an instant with the wire pattern in its local offset.
pub fn date_to_transport_string(value: &DateTime<Local>) -> String {
    value.format(TRANSPORT_PATTERN).to_string()
}

/// Shared date-only formatter, constructed once per process.
pub fn short_format() -> &'static DateFormat {
    &SHORT_FORMAT
}

/// Round-trip a value through the canonical pattern, truncating it to
/// whole seconds.
fn canonicalize(value: NaiveDateTime) -> Option<NaiveDateTime> {
    let canonical = DateFormat::canonical();
    canonical.parse(&canonical.format(&value))
}

/// Parse a wall-clock value, falling back to midnight for date-only
/// patterns.
fn parse_naive(input: &str, pattern: &str) -> Result<NaiveDateTime, chrono::format::ParseError> {
    NaiveDateTime::parse_from_str(input, pattern).or_else(|err| {
        match NaiveDate::parse_from_str(input, pattern) {
            Ok(date) => Ok(date.and_time(NaiveTime::MIN)),
            Err(_) => Err(err),
        }
    })
}
