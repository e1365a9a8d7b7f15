//! Report payloads the CLI prints after each command.
//!
//! Commands build one of these structs and hand it to the summary printer;
//! keeping the construction here, free of terminal concerns, lets the exit
//! code logic be tested without running the binary.

use std::path::PathBuf;

use hsk_model::{DirectoryType, FieldKind, FieldValue, Rgba, ValueKind};
use hsk_normalize::{
    DateFormat, DateFormatError, date_from_string, date_from_string_with_format,
    date_from_string_without_timezone, decode_hex_color,
};
use hsk_validate::{
    check_text_sufficient_complexity, is_password_valid, is_valid_object, is_valid_value,
    is_valid_value_of_type, validate_input_value,
};

/// Outcome of running one field rule against a candidate value.
#[derive(Debug, Clone)]
pub struct ValidateReport {
    /// Field the rule belongs to.
    pub kind: FieldKind,
    /// Whether the field's own rule accepted the value.
    pub accepted: bool,
    /// Per-check detail, present only for password values.
    pub password: Option<PasswordBreakdown>,
}

/// Results of the three distinct password checks, reported side by side.
#[derive(Debug, Clone, Copy)]
pub struct PasswordBreakdown {
    /// Enrollment rule: at least 8 characters, at least one special,
    /// nothing outside the allowed classes.
    pub enrollment_rule: bool,
    /// Strong policy: all four character classes and 8 to 64 characters.
    pub strong_policy: bool,
    /// Complexity gate: at least one symbol next to alphanumerics.
    pub complexity: bool,
}

/// Run the rule for `kind` against `value`.
///
/// Password values additionally get the full three-check breakdown so the
/// caller can show which policy rejected them.
pub fn validate_report(kind: FieldKind, value: &str) -> ValidateReport {
    let accepted = validate_input_value(value, kind);
    let password = (kind == FieldKind::Password).then(|| PasswordBreakdown {
        enrollment_rule: accepted,
        strong_policy: is_password_valid(value),
        complexity: check_text_sufficient_complexity(value),
    });
    ValidateReport {
        kind,
        accepted,
        password,
    }
}

/// Presence and type facts about one decoded payload value.
#[derive(Debug, Clone)]
pub struct ValueReport {
    /// Runtime kind of the value, `None` when absent.
    pub kind: Option<ValueKind>,
    /// Whether the value passes the scalar presence check.
    pub valid_value: bool,
    /// Whether the value is a non-empty container.
    pub valid_object: bool,
    /// Result of an explicit `--expect` type check, when one was requested.
    pub expected: Option<ExpectedKind>,
    /// Overall verdict, combining presence with any expected-kind check.
    pub accepted: bool,
}

/// Result of checking a value against an explicitly expected kind.
#[derive(Debug, Clone, Copy)]
pub struct ExpectedKind {
    /// The kind the caller asked for.
    pub kind: ValueKind,
    /// Whether the value is of that kind.
    pub matched: bool,
}

/// Inspect a payload value, optionally requiring it to be of `expect` kind.
pub fn value_report(value: &FieldValue, expect: Option<ValueKind>) -> ValueReport {
    let valid_value = is_valid_value(value);
    let valid_object = is_valid_object(value);
    let expected = expect.map(|kind| ExpectedKind {
        kind,
        matched: is_valid_value_of_type(value, kind),
    });
    let usable = valid_value || valid_object;
    let accepted = match expected {
        Some(check) => check.matched && usable,
        None => usable,
    };
    ValueReport {
        kind: value.kind(),
        valid_value,
        valid_object,
        expected,
        accepted,
    }
}

/// Canonicalization outcome for one date string.
#[derive(Debug, Clone)]
pub struct DateReport {
    /// The string as given on the command line.
    pub input: String,
    /// Canonical `yyyy-MM-dd HH:mm:ss` form, `None` when parsing failed.
    pub canonical: Option<String>,
}

/// Canonicalize a transport date string, or a timezone-stripped one when
/// `stripped` is set. Unparseable input yields a report with no canonical
/// form rather than an error.
pub fn date_report(input: &str, stripped: bool) -> DateReport {
    let parsed = if stripped {
        date_from_string_without_timezone(input)
    } else {
        date_from_string(input)
    };
    DateReport {
        input: input.to_string(),
        canonical: parsed.map(|value| DateFormat::canonical().format(&value)),
    }
}

/// Canonicalize a date string against a caller-supplied chrono pattern.
///
/// # Errors
///
/// Returns the parse failure when the input does not match the pattern.
pub fn date_report_with_pattern(
    pattern: &str,
    input: &str,
) -> Result<DateReport, DateFormatError> {
    let parsed = date_from_string_with_format(pattern, input)?;
    Ok(DateReport {
        input: input.to_string(),
        canonical: Some(DateFormat::canonical().format(&parsed)),
    })
}

/// Decoded color channels for one hex input.
#[derive(Debug, Clone)]
pub struct ColorReport {
    /// The string as given on the command line.
    pub input: String,
    /// Decoded channels, with any alpha override already applied.
    pub rgba: Rgba,
    /// Whether the input was undecodable and the gray sentinel was used.
    pub fallback: bool,
}

/// Decode a hex color string, optionally overriding the alpha channel.
pub fn color_report(input: &str, alpha: Option<f32>) -> ColorReport {
    let decoded = decode_hex_color(input);
    // No 6-digit hex value decodes to exact 0.5 channels, so equality with
    // the sentinel is unambiguous.
    let fallback = decoded == Rgba::GRAY;
    let rgba = match alpha {
        Some(alpha) => Rgba::new(decoded.r, decoded.g, decoded.b, alpha),
        None => decoded,
    };
    ColorReport {
        input: input.to_string(),
        rgba,
        fallback,
    }
}

/// A resolved storage bucket directory.
#[derive(Debug, Clone)]
pub struct StorageReport {
    /// Bucket that was resolved.
    pub bucket: DirectoryType,
    /// Documents root the bucket lives under.
    pub root: PathBuf,
    /// Absolute path of the bucket directory.
    pub path: PathBuf,
}
