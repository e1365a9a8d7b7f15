//! Generic validity checks over dynamic payload values.
//!
//! These checks gate loosely-typed backend payloads before field access.
//! All three are total functions; absence and type mismatches come back as
//! `false`, never as an error.

use hsk_model::{FieldValue, ValueKind};

/// Check that a payload value is present and carries a usable scalar.
///
/// Integers of any sign pass; floats must be finite, non-zero, and
/// strictly positive. Text must be non-empty after trimming. Mappings and
/// sequences always fail here; use [`is_valid_object`] for those.
pub fn is_valid_value(value: &FieldValue) -> bool {
    match value {
        FieldValue::Absent => false,
        FieldValue::Bool(_) => true,
        FieldValue::Int(_) => true,
        FieldValue::Float(f) => f.is_finite() && *f != 0.0 && *f > 0.0,
        FieldValue::Text(s) => !s.trim().is_empty(),
        FieldValue::Date(_) => true,
        FieldValue::Mapping(_) | FieldValue::Sequence(_) => false,
    }
}

/// Check that a payload value is present and carries the expected type tag.
pub fn is_valid_value_of_type(value: &FieldValue, expected: ValueKind) -> bool {
    match value.kind() {
        Some(kind) => kind == expected,
        None => false,
    }
}

/// Check that a payload value is a non-empty mapping or sequence.
///
/// Scalars always fail here; an empty container is as invalid as a
/// missing one.
pub fn is_valid_object(value: &FieldValue) -> bool {
    match value {
        FieldValue::Mapping(entries) => !entries.is_empty(),
        FieldValue::Sequence(items) => !items.is_empty(),
        _ => false,
    }
}
