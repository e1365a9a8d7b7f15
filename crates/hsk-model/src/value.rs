//! Dynamic field values exchanged with the study backend.
//!
//! Server responses arrive as loosely-typed JSON. [`FieldValue`] is the
//! in-memory form those payloads are checked against before any screen or
//! storage layer consumes them, with [`FieldValue::Absent`] standing in for
//! both JSON `null` and a missing key.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The runtime type tag of a present [`FieldValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Boolean flag.
    Bool,
    /// Signed integer.
    Int,
    /// Floating-point number.
    Float,
    /// Text string.
    Text,
    /// Wall-clock date and time without an offset.
    Date,
    /// String-keyed mapping of nested values.
    Mapping,
    /// Ordered sequence of nested values.
    Sequence,
}

impl ValueKind {
    /// Lowercase tag name used in CLI arguments and log output.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
            ValueKind::Date => "date",
            ValueKind::Mapping => "mapping",
            ValueKind::Sequence => "sequence",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bool" => Ok(ValueKind::Bool),
            "int" => Ok(ValueKind::Int),
            "float" => Ok(ValueKind::Float),
            "text" => Ok(ValueKind::Text),
            "date" => Ok(ValueKind::Date),
            "mapping" => Ok(ValueKind::Mapping),
            "sequence" => Ok(ValueKind::Sequence),
            _ => Err(format!("Unknown value kind: {s}")),
        }
    }
}

/// A dynamically typed value read from a backend payload.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Missing key or explicit JSON `null`.
    Absent,
    /// Boolean flag.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Text string.
    Text(String),
    /// Wall-clock date and time without an offset.
    Date(NaiveDateTime),
    /// String-keyed mapping of nested values.
    Mapping(BTreeMap<String, FieldValue>),
    /// Ordered sequence of nested values.
    Sequence(Vec<FieldValue>),
}

impl FieldValue {
    /// The type tag of this value, or `None` for [`FieldValue::Absent`].
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            FieldValue::Absent => None,
            FieldValue::Bool(_) => Some(ValueKind::Bool),
            FieldValue::Int(_) => Some(ValueKind::Int),
            FieldValue::Float(_) => Some(ValueKind::Float),
            FieldValue::Text(_) => Some(ValueKind::Text),
            FieldValue::Date(_) => Some(ValueKind::Date),
            FieldValue::Mapping(_) => Some(ValueKind::Mapping),
            FieldValue::Sequence(_) => Some(ValueKind::Sequence),
        }
    }

    /// True when the value is [`FieldValue::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(value: NaiveDateTime) -> Self {
        FieldValue::Date(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => FieldValue::Absent,
        }
    }
}

impl From<JsonValue> for FieldValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => FieldValue::Absent,
            JsonValue::Bool(b) => FieldValue::Bool(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Int(i),
                None => FieldValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => FieldValue::Text(s),
            JsonValue::Array(items) => {
                FieldValue::Sequence(items.into_iter().map(FieldValue::from).collect())
            }
            JsonValue::Object(entries) => FieldValue::Mapping(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, FieldValue::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_becomes_absent() {
        assert_eq!(FieldValue::from(json!(null)), FieldValue::Absent);
        assert!(FieldValue::from(json!(null)).is_absent());
    }

    #[test]
    fn integers_stay_integers() {
        assert_eq!(FieldValue::from(json!(42)), FieldValue::Int(42));
        assert_eq!(FieldValue::from(json!(-7)), FieldValue::Int(-7));
    }

    #[test]
    fn fractional_numbers_become_floats() {
        assert_eq!(FieldValue::from(json!(1.5)), FieldValue::Float(1.5));
    }

    #[test]
    fn nested_payloads_convert_recursively() {
        let value = FieldValue::from(json!({
            "name": "Sam",
            "scores": [1, 2.5],
        }));
        let FieldValue::Mapping(map) = value else {
            panic!("expected a mapping");
        };
        assert_eq!(map["name"], FieldValue::Text("Sam".into()));
        assert_eq!(
            map["scores"],
            FieldValue::Sequence(vec![FieldValue::Int(1), FieldValue::Float(2.5)])
        );
    }

    #[test]
    fn kind_tags_match_variants() {
        assert_eq!(FieldValue::Absent.kind(), None);
        assert_eq!(FieldValue::Bool(true).kind(), Some(ValueKind::Bool));
        assert_eq!(FieldValue::Text(String::new()).kind(), Some(ValueKind::Text));
    }

    #[test]
    fn value_kind_parses_case_insensitively() {
        assert_eq!("Text".parse::<ValueKind>(), Ok(ValueKind::Text));
        assert_eq!(" SEQUENCE ".parse::<ValueKind>(), Ok(ValueKind::Sequence));
        assert!("blob".parse::<ValueKind>().is_err());
    }
}
