//! Field kinds for rule-based input validation.
//!
//! Each kind selects one named validation rule set. The kinds mirror the
//! input fields collected by the study enrollment and sign-in screens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of input field a validation rule set applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Phone-like input. No rule text is defined for this kind; validation
    /// always fails so callers cannot mistake it for a real rule.
    Phone,
    /// Person name: alphabetic runs joined by a space, apostrophe, or hyphen.
    Name,
    /// Email address with a 2-4 character TLD.
    Email,
    /// Sign-up password under the primary (length + special char) rule.
    Password,
}

impl FieldKind {
    /// Returns the canonical kind name used in payloads and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Phone => "Phone",
            FieldKind::Name => "Name",
            FieldKind::Email => "Email",
            FieldKind::Password => "Password",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    /// Parse a kind name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PHONE" => Ok(FieldKind::Phone),
            "NAME" => Ok(FieldKind::Name),
            "EMAIL" => Ok(FieldKind::Email),
            "PASSWORD" => Ok(FieldKind::Password),
            _ => Err(format!("Unknown field kind: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("email".parse::<FieldKind>(), Ok(FieldKind::Email));
        assert_eq!("PASSWORD".parse::<FieldKind>(), Ok(FieldKind::Password));
        assert_eq!(" Name ".parse::<FieldKind>(), Ok(FieldKind::Name));
        assert!("address".parse::<FieldKind>().is_err());
    }

    #[test]
    fn round_trips_through_display() {
        for kind in [
            FieldKind::Phone,
            FieldKind::Name,
            FieldKind::Email,
            FieldKind::Password,
        ] {
            assert_eq!(kind.to_string().parse::<FieldKind>(), Ok(kind));
        }
    }
}
