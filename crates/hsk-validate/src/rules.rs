//! Rule-based validation for enrollment and sign-in inputs.
//!
//! Each [`FieldKind`] selects one full-string rule. Every check here is
//! total: input that fails its rule yields `false`, never an error.

use std::sync::LazyLock;

use regex::Regex;

use hsk_model::FieldKind;

/// Enrollment email rule. The TLD is limited to 2-4 letters.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,4}$").expect("Invalid email regex")
});

/// Sign-in email rule. Same shape as the enrollment rule but accepts TLDs
/// up to 64 letters.
static EMAIL_LONG_TLD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$")
        .expect("Invalid email regex")
});

/// Person-name rule: alphabetic runs joined by a single space, apostrophe,
/// or hyphen ("O'Brien Smith-Jones").
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+([ '-][A-Za-z]+)*$").expect("Invalid name regex"));

/// Special characters accepted by the enrollment password rule. The rule
/// requires at least one of these.
const PASSWORD_SPECIALS: &str = "!\"#$%&'()*+,-./:;<=>?@^_`{|}~[]";

/// Special characters counted by the strong password policy.
const POLICY_SPECIALS: &str = "!#$%&'()*+,-.:;[]<>=?@^_{}|~";

/// Symbols counted by the text complexity gate.
const COMPLEXITY_SYMBOLS: &str = "~!@#$%^&*()_";

/// Validate an input string against the rule selected by `kind`.
///
/// Rules match the full input; a partial match fails. [`FieldKind::Phone`]
/// has no rule text defined and always fails.
pub fn validate_input_value(value: &str, kind: FieldKind) -> bool {
    match kind {
        FieldKind::Phone => false,
        FieldKind::Name => NAME_REGEX.is_match(value),
        FieldKind::Email => EMAIL_REGEX.is_match(value),
        FieldKind::Password => matches_password_rule(value),
    }
}

/// Enrollment password rule: at least 8 characters, every character ASCII
/// alphanumeric or drawn from [`PASSWORD_SPECIALS`], and at least one
/// special among them. No case or digit requirement.
fn matches_password_rule(value: &str) -> bool {
    if value.chars().count() < 8 {
        return false;
    }
    let mut has_special = false;
    for ch in value.chars() {
        if PASSWORD_SPECIALS.contains(ch) {
            has_special = true;
        } else if !ch.is_ascii_alphanumeric() {
            return false;
        }
    }
    has_special
}

/// Check an email address against the sign-in rule (TLD up to 64 letters).
///
/// Kept separate from [`validate_input_value`] with [`FieldKind::Email`];
/// callers rely on each rule independently.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_LONG_TLD_REGEX.is_match(email)
}

/// Strong password policy: at least one ASCII lowercase letter, one
/// uppercase letter, one digit, and one character from
/// [`POLICY_SPECIALS`], with a total length of 8 to 64 characters.
pub fn is_password_valid(password: &str) -> bool {
    let length = password.chars().count();
    let has_lower = password.chars().any(|ch| ch.is_ascii_lowercase());
    let has_upper = password.chars().any(|ch| ch.is_ascii_uppercase());
    let has_digit = password.chars().any(|ch| ch.is_ascii_digit());
    let has_special = password.chars().any(|ch| POLICY_SPECIALS.contains(ch));
    has_lower && has_upper && has_digit && has_special && length > 7 && length <= 64
}

/// Minimal complexity gate: at least one symbol from
/// [`COMPLEXITY_SYMBOLS`] and at least one ASCII alphanumeric character.
pub fn check_text_sufficient_complexity(text: &str) -> bool {
    let has_symbol = text.chars().any(|ch| COMPLEXITY_SYMBOLS.contains(ch));
    let has_alphanumeric = text.chars().any(|ch| ch.is_ascii_alphanumeric());
    has_symbol && has_alphanumeric
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_rule_always_fails() {
        assert!(!validate_input_value("", FieldKind::Phone));
        assert!(!validate_input_value("5551234567", FieldKind::Phone));
        assert!(!validate_input_value("+1 (555) 123-4567", FieldKind::Phone));
    }

    #[test]
    fn rules_match_the_full_input() {
        // A valid email embedded in a longer string is not a match.
        assert!(validate_input_value("user@example.com", FieldKind::Email));
        assert!(!validate_input_value("see user@example.com here", FieldKind::Email));
        assert!(validate_input_value("Ann", FieldKind::Name));
        assert!(!validate_input_value(" Ann", FieldKind::Name));
    }
}
