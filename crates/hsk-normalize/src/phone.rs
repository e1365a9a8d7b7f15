//! Phone number normalization.
//!
//! Enrollment screens accept phone numbers with free-form punctuation.
//! These helpers strip that punctuation so downstream checks see digits
//! only; no digit validation happens here.

/// Punctuation stripped from phone-like input before measuring it.
const PHONE_PUNCTUATION: &[char] = &['(', ')', ' ', '-', '+'];

/// Strip phone punctuation, then keep at most the last 10 characters.
///
/// Inputs with a country prefix collapse to the national significant
/// digits; shorter inputs come back unchanged apart from the stripping.
pub fn format_number(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|ch| !PHONE_PUNCTUATION.contains(ch))
        .collect();
    let length = cleaned.chars().count();
    if length > 10 {
        cleaned.chars().skip(length - 10).collect()
    } else {
        cleaned
    }
}

/// Length of phone-like input after stripping punctuation. No truncation.
pub fn digit_length(input: &str) -> usize {
    input
        .chars()
        .filter(|ch| !PHONE_PUNCTUATION.contains(ch))
        .count()
}
