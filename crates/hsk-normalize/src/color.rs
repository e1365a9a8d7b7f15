//! Hex color decoding for study theme payloads.
//!
//! Study configurations carry theme colors either as 24-bit packed
//! integers or as hex strings with an optional `#` prefix. Decoding is
//! total: malformed hex strings come back as the gray sentinel, never as
//! an error.

use hex::FromHex;

use hsk_model::Rgba;

/// Decode a 24-bit packed RGB integer. Alpha defaults to fully opaque.
pub fn color_from_packed(rgb: u32, alpha: Option<f32>) -> Rgba {
    match alpha {
        Some(alpha) => Rgba::from_packed_with_alpha(rgb, alpha),
        None => Rgba::from_packed(rgb),
    }
}

/// Decode a hex color string like `"#FF0000"`.
///
/// Surrounding whitespace is trimmed and one leading `#` is stripped. If
/// the remainder is not exactly six hex characters, [`Rgba::GRAY`] is
/// returned. Case-insensitive; alpha is fixed at fully opaque.
pub fn decode_hex_color(input: &str) -> Rgba {
    let trimmed = input.trim();
    let hex_part = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if hex_part.chars().count() != 6 {
        return Rgba::GRAY;
    }
    match <[u8; 3]>::from_hex(hex_part) {
        Ok([r, g, b]) => Rgba::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            1.0,
        ),
        Err(_) => Rgba::GRAY,
    }
}
