//! RGBA color values decoded from study branding payloads.
//!
//! Study configurations carry theme colors as 24-bit packed integers or hex
//! strings. The decoded form is a channel quadruple normalized to
//! `[0.0, 1.0]`, ready to hand to a rendering layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGBA color with every channel in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel (1.0 = fully opaque).
    pub a: f32,
}

impl Rgba {
    /// Neutral gray returned when a hex color string cannot be decoded.
    pub const GRAY: Rgba = Rgba {
        r: 0.5,
        g: 0.5,
        b: 0.5,
        a: 1.0,
    };

    /// Build a color from raw channels. Each channel is clamped into
    /// `[0.0, 1.0]`; a NaN channel collapses to 0.0.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: unit(r),
            g: unit(g),
            b: unit(b),
            a: unit(a),
        }
    }

    /// Decode a 24-bit packed RGB integer (red in bits 16-23, green in
    /// bits 8-15, blue in bits 0-7) into a fully opaque color.
    pub fn from_packed(rgb: u32) -> Self {
        Self::from_packed_with_alpha(rgb, 1.0)
    }

    /// Decode a 24-bit packed RGB integer with an explicit alpha channel.
    /// Bits above 23 are ignored; alpha is clamped into `[0.0, 1.0]`,
    /// NaN collapsing to 0.0.
    pub fn from_packed_with_alpha(rgb: u32, alpha: f32) -> Self {
        Self::new(
            ((rgb & 0xff_0000) >> 16) as f32 / 255.0,
            ((rgb & 0x00_ff00) >> 8) as f32 / 255.0,
            (rgb & 0x00_00ff) as f32 / 255.0,
            alpha,
        )
    }
}

/// NaN has no ordering, so `clamp` would pass it through unchanged.
fn unit(channel: f32) -> f32 {
    if channel.is_nan() {
        0.0
    } else {
        channel.clamp(0.0, 1.0)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({:.3}, {:.3}, {:.3}, {:.3})",
            self.r, self.g, self.b, self.a
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_channel_bits() {
        let red = Rgba::from_packed(0xff0000);
        assert_eq!(red, Rgba::new(1.0, 0.0, 0.0, 1.0));

        let green = Rgba::from_packed(0x00ff00);
        assert_eq!(green, Rgba::new(0.0, 1.0, 0.0, 1.0));

        let blue = Rgba::from_packed(0x0000ff);
        assert_eq!(blue, Rgba::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn alpha_defaults_to_opaque() {
        assert_eq!(Rgba::from_packed(0x123456).a, 1.0);
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Rgba::from_packed_with_alpha(0x000000, 2.0).a, 1.0);
        assert_eq!(Rgba::from_packed_with_alpha(0x000000, -1.0).a, 0.0);
    }

    #[test]
    fn nan_channels_collapse_to_zero() {
        let c = Rgba::new(f32::NAN, 0.25, 0.25, f32::NAN);
        assert_eq!(c, Rgba::new(0.0, 0.25, 0.25, 0.0));

        assert_eq!(Rgba::from_packed_with_alpha(0x336699, f32::NAN).a, 0.0);
    }

    #[test]
    fn channels_stay_in_unit_range() {
        let c = Rgba::new(-0.5, 1.5, 0.25, 0.5);
        assert_eq!(c, Rgba::new(0.0, 1.0, 0.25, 0.5));
    }
}
