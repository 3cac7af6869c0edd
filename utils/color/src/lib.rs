//! # Color Module
//!
//! This crate provides the color primitives used by every flex-ui widget: a
//! plain sRGB [`Color`] value, lossless conversion to and from [`Hsl`], and the
//! interaction shading helpers that derive hover/press/disabled colors from a
//! single base color.
//!
//! Widgets derive interaction colors with [`Color::shade`], which moves a color
//! linearly toward white (factor above 1) or black (factor below 1).
//! [`Color::brightness`] instead scales HSL lightness directly.
//!
//! ```
//! use flex_ui_color::Color;
//!
//! let primary = Color::from_hex("#6750A4");
//! let hovered = primary.shade(1.1);
//! let disabled = primary.with_alpha(0.6);
//! assert!(hovered.luminance() > primary.luminance());
//! assert!((disabled.alpha - 0.6).abs() < f32::EPSILON);
//! ```

mod hsl;
pub use hsl::Hsl;
mod parse;

use core::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use parse::{parse_hex_color, parse_hex_color_runtime};

/// A color in the (non-linear) sRGB color space with an alpha channel.
///
/// Components are stored as floating point values in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red component (0.0 to 1.0)
    pub red: f32,
    /// Green component (0.0 to 1.0)
    pub green: f32,
    /// Blue component (0.0 to 1.0)
    pub blue: f32,
    /// Opacity/alpha channel (0.0 = transparent, 1.0 = opaque)
    pub alpha: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Errors that can occur when parsing hexadecimal color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HexColorError {
    /// The provided string does not have 6 (`RRGGBB`) or 8 (`AARRGGBB`) digits.
    #[error("expected exactly 6 or 8 hexadecimal digits")]
    InvalidLength,
    /// A non-hexadecimal character was encountered at the provided index.
    #[error("invalid hexadecimal digit at byte index {0}")]
    InvalidDigit(usize),
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    /// Creates an opaque color from red, green, and blue components.
    ///
    /// # Arguments
    /// * `red` - Red component (0.0 to 1.0)
    /// * `green` - Green component (0.0 to 1.0)
    /// * `blue` - Blue component (0.0 to 1.0)
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Creates a color from red, green, blue, and alpha components.
    #[must_use]
    pub const fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from 8-bit components.
    #[must_use]
    pub const fn new_u8(red: u8, green: u8, blue: u8) -> Self {
        Self::argb_u8([0xFF, red, green, blue])
    }

    const fn argb_u8(argb: [u8; 4]) -> Self {
        Self::rgba(
            argb[1] as f32 / 255.0,
            argb[2] as f32 / 255.0,
            argb[3] as f32 / 255.0,
            argb[0] as f32 / 255.0,
        )
    }

    /// Creates an opaque color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self::from_argb_u32(0xFF00_0000 | (rgb & 0x00FF_FFFF))
    }

    /// Creates a color from a packed `0xAARRGGBB` value.
    #[must_use]
    pub const fn from_argb_u32(argb: u32) -> Self {
        Self::argb_u8(argb.to_be_bytes())
    }

    /// Creates a color from a hexadecimal color string.
    ///
    /// Accepts `#RRGGBB`, `#AARRGGBB` and the `0x`/bare forms of both.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid hexadecimal color. Use
    /// [`Color::try_from_hex`] for untrusted input.
    #[must_use]
    pub const fn from_hex(hex: &str) -> Self {
        Self::argb_u8(parse_hex_color(hex))
    }

    /// Attempts to create a color from a hexadecimal string without panicking.
    ///
    /// # Errors
    ///
    /// Returns [`HexColorError`] if the string does not contain six or eight
    /// hexadecimal digits.
    pub fn try_from_hex(hex: &str) -> Result<Self, HexColorError> {
        parse_hex_color_runtime(hex).map(Self::argb_u8)
    }

    /// Packs this color into a `0xAARRGGBB` value.
    #[must_use]
    pub fn to_argb_u32(&self) -> u32 {
        u32::from_be_bytes([
            to_u8(self.alpha),
            to_u8(self.red),
            to_u8(self.green),
            to_u8(self.blue),
        ])
    }

    /// Returns a copy of this color with the alpha channel replaced.
    ///
    /// # Arguments
    /// * `alpha` - Opacity value (0.0 = transparent, 1.0 = opaque)
    #[must_use]
    pub const fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = clamp_unit(alpha);
        self
    }

    /// Converts this color into HSL.
    #[must_use]
    pub fn to_hsl(&self) -> Hsl {
        Hsl::from_rgb(*self)
    }

    /// Creates a color from HSL.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }

    /// Scales the HSL lightness by `factor`.
    ///
    /// A factor below 1 darkens, above 1 brightens. Lightness is clamped to `0.0..=1.0`.
    #[must_use]
    pub fn brightness(self, factor: f32) -> Self {
        let mut hsl = self.to_hsl();
        hsl.lightness = clamp_unit(hsl.lightness * factor);
        hsl.to_rgb()
    }

    /// Linearly interpolates between this color and another color.
    #[must_use]
    pub fn lerp(self, other: Self, factor: f32) -> Self {
        let t = clamp_unit(factor);
        Self {
            red: lerp(self.red, other.red, t),
            green: lerp(self.green, other.green, t),
            blue: lerp(self.blue, other.blue, t),
            alpha: lerp(self.alpha, other.alpha, t),
        }
    }

    /// Mixes the color toward white. `0.0` is unchanged and `1.0` is pure white.
    #[must_use]
    pub fn lighten(self, fraction: f32) -> Self {
        self.lerp(Self::WHITE, fraction)
    }

    /// Mixes the color toward black. `0.0` is unchanged and `1.0` is pure black.
    #[must_use]
    pub fn darken(self, fraction: f32) -> Self {
        self.lerp(Self::BLACK, fraction)
    }

    /// Derives an interaction color from a brightness factor.
    ///
    /// `1.0` returns the color unchanged, `1.0 + x` lightens by `x` and `1.0 - x`
    /// darkens by `x`. This is the single shading algorithm used by the widget
    /// style tables.
    #[must_use]
    pub fn shade(self, factor: f32) -> Self {
        if factor > 1.0 {
            self.lighten(factor - 1.0)
        } else if factor < 1.0 {
            self.darken(1.0 - factor)
        } else {
            self
        }
    }

    /// Relative luminance as defined by WCAG 2.x.
    #[must_use]
    pub fn luminance(&self) -> f32 {
        0.2126f32.mul_add(
            srgb_to_linear(self.red),
            0.7152f32.mul_add(srgb_to_linear(self.green), 0.0722 * srgb_to_linear(self.blue)),
        )
    }

    /// Whether light content should be drawn on top of this color.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.luminance() < 0.5
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_argb_u32())
    }
}

impl FromStr for Color {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = HexColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_string()
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::new_u8(value.0, value.1, value.2)
    }
}

impl From<(f32, f32, f32)> for Color {
    fn from(value: (f32, f32, f32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<(f32, f32, f32, f32)> for Color {
    fn from(value: (f32, f32, f32, f32)) -> Self {
        Self::rgba(value.0, value.1, value.2, value.3)
    }
}

// https://www.w3.org/TR/css-color-4/#color-conversion-code
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(channel: f32) -> u8 {
    (clamp_unit(channel) * 255.0).round() as u8
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (b - a).mul_add(t, a)
}

pub(crate) const fn clamp_unit(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

pub(crate) fn normalize_hue(mut hue: f32) -> f32 {
    hue %= 360.0;
    if hue < 0.0 {
        hue += 360.0;
    }
    hue
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;
    const EPSILON_WIDE: f32 = 1e-3;

    fn approx_eq(a: f32, b: f32, tol: f32) -> bool {
        (a - b).abs() <= tol
    }

    fn assert_color_eq(a: Color, b: Color, tol: f32) {
        assert!(
            approx_eq(a.red, b.red, tol)
                && approx_eq(a.green, b.green, tol)
                && approx_eq(a.blue, b.blue, tol)
                && approx_eq(a.alpha, b.alpha, tol),
            "{a:?} != {b:?}"
        );
    }

    fn samples() -> Vec<Color> {
        let mut colors = vec![
            Color::BLACK,
            Color::WHITE,
            Color::from_hex("#6750A4"),
            Color::from_hex("#B3261E"),
            Color::from_hex("#2196F3"),
            Color::from_hex("#4CAF50"),
            Color::from_hex("#FFEB3B"),
            Color::from_hex("#80FF5722"),
        ];
        for step in 0..=8u8 {
            let v = f32::from(step) / 8.0;
            colors.push(Color::new(v, 1.0 - v, (v * 3.0) % 1.0));
        }
        colors
    }

    #[test]
    fn hsl_roundtrip() {
        for color in samples() {
            let back = Color::from_hsl(color.to_hsl());
            assert_color_eq(color, back, EPSILON_WIDE);
        }
    }

    #[test]
    fn hsl_of_primaries() {
        let red = Color::new(1.0, 0.0, 0.0).to_hsl();
        assert!(approx_eq(red.hue, 0.0, EPSILON));
        assert!(approx_eq(red.saturation, 1.0, EPSILON));
        assert!(approx_eq(red.lightness, 0.5, EPSILON));

        let blue = Color::new(0.0, 0.0, 1.0).to_hsl();
        assert!(approx_eq(blue.hue, 240.0, EPSILON_WIDE));

        let grey = Color::new(0.5, 0.5, 0.5).to_hsl();
        assert!(approx_eq(grey.saturation, 0.0, EPSILON));
        assert!(approx_eq(grey.lightness, 0.5, EPSILON));
    }

    #[test]
    fn brightness_scales_and_clamps_lightness() {
        let base = Color::from_hex("#6750A4");
        let base_l = base.to_hsl().lightness;

        assert!(base.brightness(0.9).to_hsl().lightness < base_l);
        assert!(base.brightness(1.1).to_hsl().lightness > base_l);
        assert_color_eq(base.brightness(100.0), Color::WHITE, EPSILON_WIDE);
        assert_color_eq(base.brightness(0.0), Color::BLACK, EPSILON_WIDE);
    }

    #[test]
    fn lighten_and_darken_endpoints() {
        for color in samples() {
            assert_color_eq(color.lighten(0.0), color, EPSILON);
            assert_color_eq(color.darken(0.0), color, EPSILON);
            assert_color_eq(color.lighten(1.0), Color::WHITE, EPSILON);
            assert_color_eq(color.darken(1.0), Color::BLACK, EPSILON);
        }
    }

    #[test]
    fn lighten_is_linear_and_monotonic() {
        let base = Color::new(0.2, 0.4, 0.6);
        let half = base.lighten(0.5);
        assert!(approx_eq(half.red, 0.6, EPSILON));
        assert!(approx_eq(half.green, 0.7, EPSILON));
        assert!(approx_eq(half.blue, 0.8, EPSILON));

        let mut previous = base;
        for step in 1..=10u8 {
            let fraction = f32::from(step) / 10.0;
            let lighter = base.lighten(fraction);
            let darker = base.darken(fraction);
            assert!(lighter.luminance() >= previous.luminance());
            assert!(darker.luminance() <= base.darken(fraction - 0.1).luminance());
            previous = lighter;
        }
    }

    #[test]
    fn out_of_range_fractions_are_clamped() {
        let base = Color::new(0.2, 0.4, 0.6);
        assert_color_eq(base.lighten(2.0), Color::WHITE, EPSILON);
        assert_color_eq(base.darken(-1.0), base, EPSILON);
    }

    #[test]
    fn shade_maps_factor_onto_lerp() {
        let base = Color::from_hex("#6750A4");
        assert_eq!(base.shade(1.0), base);
        assert_color_eq(base.shade(1.15), base.lighten(0.15), EPSILON);
        assert_color_eq(base.shade(0.9), base.darken(0.1), EPSILON);
        assert!(base.shade(1.2).luminance() > base.shade(1.1).luminance());
        assert!(base.shade(0.85).luminance() < base.shade(0.95).luminance());
    }

    #[test]
    fn with_alpha_replaces_and_clamps() {
        let base = Color::from_hex("#6750A4");
        assert!(approx_eq(base.with_alpha(0.1).alpha, 0.1, EPSILON));
        assert!(approx_eq(base.with_alpha(1.5).alpha, 1.0, EPSILON));
        assert!(approx_eq(base.with_alpha(0.1).red, base.red, EPSILON));
    }

    #[test]
    fn hex_parsing_accepts_prefixes_and_alpha() {
        let direct = Color::from_hex("#1A2B3C");
        let prefixed = Color::from_hex("0x1A2B3C");
        let bare = Color::from_hex("1A2B3C");
        assert_eq!(direct, prefixed);
        assert_eq!(direct, bare);
        assert!(approx_eq(direct.alpha, 1.0, EPSILON));

        let translucent = Color::from_hex("#801A2B3C");
        assert!(approx_eq(translucent.alpha, 128.0 / 255.0, EPSILON));
        assert!(approx_eq(translucent.red, direct.red, EPSILON));
    }

    #[test]
    fn try_hex_reports_errors() {
        assert!(matches!(
            Color::try_from_hex("#GGGGGG"),
            Err(HexColorError::InvalidDigit(1))
        ));
        assert!(matches!(
            Color::try_from_hex("#123"),
            Err(HexColorError::InvalidLength)
        ));
        assert!(matches!(
            "".parse::<Color>(),
            Err(HexColorError::InvalidLength)
        ));
    }

    #[test]
    fn packed_constructors_agree() {
        assert_eq!(Color::from_rgb_u32(0x6750A4), Color::from_hex("#6750A4"));
        assert_eq!(
            Color::from_argb_u32(0xFF67_50A4),
            Color::from_hex("#6750A4")
        );
        assert_eq!(Color::from_hex("#336750A4").to_argb_u32(), 0x3367_50A4);
        assert_eq!(Color::from_hex("#6750A4").to_string(), "#FF6750A4");
    }

    #[test]
    fn luminance_classifies_dark_colors() {
        assert!(Color::BLACK.is_dark());
        assert!(!Color::WHITE.is_dark());
        assert!(Color::from_hex("#6750A4").is_dark());
        assert!(!Color::from_hex("#FFEB3B").is_dark());
    }

    #[test]
    fn deserializes_from_hex_strings() {
        #[derive(Debug, Deserialize)]
        struct Doc {
            color: Color,
        }

        let doc: Doc = toml::from_str("color = \"#806750A4\"").unwrap();
        assert_eq!(doc.color, Color::from_hex("#806750A4"));

        let invalid = toml::from_str::<Doc>("color = \"#12\"");
        assert!(invalid.is_err());
    }
}
