use crate::{Color, clamp_unit, normalize_hue};

/// A color in the HSL (hue, saturation, lightness) color space.
///
/// HSL is a cylindrical re-mapping of sRGB, so conversions in both directions are
/// exact up to floating point rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees (0.0 to 360.0)
    pub hue: f32,
    /// Saturation (0.0 to 1.0)
    pub saturation: f32,
    /// Lightness (0.0 = black, 1.0 = white)
    pub lightness: f32,
    /// Opacity/alpha channel (0.0 = transparent, 1.0 = opaque)
    pub alpha: f32,
}

impl Hsl {
    /// Creates an opaque HSL color.
    #[must_use]
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha: 1.0,
        }
    }

    /// Converts an sRGB color into HSL.
    #[must_use]
    pub fn from_rgb(color: Color) -> Self {
        let Color {
            red,
            green,
            blue,
            alpha,
        } = color;
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;
        let lightness = (max + min) / 2.0;

        if delta == 0.0 {
            return Self {
                hue: 0.0,
                saturation: 0.0,
                lightness,
                alpha,
            };
        }

        let saturation = clamp_unit(delta / (1.0 - 2.0f32.mul_add(lightness, -1.0).abs()));
        #[allow(clippy::float_cmp)]
        let sector = if max == red {
            ((green - blue) / delta).rem_euclid(6.0)
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        Self {
            hue: normalize_hue(sector * 60.0),
            saturation,
            lightness,
            alpha,
        }
    }

    /// Converts this HSL color back into sRGB.
    #[must_use]
    pub fn to_rgb(self) -> Color {
        let hue = normalize_hue(self.hue);
        let saturation = clamp_unit(self.saturation);
        let lightness = clamp_unit(self.lightness);

        let chroma = (1.0 - 2.0f32.mul_add(lightness, -1.0).abs()) * saturation;
        let sector = hue / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let m = lightness - chroma / 2.0;

        let (red, green, blue) = match sector {
            s if s < 1.0 => (chroma, x, 0.0),
            s if s < 2.0 => (x, chroma, 0.0),
            s if s < 3.0 => (0.0, chroma, x),
            s if s < 4.0 => (0.0, x, chroma),
            s if s < 5.0 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Color::rgba(
            clamp_unit(red + m),
            clamp_unit(green + m),
            clamp_unit(blue + m),
            self.alpha,
        )
    }
}

impl From<Color> for Hsl {
    fn from(value: Color) -> Self {
        Self::from_rgb(value)
    }
}

impl From<Hsl> for Color {
    fn from(value: Hsl) -> Self {
        value.to_rgb()
    }
}
