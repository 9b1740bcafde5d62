//! Color models derived from the canonical 24-bit RGB color.
//!
//! [`Hsl`], [`Hsv`], and [`Cmyk`] are computed on demand from a
//! [`Color`](crate::Color) and converted back into one. They are views, not
//! sources of truth: Their components are floating point numbers that are
//! only rounded for display, and converting back always produces 24-bit RGB
//! again. Converting a color to a model and back without rounding changes
//! each channel by at most one.
//!
//! ```
//! # use hexhue::Color;
//! # use hexhue::model::Hsl;
//! let coral = Color::new(0xff, 0x7f, 0x50);
//! let hsl = coral.to_hsl();
//! assert_eq!(hsl.rounded(), [16, 100, 66]);
//! assert_eq!(Color::from(hsl), coral);
//! ```

use crate::core::{cmyk_to_rgb, hsl_to_rgb, hsv_to_rgb, rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv};
use crate::{Color, Float};

/// Round a hue in degrees, mapping a full turn back to zero.
#[inline]
fn round_hue(hue: Float) -> u16 {
    (hue.round() as u16) % 360
}

/// Round a percentage.
#[inline]
fn round_percent(percent: Float) -> u8 {
    percent.round().clamp(0.0, 100.0) as u8
}

// ====================================================================================================================
// HSL
// ====================================================================================================================

/// A color in the HSL model.
///
/// The hue is in degrees `0..=360`, with 360 denoting the same hue as 0.
/// Saturation and lightness are in percent `0..=100`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsl {
    hue: Float,
    saturation: Float,
    lightness: Float,
}

impl Hsl {
    /// Create a new HSL color.
    pub const fn new(hue: Float, saturation: Float, lightness: Float) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Get the hue in degrees.
    pub const fn hue(&self) -> Float {
        self.hue
    }

    /// Get the saturation in percent.
    pub const fn saturation(&self) -> Float {
        self.saturation
    }

    /// Get the lightness in percent.
    pub const fn lightness(&self) -> Float {
        self.lightness
    }

    /// Round to integer hue, saturation, and lightness.
    ///
    /// Rounding is half up. A hue that rounds to 360 becomes 0.
    pub fn rounded(&self) -> [u16; 3] {
        [
            round_hue(self.hue),
            round_percent(self.saturation) as u16,
            round_percent(self.lightness) as u16,
        ]
    }
}

impl From<&Color> for Hsl {
    fn from(value: &Color) -> Self {
        let [h, s, l] = rgb_to_hsl(value.as_ref());
        Self::new(h, s, l)
    }
}

impl From<Hsl> for Color {
    /// Convert the HSL color to an opaque color.
    fn from(value: Hsl) -> Self {
        Color::from(hsl_to_rgb(&[value.hue, value.saturation, value.lightness]))
    }
}

// ====================================================================================================================
// HSV
// ====================================================================================================================

/// A color in the HSV model.
///
/// The hue is in degrees `0..=360`, with 360 denoting the same hue as 0.
/// Saturation and value are in percent `0..=100`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsv {
    hue: Float,
    saturation: Float,
    value: Float,
}

impl Hsv {
    /// Create a new HSV color.
    pub const fn new(hue: Float, saturation: Float, value: Float) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Get the hue in degrees.
    pub const fn hue(&self) -> Float {
        self.hue
    }

    /// Get the saturation in percent.
    pub const fn saturation(&self) -> Float {
        self.saturation
    }

    /// Get the value in percent.
    pub const fn value(&self) -> Float {
        self.value
    }

    /// Round to integer hue, saturation, and value.
    pub fn rounded(&self) -> [u16; 3] {
        [
            round_hue(self.hue),
            round_percent(self.saturation) as u16,
            round_percent(self.value) as u16,
        ]
    }
}

impl From<&Color> for Hsv {
    fn from(value: &Color) -> Self {
        let [h, s, v] = rgb_to_hsv(value.as_ref());
        Self::new(h, s, v)
    }
}

impl From<Hsv> for Color {
    /// Convert the HSV color to an opaque color.
    fn from(value: Hsv) -> Self {
        Color::from(hsv_to_rgb(&[value.hue, value.saturation, value.value]))
    }
}

// ====================================================================================================================
// CMYK
// ====================================================================================================================

/// A color in the CMYK model.
///
/// All four components are in percent `0..=100`. Black has zero cyan,
/// magenta, and yellow.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cmyk([Float; 4]);

impl Cmyk {
    /// Create a new CMYK color.
    pub const fn new(cyan: Float, magenta: Float, yellow: Float, black: Float) -> Self {
        Self([cyan, magenta, yellow, black])
    }

    /// Get the cyan component in percent.
    pub const fn cyan(&self) -> Float {
        self.0[0]
    }

    /// Get the magenta component in percent.
    pub const fn magenta(&self) -> Float {
        self.0[1]
    }

    /// Get the yellow component in percent.
    pub const fn yellow(&self) -> Float {
        self.0[2]
    }

    /// Get the black (key) component in percent.
    pub const fn black(&self) -> Float {
        self.0[3]
    }

    /// Round to integer percentages.
    pub fn rounded(&self) -> [u8; 4] {
        self.0.map(round_percent)
    }
}

impl AsRef<[Float; 4]> for Cmyk {
    fn as_ref(&self) -> &[Float; 4] {
        &self.0
    }
}

impl From<&Color> for Cmyk {
    fn from(value: &Color) -> Self {
        Self(rgb_to_cmyk(value.as_ref()))
    }
}

impl From<Cmyk> for Color {
    /// Convert the CMYK color to an opaque color.
    fn from(value: Cmyk) -> Self {
        Color::from(cmyk_to_rgb(&value.0))
    }
}
