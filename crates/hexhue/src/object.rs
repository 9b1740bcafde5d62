#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{format, parse, within};
use crate::error::{ColorError, FormatDefect};
use crate::model::{Cmyk, Hsl, Hsv};
use crate::opt::Options;
use crate::{ColorSpace, Float};

/// A canonical color.
///
/// Every conversion between notations funnels through this type: A 24-bit
/// RGB color, i.e., three `u8` coordinates, together with an alpha value in
/// `0..=1`. The alpha value defaults to 1, i.e., an opaque color, and is
/// only read from and written to the `rgba` notation. All other models, i.e.,
/// [`Hsl`], [`Hsv`], and [`Cmyk`], are derived on demand.
///
/// # Examples
///
/// Rust code can create a new color from its coordinates with [`Color::new`]
/// or from a string, with [`Color as
/// FromStr`](struct.Color.html#impl-FromStr-for-Color) detecting the
/// notation and [`Color::parse_as`] using a known notation.
///
/// ```
/// # use hexhue::{Color, ColorSpace};
/// # use hexhue::error::ColorError;
/// # use std::str::FromStr;
/// let lime = Color::from_str("rgb(0, 255, 0)")?;
/// assert_eq!(lime, Color::new(0, 255, 0));
/// assert_eq!(Color::parse_as("hsl(120,100%,50%)", ColorSpace::Hsl)?, lime);
/// # Ok::<(), ColorError>(())
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #00ff00;"></div>
/// </div>
/// <br>
///
/// It can access the coordinates with [`Color as AsRef<[u8;
/// 3]>`](struct.Color.html#impl-AsRef%3C%5Bu8;+3%5D%3E-for-Color) or with
/// [`Color as
/// Index<usize>`](struct.Color.html#impl-Index%3Cusize%3E-for-Color) and
/// format them in any notation with [`Color::format`].
///
/// ```
/// # use hexhue::{Color, ColorSpace};
/// let sea_foam = Color::new(0xb6, 0xeb, 0xd4);
/// assert_eq!(sea_foam.as_ref(), &[182_u8, 235, 212]);
/// assert_eq!(sea_foam[1], 235);
/// assert_eq!(sea_foam.format(ColorSpace::Hex), "#b6ebd4");
/// assert_eq!(sea_foam.format(ColorSpace::Cmyk), "cmyk(23%,0%,10%,8%)");
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #b6ebd4;"></div>
/// </div>
/// <br>
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "hexhue"))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    rgb: [u8; 3],
    alpha: Float,
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Color {
    /// Create a new opaque color from its coordinates. <i
    /// class=python-only>Python only!</i>
    #[new]
    pub fn py_new(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b)
    }

    /// Parse a color string, detecting its notation. <i
    /// class=python-only>Python only!</i>
    ///
    /// This method offers the same functionality as [`Color as
    /// FromStr`](struct.Color.html#impl-FromStr-for-Color) and is available in
    /// Python only.
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Color, ColorError> {
        use std::str::FromStr;

        Color::from_str(s)
    }

    /// Parse a color string in the given notation. <i
    /// class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "parse_as")]
    pub fn py_parse_as(s: &str, space: ColorSpace) -> Result<Color, ColorError> {
        Color::parse_as(s, space)
    }

    /// Access this color's coordinates. <i class=python-only>Python only!</i>
    pub fn coordinates(&self) -> [u8; 3] {
        self.rgb
    }

    /// Get this color's alpha value. <i class=python-only>Python only!</i>
    #[pyo3(name = "alpha")]
    pub fn py_alpha(&self) -> Float {
        self.alpha
    }

    /// Format this color in the given notation. <i class=python-only>Python
    /// only!</i>
    #[pyo3(name = "format")]
    pub fn py_format(&self, space: ColorSpace) -> String {
        self.format(space)
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!(
            "Color({}, {}, {}, alpha={})",
            self.rgb[0], self.rgb[1], self.rgb[2], self.alpha
        )
    }

    /// Convert this color to its canonical notation. <i
    /// class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Color {
    /// Create a new opaque color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: [r, g, b],
            alpha: 1.0,
        }
    }

    /// Create a new color from already validated parts.
    pub(crate) const fn from_parts(rgb: [u8; 3], alpha: Float) -> Self {
        Self { rgb, alpha }
    }

    /// Update this color's alpha value.
    ///
    /// The alpha value must be a number in `0..=1`. Otherwise, this method
    /// fails with an [`FormatDefect::OutOfRange`] error for the `rgba`
    /// notation.
    ///
    /// ```
    /// # use hexhue::{Color, ColorSpace};
    /// # use hexhue::error::ColorError;
    /// let ghost = Color::new(248, 248, 255).with_alpha(0.25)?;
    /// assert_eq!(ghost.format(ColorSpace::Rgba), "rgba(248,248,255,0.25)");
    /// assert!(Color::new(0, 0, 0).with_alpha(1.5).is_err());
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn with_alpha(self, alpha: Float) -> Result<Self, ColorError> {
        if (0.0..=1.0).contains(&alpha) {
            Ok(Self { alpha, ..self })
        } else {
            Err(ColorError::invalid(
                ColorSpace::Rgba,
                FormatDefect::OutOfRange,
                alpha.to_string(),
            ))
        }
    }

    /// Parse the string in the given notation.
    ///
    /// This method uses the default [`Options`]. Use a
    /// [`Converter`](crate::Converter) for other options.
    pub fn parse_as(s: &str, space: ColorSpace) -> Result<Self, ColorError> {
        parse(s, space, &Options::default())
    }

    /// Get the red coordinate.
    pub const fn red(&self) -> u8 {
        self.rgb[0]
    }

    /// Get the green coordinate.
    pub const fn green(&self) -> u8 {
        self.rgb[1]
    }

    /// Get the blue coordinate.
    pub const fn blue(&self) -> u8 {
        self.rgb[2]
    }

    /// Get the alpha value.
    pub const fn alpha(&self) -> Float {
        self.alpha
    }

    /// Determine whether this color is opaque.
    pub fn is_opaque(&self) -> bool {
        self.alpha == 1.0
    }

    /// Determine whether this color's coordinates differ from the other
    /// color's by at most `tolerance` each. Alpha values are ignored.
    pub fn is_within(&self, other: &Color, tolerance: u8) -> bool {
        within(&self.rgb, &other.rgb, tolerance)
    }

    /// Convert this color to HSL.
    pub fn to_hsl(&self) -> Hsl {
        Hsl::from(self)
    }

    /// Convert this color to HSV.
    pub fn to_hsv(&self) -> Hsv {
        Hsv::from(self)
    }

    /// Convert this color to CMYK.
    pub fn to_cmyk(&self) -> Cmyk {
        Cmyk::from(self)
    }

    /// Format this color in the given notation with default [`Options`].
    ///
    /// Formatting never fails. Only the `rgba` notation includes the alpha
    /// value.
    pub fn format(&self, space: ColorSpace) -> String {
        format(self, space, &Options::default())
    }
}

impl AsRef<[u8; 3]> for Color {
    fn as_ref(&self) -> &[u8; 3] {
        &self.rgb
    }
}

impl std::ops::Index<usize> for Color {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.rgb[index]
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Color::new(value[0], value[1], value[2])
    }
}

impl From<Color> for [u8; 3] {
    fn from(value: Color) -> Self {
        value.rgb
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    /// Instantiate a color from its string representation.
    ///
    /// This method first detects the notation with [`ColorSpace::detect`]
    /// and then parses the string in that notation. It fails with an
    /// unrecognized format error if the string has none of the supported
    /// notations' shapes and with an invalid format error if it has the
    /// shape but not the values, e.g., `rgb(256,0,0)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let space = ColorSpace::detect(s)?;
        parse(s, space, &Options::default())
    }
}

impl std::fmt::Display for Color {
    /// Format this color as hexadecimal if opaque and as `rgba` otherwise.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let space = if self.is_opaque() {
            ColorSpace::Hex
        } else {
            ColorSpace::Rgba
        };
        f.write_str(&self.format(space))
    }
}
