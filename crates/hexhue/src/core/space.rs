#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ColorError;

/// The enumeration of supported color notations.
///
/// # Hexadecimal
///
/// [`ColorSpace::Hex`] is the hashed hexadecimal notation familiar from the
/// web. The leading `#` is optional on input. Three-digit colors such as
/// `#abc` are short for `#aabbcc`.
///
/// # Functional Notations
///
/// All other notations are functions with comma-separated, integer
/// arguments. Whitespace between arguments is ignored.
///
/// | Notation | Arguments                | Ranges                          |
/// | -------- | ------------------------ | ------------------------------- |
/// | `rgb`    | `r, g, b`                | `0..=255`                       |
/// | `rgba`   | `r, g, b, a`             | `0..=255`, alpha `0..=1` decimal |
/// | `hsl`    | `h, s%, l%`              | hue `0..=360`, `0..=100`        |
/// | `cmyk`   | `c%, m%, y%, k%`         | `0..=100`                       |
/// | `hsv`    | `h, s%, v%`              | hue `0..=360`, `0..=100`        |
///
/// The set is closed. The order of [`ColorSpace::ALL`] also is the order in
/// which [`ColorSpace::detect`] tries the notations.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "hexhue")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Hex,
    Rgb,
    Rgba,
    Hsl,
    Cmyk,
    Hsv,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorSpace {
    /// Get this notation's lower case name.
    pub const fn name(&self) -> &'static str {
        use ColorSpace::*;

        match *self {
            Hex => "hex",
            Rgb => "rgb",
            Rgba => "rgba",
            Hsl => "hsl",
            Cmyk => "cmyk",
            Hsv => "hsv",
        }
    }

    /// Determine whether this notation is a function with parenthesized
    /// arguments, i.e., anything but hexadecimal.
    pub const fn is_functional(&self) -> bool {
        !matches!(*self, Self::Hex)
    }

    /// Determine whether this notation includes an alpha value.
    pub const fn has_alpha(&self) -> bool {
        matches!(*self, Self::Rgba)
    }

    /// Determine whether this notation leads with a hue.
    pub const fn has_hue(&self) -> bool {
        matches!(*self, Self::Hsl | Self::Hsv)
    }

    /// Get a sample color string in this notation.
    ///
    /// All samples describe the same red and are detected as their own
    /// notation.
    ///
    /// ```
    /// # use hexhue::ColorSpace;
    /// for space in ColorSpace::ALL {
    ///     assert_eq!(ColorSpace::detect(space.example()), Ok(space));
    /// }
    /// ```
    pub const fn example(&self) -> &'static str {
        use ColorSpace::*;

        match *self {
            Hex => "FF0000",
            Rgb => "rgb(255,0,0)",
            Rgba => "rgba(255,0,0,0.5)",
            Hsl => "hsl(0,100%,50%)",
            Cmyk => "cmyk(0%,100%,100%,0%)",
            Hsv => "hsv(0,100%,100%)",
        }
    }
}

impl ColorSpace {
    /// All notations in detection order.
    pub const ALL: [ColorSpace; 6] = [
        ColorSpace::Hex,
        ColorSpace::Rgb,
        ColorSpace::Rgba,
        ColorSpace::Hsl,
        ColorSpace::Cmyk,
        ColorSpace::Hsv,
    ];

    /// Detect the notation of the given string.
    ///
    /// This function only checks the string's structure, i.e., function
    /// name, parentheses, number of arguments, digits, and `%` suffixes. It
    /// does not check ranges, so that `rgb(256,0,0)` is detected as
    /// [`ColorSpace::Rgb`] and only fails when parsed.
    ///
    /// ```
    /// # use hexhue::ColorSpace;
    /// # use hexhue::error::ColorErrorKind;
    /// assert_eq!(ColorSpace::detect("#abc"), Ok(ColorSpace::Hex));
    /// assert_eq!(ColorSpace::detect("hsl(120, 50%, 50%)"), Ok(ColorSpace::Hsl));
    ///
    /// let error = ColorSpace::detect("notacolor").unwrap_err();
    /// assert_eq!(error.kind(), ColorErrorKind::UnrecognizedFormat);
    /// ```
    pub fn detect(s: &str) -> Result<ColorSpace, ColorError> {
        crate::core::detect(s)
    }

    /// Get the function name of a functional notation.
    pub(crate) const fn function(&self) -> Option<&'static str> {
        if self.is_functional() {
            Some(self.name())
        } else {
            None
        }
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ColorSpace {
    type Err = ColorError;

    /// Look up a notation by name.
    ///
    /// The lookup ignores surrounding whitespace and ASCII case. Unknown
    /// names fail with
    /// [`ColorErrorKind::UnsupportedTargetFormat`](crate::error::ColorErrorKind).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ColorSpace::ALL
            .into_iter()
            .find(|space| space.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ColorError::unsupported(s))
    }
}
