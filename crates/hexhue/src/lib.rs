//! # Hex 🎨 Hue
//!
//! Hexhue converts color strings between six common notations: hexadecimal,
//! `rgb()`, `rgba()`, `hsl()`, `cmyk()`, and `hsv()`.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Hexhue's main abstractions are:
//!
//!   * [`ColorSpace`] enumerates the **supported notations**. It also detects
//!     a color string's notation with [`ColorSpace::detect`].
//!   * [`Color`] is the **canonical color**, a 24-bit RGB color plus alpha.
//!     Every conversion funnels through it. The derived models
//!     [`Hsl`](model::Hsl), [`Hsv`](model::Hsv), and [`Cmyk`](model::Cmyk)
//!     are computed on demand and never stored.
//!   * [`Converter`] implements the **conversion pipeline** of detecting,
//!     parsing, and formatting, configured through [`Options`](opt::Options).
//!     [`convert_color`] and [`convert_named`] are shortcuts using the
//!     default options.
//!   * [`ColorError`](error::ColorError) distinguishes between strings that
//!     look like **no color notation at all**, strings that look like a
//!     notation but are **invalid**, and **unsupported target** names.
//!   * The [`store`] module saves and restores the **last conversion** in a
//!     simple key-value store.
//!
//!
//! ## 2. Converting Colors
//!
//! Conversion takes a color string, an optional hint for its notation, and
//! the target notation.
//!
//! ```
//! # use hexhue::{convert_color, ColorSpace};
//! # use hexhue::error::ColorError;
//! assert_eq!(convert_color("FF0000", None, ColorSpace::Rgb)?, "rgb(255,0,0)");
//! assert_eq!(
//!     convert_color("rgb(0, 255, 0)", Some(ColorSpace::Rgb), ColorSpace::Hsl)?,
//!     "hsl(120,100%,50%)"
//! );
//! assert_eq!(convert_color("hsl(240,100%,50%)", None, ColorSpace::Hex)?, "#0000ff");
//! # Ok::<(), ColorError>(())
//! ```
//!
//! Conversion fails if the string has none of the notations' shapes, if it
//! has the shape but invalid values, or, for [`convert_named`], if the target
//! notation is unknown. Values are never clamped.
//!
//! ```
//! # use hexhue::{convert_color, ColorSpace};
//! # use hexhue::error::{ColorErrorKind, FormatDefect};
//! let error = convert_color("rgb(256,0,0)", None, ColorSpace::Hex).unwrap_err();
//! assert_eq!(
//!     error.kind(),
//!     ColorErrorKind::InvalidFormat(ColorSpace::Rgb, FormatDefect::OutOfRange)
//! );
//!
//! let error = convert_color("notacolor", None, ColorSpace::Hex).unwrap_err();
//! assert_eq!(error.kind(), ColorErrorKind::UnrecognizedFormat);
//! ```
//!
//!
//! ## 3. Precision
//!
//! All notations but the floating point alpha value use integers. Hence
//! conversions between notations are not lossless. However, hexhue only
//! rounds when producing 24-bit RGB or formatting a string. As a result,
//! converting a 24-bit color to HSL, HSV, or CMYK and back again yields
//! channels that differ by at most one, and usually not at all.
//!
//! Hexadecimal, `rgb()`, and `rgba()` strings name 24-bit colors directly
//! and round-trip exactly. That is not the case for `hsl()`, `hsv()`, and
//! `cmyk()` strings. Every string is parsed into a 24-bit color, and integer
//! percentages cannot name every such color. Formatting a color in one of
//! these notations and parsing the result moves each channel by at most 5
//! for HSL, 3 for HSV, and 2 for CMYK. Repeating the hop may move the color
//! again.
//!
//! ```
//! # use hexhue::{convert_color, ColorSpace};
//! # use hexhue::error::ColorError;
//! let once = convert_color("hsl(0,11%,13%)", None, ColorSpace::Hsl)?;
//! assert_eq!(once, "hsl(0,10%,13%)");
//! assert_eq!(convert_color(&once, None, ColorSpace::Hsl)?, "hsl(0,9%,13%)");
//! # Ok::<(), ColorError>(())
//! ```
//!
//!
//! ## 4. Optional Features
//!
//! Hexhue supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     instead of `f32`. This feature is enabled by default.
//!   - **`pyffi`** controls hexhue's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Hexhue logs through the [log](https://docs.rs/log) facade but never
//! installs a logger itself.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

mod convert;
mod core;
pub mod error;
pub mod model;
mod object;
pub mod opt;
pub mod store;

pub use convert::{convert_color, convert_named, ColorValues, Converter};
pub use core::ColorSpace;
pub use object::Color;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// Convert the color string to the target notation. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "convert_color", signature = (input, target, hint=None))]
pub fn py_convert_color(
    input: &str,
    target: ColorSpace,
    hint: Option<ColorSpace>,
) -> Result<String, error::ColorError> {
    convert_color(input, hint, target)
}

/// Detect the notation of the color string. <i class=python-only>Python
/// only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
pub fn detect_format(input: &str) -> Result<ColorSpace, error::ColorError> {
    ColorSpace::detect(input)
}

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn hexhue(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_convert_color, m)?)?;
    m.add_function(wrap_pyfunction!(detect_format, m)?)?;

    m.add_class::<Color>()?;
    m.add_class::<ColorSpace>()?;

    Ok(())
}
