use crate::core::{detect, format, parse};
use crate::error::ColorError;
use crate::opt::Options;
use crate::{Color, ColorSpace};

/// A converter between color notations.
///
/// A converter implements the pipeline from a color string to another color
/// string: It detects the notation (unless the caller provides it), parses
/// the string into a canonical [`Color`], and formats that color in the
/// target notation. It holds nothing but its [`Options`]. Hence every
/// conversion is independent of every other conversion and a converter can
/// be shared freely between threads.
///
/// ```
/// # use hexhue::{ColorSpace, Converter};
/// # use hexhue::error::ColorError;
/// # use hexhue::opt::Options;
/// let converter = Converter::new(Options::builder().spaced_lists(true).build());
/// assert_eq!(
///     converter.convert("#ff8000", None, ColorSpace::Hsl)?,
///     "hsl(30, 100%, 50%)"
/// );
/// # Ok::<(), ColorError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Converter {
    options: Options,
}

impl Converter {
    /// Create a new converter with the given options.
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Detect the notation of the given color string.
    pub fn detect(&self, input: &str) -> Result<ColorSpace, ColorError> {
        detect(input)
    }

    /// Parse the given color string.
    ///
    /// If the caller provides a notation, this method parses the string in
    /// that notation. Otherwise, it detects the notation first. In either
    /// case, it returns the notation used together with the color.
    pub fn parse(
        &self,
        input: &str,
        hint: Option<ColorSpace>,
    ) -> Result<(ColorSpace, Color), ColorError> {
        let space = match hint {
            Some(space) => space,
            None => detect(input)?,
        };

        Ok((space, parse(input, space, &self.options)?))
    }

    /// Format the color in the given notation.
    pub fn format(&self, color: &Color, target: ColorSpace) -> String {
        format(color, target, &self.options)
    }

    /// Convert the color string to the target notation.
    pub fn convert(
        &self,
        input: &str,
        hint: Option<ColorSpace>,
        target: ColorSpace,
    ) -> Result<String, ColorError> {
        let (source, color) = self.parse(input, hint)?;
        let output = self.format(&color, target);
        log::trace!("converted {} {:?} to {} {:?}", source, input, target, output);
        Ok(output)
    }

    /// Convert the color string to all notations at once.
    pub fn convert_all(
        &self,
        input: &str,
        hint: Option<ColorSpace>,
    ) -> Result<ColorValues, ColorError> {
        let (source, color) = self.parse(input, hint)?;
        let outputs = ColorSpace::ALL.map(|space| self.format(&color, space));
        Ok(ColorValues {
            source,
            color,
            outputs,
        })
    }
}

// ====================================================================================================================

/// A color in all supported notations.
///
/// ```
/// # use hexhue::{ColorSpace, Converter};
/// # use hexhue::error::ColorError;
/// let values = Converter::default().convert_all("rgba(255, 0, 0, 0.5)", None)?;
/// assert_eq!(values.source(), ColorSpace::Rgba);
/// assert_eq!(values.get(ColorSpace::Hex), "#ff0000");
/// assert_eq!(values.get(ColorSpace::Rgba), "rgba(255,0,0,0.5)");
/// assert_eq!(values.get(ColorSpace::Cmyk), "cmyk(0%,100%,100%,0%)");
/// # Ok::<(), ColorError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ColorValues {
    source: ColorSpace,
    color: Color,
    outputs: [String; 6],
}

impl ColorValues {
    /// Get the notation of the original color string.
    pub fn source(&self) -> ColorSpace {
        self.source
    }

    /// Get the canonical color.
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Get the color string in the given notation.
    pub fn get(&self, space: ColorSpace) -> &str {
        &self.outputs[space as usize]
    }

    /// Iterate over all notations and their color strings, in
    /// [`ColorSpace::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorSpace, &str)> {
        ColorSpace::ALL
            .into_iter()
            .zip(self.outputs.iter().map(String::as_str))
    }
}

// ====================================================================================================================

/// Convert the color string to the target notation with default options.
///
/// This function detects the string's notation, unless a hint is given,
/// parses the string into a canonical color, and formats the color in the
/// target notation.
///
/// ```
/// # use hexhue::{convert_color, ColorSpace};
/// # use hexhue::error::{ColorError, ColorErrorKind};
/// assert_eq!(
///     convert_color("FF0000", Some(ColorSpace::Hex), ColorSpace::Rgb)?,
///     "rgb(255,0,0)"
/// );
///
/// let error = convert_color("notacolor", None, ColorSpace::Hex).unwrap_err();
/// assert_eq!(error.kind(), ColorErrorKind::UnrecognizedFormat);
/// # Ok::<(), ColorError>(())
/// ```
pub fn convert_color(
    input: &str,
    hint: Option<ColorSpace>,
    target: ColorSpace,
) -> Result<String, ColorError> {
    Converter::default().convert(input, hint, target)
}

/// Convert the color string to the named target notation with default
/// options.
///
/// Notation names are matched ignoring ASCII case. An unknown hint fails with
/// an unrecognized format error, since the input cannot be classified. An
/// unknown target fails with an unsupported target format error. Both errors
/// carry the unknown name.
///
/// ```
/// # use hexhue::convert_named;
/// # use hexhue::error::{ColorError, ColorErrorKind};
/// assert_eq!(convert_named("rgb(0,255,0)", Some("rgb"), "HSL")?, "hsl(120,100%,50%)");
///
/// let error = convert_named("#fff", None, "lab").unwrap_err();
/// assert_eq!(error.kind(), ColorErrorKind::UnsupportedTargetFormat);
/// assert_eq!(error.input(), "lab");
/// # Ok::<(), ColorError>(())
/// ```
pub fn convert_named(input: &str, hint: Option<&str>, target: &str) -> Result<String, ColorError> {
    let hint = hint
        .map(|name| name.parse::<ColorSpace>())
        .transpose()
        .map_err(|error| ColorError::unrecognized(error.input()))?;
    let target = target.parse::<ColorSpace>()?;
    convert_color(input, hint, target)
}

#[cfg(test)]
mod test {
    use super::{convert_color, convert_named, Converter};
    use crate::error::{ColorError, ColorErrorKind, FormatDefect};
    use crate::opt::Options;
    use crate::ColorSpace::{self, *};
    use crate::{Color, Float};
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_convert() -> Result<(), ColorError> {
        assert_eq!(convert_color("FF0000", Some(Hex), Rgb)?, "rgb(255,0,0)");
        assert_eq!(convert_color("rgb(0,255,0)", Some(Rgb), Hsl)?, "hsl(120,100%,50%)");
        assert_eq!(convert_color("hsl(240,100%,50%)", Some(Hsl), Hex)?, "#0000ff");
        assert_eq!(
            convert_color("rgba(255,0,0,0.5)", Some(Rgba), Rgba)?,
            "rgba(255,0,0,0.5)"
        );
        assert_eq!(convert_color("#00f", None, Hsv)?, "hsv(240,100%,100%)");
        assert_eq!(convert_color("cmyk(0%,0%,0%,100%)", None, Hex)?, "#000000");
        assert_eq!(convert_color("#000", None, Cmyk)?, "cmyk(0%,0%,0%,100%)");
        Ok(())
    }

    #[test]
    fn test_convert_failures() {
        let error = convert_color("rgb(256,0,0)", Some(Rgb), Hex).unwrap_err();
        assert_eq!(
            error.kind(),
            ColorErrorKind::InvalidFormat(Rgb, FormatDefect::OutOfRange)
        );
        assert_eq!(error.input(), "rgb(256,0,0)");

        let error = convert_color("notacolor", None, Hex).unwrap_err();
        assert_eq!(error.kind(), ColorErrorKind::UnrecognizedFormat);
        assert_eq!(error.input(), "notacolor");

        // A hint overrides detection, so a mismatch is invalid, not unrecognized.
        let error = convert_color("#ff0000", Some(Rgb), Hex).unwrap_err();
        assert_eq!(
            error.kind(),
            ColorErrorKind::InvalidFormat(Rgb, FormatDefect::UnexpectedFunction)
        );
    }

    #[test]
    fn test_examples() -> Result<(), ColorError> {
        let converter = Converter::default();
        for space in ColorSpace::ALL {
            let values = converter.convert_all(space.example(), None)?;
            assert_eq!(values.source(), space);
            assert_eq!(values.color().as_ref(), &[255_u8, 0, 0]);
            assert_eq!(values.get(Hex), "#ff0000");
            assert_eq!(values.get(Hsl), "hsl(0,100%,50%)");
        }
        Ok(())
    }

    #[test]
    fn test_convert_all() -> Result<(), ColorError> {
        let values = Converter::default().convert_all("hsl(120, 100%, 25%)", None)?;
        let pairs: Vec<(ColorSpace, &str)> = values.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Hex, "#008000"),
                (Rgb, "rgb(0,128,0)"),
                (Rgba, "rgba(0,128,0,1)"),
                (Hsl, "hsl(120,100%,25%)"),
                (Cmyk, "cmyk(100%,0%,100%,50%)"),
                (Hsv, "hsv(120,100%,50%)"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_options() -> Result<(), ColorError> {
        let converter = Converter::new(
            Options::builder()
                .accept_short_hex(false)
                .uppercase_hex(true)
                .build(),
        );
        assert_eq!(converter.convert("rgb(171,205,239)", None, Hex)?, "#ABCDEF");

        // Detection still recognizes short hex, but parsing rejects it.
        let error = converter.convert("#abc", None, Rgb).unwrap_err();
        assert_eq!(
            error.kind(),
            ColorErrorKind::InvalidFormat(Hex, FormatDefect::WrongDigitCount)
        );
        Ok(())
    }

    #[test]
    fn test_convert_named() -> Result<(), ColorError> {
        assert_eq!(convert_named("FF0000", Some("hex"), "rgb")?, "rgb(255,0,0)");
        assert_eq!(convert_named("FF0000", None, "Hex")?, "#ff0000");

        let error = convert_named("FF0000", Some("lab"), "rgb").unwrap_err();
        assert_eq!(error.kind(), ColorErrorKind::UnrecognizedFormat);
        assert_eq!(error.input(), "lab");

        let error = convert_named("FF0000", None, "xyz").unwrap_err();
        assert_eq!(error.kind(), ColorErrorKind::UnsupportedTargetFormat);
        Ok(())
    }

    #[test]
    fn test_threads() {
        let converter = Converter::default();
        std::thread::scope(|scope| {
            for space in ColorSpace::ALL {
                let converter = &converter;
                scope.spawn(move || {
                    for _ in 0..100 {
                        assert_eq!(
                            converter.convert(space.example(), None, Rgb).as_deref(),
                            Ok("rgb(255,0,0)")
                        );
                    }
                });
            }
        });
    }

    #[test]
    fn test_rgb_round_trip() -> Result<(), ColorError> {
        let converter = Converter::default();
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);

        for _ in 0..10_000 {
            let [r, g, b]: [u8; 3] = [rng.random(), rng.random(), rng.random()];

            let rgb = format!("rgb({},{},{})", r, g, b);
            assert_eq!(converter.convert(&rgb, None, Rgb)?, rgb);

            let alpha = rng.random_range(0..=100_u8) as Float / 100.0;
            let rgba = format!("rgba({},{},{},{})", r, g, b, alpha);
            assert_eq!(converter.convert(&rgba, None, Rgba)?, rgba);
        }

        Ok(())
    }

    #[test]
    fn test_derived_model_drift() -> Result<(), ColorError> {
        // Integer percentages cannot name every 24-bit color, so repeated
        // hops through the same notation may keep moving the color.
        let hops = [
            ("hsl(0,11%,13%)", "hsl(0,10%,13%)", "hsl(0,9%,13%)"),
            ("hsv(0,1%,10%)", "hsv(0,4%,10%)", "hsv(0,8%,10%)"),
            ("cmyk(0%,0%,20%,70%)", "cmyk(0%,0%,21%,70%)", "cmyk(0%,0%,22%,70%)"),
        ];
        for (input, once, twice) in hops {
            assert_eq!(convert_color(input, None, ColorSpace::detect(input)?)?, once);
            assert_eq!(convert_color(once, None, ColorSpace::detect(once)?)?, twice);
        }
        assert_eq!(convert_color("hsl(0,11%,13%)", None, Hex)?, "#251e1e");

        // Each hop stays close to the 24-bit color it started from.
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
        for _ in 0..10_000 {
            let color = Color::new(rng.random(), rng.random(), rng.random());
            for (space, tolerance) in [(Hsl, 5), (Hsv, 3), (Cmyk, 2)] {
                let output = color.format(space);
                let hop = Color::parse_as(&output, space)?;
                assert!(
                    color.is_within(&hop, tolerance),
                    "{:?} drifted to {:?} via {}",
                    color,
                    hop,
                    output
                );
            }
        }

        Ok(())
    }
}
