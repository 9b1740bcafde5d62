use super::detect::{is_decimal, is_digits, normalize, slots, Slot};
use super::ColorSpace;
use crate::error::{ColorError, FormatDefect};
use crate::model::{Cmyk, Hsl, Hsv};
use crate::opt::Options;
use crate::{Color, Float};

/// Parse a color in hexadecimal notation. If successful, this function
/// returns the three coordinates as unsigned bytes. The leading `#` is
/// optional. Three-digit colors are expanded to six digits first, unless the
/// options say otherwise.
fn parse_hex(s: &str, options: &Options) -> Result<[u8; 3], FormatDefect> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.contains('(') {
        return Err(FormatDefect::UnexpectedFunction);
    } else if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(FormatDefect::UnexpectedCharacters);
    }

    let expanded: String;
    let digits = match digits.len() {
        6 => digits,
        3 if options.accept_short_hex() => {
            expanded = digits.chars().flat_map(|c| [c, c]).collect();
            expanded.as_str()
        }
        _ => return Err(FormatDefect::WrongDigitCount),
    };

    // All digits are ASCII, so byte offsets are character offsets.
    let coordinate = |index: usize| {
        u8::from_str_radix(&digits[2 * index..2 * index + 2], 16)
            .map_err(|_| FormatDefect::UnexpectedCharacters)
    };

    Ok([coordinate(0)?, coordinate(1)?, coordinate(2)?])
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse a non-negative integer no larger than the given maximum.
fn parse_integer(text: &str, max: u32) -> Result<Float, FormatDefect> {
    if !is_digits(text) {
        return Err(FormatDefect::MalformedInteger);
    }

    // Only digits, so the only way parsing fails is overflow.
    let n: u32 = text.parse().map_err(|_| FormatDefect::OutOfRange)?;
    if max < n {
        Err(FormatDefect::OutOfRange)
    } else {
        Ok(n as Float)
    }
}

/// Parse the value for the given slot.
fn parse_value(slot: Slot, text: &str) -> Result<Float, FormatDefect> {
    match slot {
        Slot::Byte | Slot::Hue => parse_integer(text, slot.max()),
        Slot::Percent => match text.strip_suffix('%') {
            Some(digits) => parse_integer(digits, slot.max()),
            None if is_digits(text) => Err(FormatDefect::MissingPercent),
            None => Err(FormatDefect::MalformedInteger),
        },
        Slot::Alpha => {
            if !is_decimal(text) {
                return Err(FormatDefect::MalformedFloat);
            }

            let alpha: Float = text.parse().map_err(|_| FormatDefect::MalformedFloat)?;
            if 1.0 < alpha {
                Err(FormatDefect::OutOfRange)
            } else {
                Ok(alpha)
            }
        }
    }
}

/// Parse a color in functional notation. If successful, this function
/// returns the values in order, padded with zeros to four values.
fn parse_function(space: ColorSpace, s: &str) -> Result<[Float; 4], FormatDefect> {
    let rest = s
        .strip_prefix(space.name())
        .ok_or(FormatDefect::UnexpectedFunction)?;

    let rest = match rest.strip_prefix('(') {
        Some(rest) => rest,
        // Another function that starts with the same letters, e.g., rgba vs rgb.
        None if rest.starts_with(|c: char| c.is_ascii_alphabetic()) => {
            return Err(FormatDefect::UnexpectedFunction)
        }
        None => return Err(FormatDefect::NoOpeningParenthesis),
    };

    let body = rest
        .strip_suffix(')')
        .ok_or(FormatDefect::NoClosingParenthesis)?;

    let mut values = body.split(',');
    let mut result = [0.0; 4];
    for (index, slot) in slots(space).iter().enumerate() {
        let text = values
            .next()
            .filter(|t| !t.is_empty())
            .ok_or(FormatDefect::MissingCoordinate)?;
        result[index] = parse_value(*slot, text)?;
    }

    if values.next().is_some() {
        return Err(FormatDefect::TooManyCoordinates);
    }

    Ok(result)
}

/// Assemble the color from the values of a functional notation.
fn to_color(space: ColorSpace, values: [Float; 4]) -> Color {
    let [c1, c2, c3, c4] = values;
    match space {
        ColorSpace::Hex | ColorSpace::Rgb => Color::new(c1 as u8, c2 as u8, c3 as u8),
        ColorSpace::Rgba => Color::from_parts([c1 as u8, c2 as u8, c3 as u8], c4),
        ColorSpace::Hsl => Color::from(Hsl::new(c1, c2, c3)),
        ColorSpace::Cmyk => Color::from(Cmyk::new(c1, c2, c3, c4)),
        ColorSpace::Hsv => Color::from(Hsv::new(c1, c2, c3)),
    }
}

/// Parse the string as a color in the given notation.
///
/// Before parsing, this function trims leading and trailing white space,
/// converts ASCII letters to lower case, and, for functional notations,
/// removes all white space. Values are never clamped: A value out of range
/// fails. Errors carry the original, unnormalized string.
pub(crate) fn parse(s: &str, space: ColorSpace, options: &Options) -> Result<Color, ColorError> {
    let normalized = normalize(s);

    let result = if space.is_functional() {
        parse_function(space, &normalized).map(|values| to_color(space, values))
    } else {
        parse_hex(&normalized, options).map(Color::from)
    };

    result.map_err(|defect| {
        log::debug!("invalid {} color {:?}: {}", space, s, defect);
        ColorError::invalid(space, defect, s)
    })
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the color in the given notation.
///
/// With default options, this function produces the canonical notation
/// without spaces, e.g., `#ff0000`, `rgb(255,0,0)`, `rgba(255,0,0,0.5)`,
/// `hsl(0,100%,50%)`, `cmyk(0%,100%,100%,0%)`, or `hsv(0,100%,100%)`. Only
/// `rgba` includes the alpha value, which is written in the shortest form
/// that parses back to the same number.
pub(crate) fn format(color: &Color, space: ColorSpace, options: &Options) -> String {
    let sep = options.separator();
    let [r, g, b] = *color.as_ref();

    match space {
        ColorSpace::Hex => {
            let prefix = if options.hash_prefix() { "#" } else { "" };
            if options.uppercase_hex() {
                format!("{}{:02X}{:02X}{:02X}", prefix, r, g, b)
            } else {
                format!("{}{:02x}{:02x}{:02x}", prefix, r, g, b)
            }
        }
        ColorSpace::Rgb | ColorSpace::Rgba => {
            let mut s = format!("{}({}{}{}{}{}", space.name(), r, sep, g, sep, b);
            if space.has_alpha() {
                s.push_str(sep);
                s.push_str(&color.alpha().to_string());
            }
            s.push(')');
            s
        }
        ColorSpace::Hsl => {
            let [h, s, l] = color.to_hsl().rounded();
            format!("hsl({}{}{}%{}{}%)", h, sep, s, sep, l)
        }
        ColorSpace::Cmyk => {
            let [c, m, y, k] = color.to_cmyk().rounded();
            format!("cmyk({}%{}{}%{}{}%{}{}%)", c, sep, m, sep, y, sep, k)
        }
        ColorSpace::Hsv => {
            let [h, s, v] = color.to_hsv().rounded();
            format!("hsv({}{}{}%{}{}%)", h, sep, s, sep, v)
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{format, parse, parse_function, parse_hex};
    use crate::error::{ColorError, ColorErrorKind, FormatDefect};
    use crate::opt::Options;
    use crate::ColorSpace::{self, *};
    use crate::{Color, Float};
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_parse_hex() -> Result<(), FormatDefect> {
        let options = Options::default();
        assert_eq!(parse_hex("#123", &options)?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hex("112233", &options)?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hex("#ff", &options), Err(FormatDefect::WrongDigitCount));
        assert_eq!(parse_hex("", &options), Err(FormatDefect::WrongDigitCount));
        assert_eq!(
            parse_hex("#💩00", &options),
            Err(FormatDefect::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hex("#00ff0g", &options),
            Err(FormatDefect::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hex("+fffff", &options),
            Err(FormatDefect::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hex("rgb(0,0,0)", &options),
            Err(FormatDefect::UnexpectedFunction)
        );

        let strict = Options::builder().accept_short_hex(false).build();
        assert_eq!(parse_hex("#123", &strict), Err(FormatDefect::WrongDigitCount));
        assert_eq!(parse_hex("#112233", &strict)?, [0x11_u8, 0x22, 0x33]);

        Ok(())
    }

    #[test]
    fn test_parse_function() -> Result<(), FormatDefect> {
        assert_eq!(parse_function(Rgb, "rgb(1,2,3)")?, [1.0, 2.0, 3.0, 0.0]);
        assert_eq!(
            parse_function(Rgba, "rgba(1,2,3,0.25)")?,
            [1.0, 2.0, 3.0, 0.25]
        );
        assert_eq!(
            parse_function(Cmyk, "cmyk(0%,100%,100%,0%)")?,
            [0.0, 100.0, 100.0, 0.0]
        );
        assert_eq!(parse_function(Hsl, "hsl(360,0%,100%)")?, [360.0, 0.0, 100.0, 0.0]);
        assert_eq!(parse_function(Rgb, "rgb(007,0,0)")?, [7.0, 0.0, 0.0, 0.0]);

        let failures: [(ColorSpace, &str, FormatDefect); 16] = [
            (Rgb, "hsl(0,0%,0%)", FormatDefect::UnexpectedFunction),
            (Rgb, "rgba(0,0,0,1)", FormatDefect::UnexpectedFunction),
            (Rgb, "rgb0,0,0)", FormatDefect::NoOpeningParenthesis),
            (Rgb, "rgb(0,0,0", FormatDefect::NoClosingParenthesis),
            (Rgb, "rgb(0,0)", FormatDefect::MissingCoordinate),
            (Rgb, "rgb(0,,0)", FormatDefect::MissingCoordinate),
            (Rgb, "rgb(0,0,0,0)", FormatDefect::TooManyCoordinates),
            (Rgb, "rgb(-1,0,0)", FormatDefect::MalformedInteger),
            (Rgb, "rgb(1.5,0,0)", FormatDefect::MalformedInteger),
            (Rgb, "rgb(256,0,0)", FormatDefect::OutOfRange),
            (Rgb, "rgb(99999999999,0,0)", FormatDefect::OutOfRange),
            (Rgba, "rgba(0,0,0,1.5)", FormatDefect::OutOfRange),
            (Rgba, "rgba(0,0,0,1e0)", FormatDefect::MalformedFloat),
            (Hsl, "hsl(361,0%,0%)", FormatDefect::OutOfRange),
            (Hsl, "hsl(0,50,50%)", FormatDefect::MissingPercent),
            (Cmyk, "cmyk(0%,0%,0%,101%)", FormatDefect::OutOfRange),
        ];

        for (space, input, defect) in failures {
            assert_eq!(parse_function(space, input), Err(defect), "parsing {}", input);
        }

        Ok(())
    }

    #[test]
    fn test_parse() -> Result<(), ColorError> {
        let options = Options::default();
        assert_eq!(parse("FF0000", Hex, &options)?, Color::new(255, 0, 0));
        assert_eq!(parse(" #AbC ", Hex, &options)?, Color::new(0xaa, 0xbb, 0xcc));
        assert_eq!(parse("RGB( 0 , 255 , 0 )", Rgb, &options)?, Color::new(0, 255, 0));
        assert_eq!(parse("hsl(240,100%,50%)", Hsl, &options)?, Color::new(0, 0, 255));
        assert_eq!(parse("hsv(0,100%,100%)", Hsv, &options)?, Color::new(255, 0, 0));
        assert_eq!(
            parse("cmyk(0%,100%,100%,0%)", Cmyk, &options)?,
            Color::new(255, 0, 0)
        );

        let translucent = parse("rgba(255,0,0,0.5)", Rgba, &options)?;
        assert_eq!(translucent.as_ref(), &[255_u8, 0, 0]);
        assert_eq!(translucent.alpha(), 0.5 as Float);

        let error = parse("  rgb(256,0,0)", Rgb, &options).unwrap_err();
        assert_eq!(
            error.kind(),
            ColorErrorKind::InvalidFormat(Rgb, FormatDefect::OutOfRange)
        );
        assert_eq!(error.input(), "  rgb(256,0,0)");

        Ok(())
    }

    #[test]
    fn test_format() {
        let options = Options::default();
        let red = Color::new(255, 0, 0);
        assert_eq!(format(&red, Hex, &options), "#ff0000");
        assert_eq!(format(&red, Rgb, &options), "rgb(255,0,0)");
        assert_eq!(format(&red, Rgba, &options), "rgba(255,0,0,1)");
        assert_eq!(format(&red, Hsl, &options), "hsl(0,100%,50%)");
        assert_eq!(format(&red, Cmyk, &options), "cmyk(0%,100%,100%,0%)");
        assert_eq!(format(&red, Hsv, &options), "hsv(0,100%,100%)");

        let black = Color::new(0, 0, 0);
        assert_eq!(format(&black, Cmyk, &options), "cmyk(0%,0%,0%,100%)");
        assert_eq!(format(&black, Hsl, &options), "hsl(0,0%,0%)");

        let fancy = Options::builder()
            .hash_prefix(false)
            .uppercase_hex(true)
            .spaced_lists(true)
            .build();
        let teal = Color::new(0x00, 0x80, 0x80);
        assert_eq!(format(&teal, Hex, &fancy), "008080");
        assert_eq!(format(&teal, Rgb, &fancy), "rgb(0, 128, 128)");
        assert_eq!(format(&teal, Hsl, &fancy), "hsl(180, 100%, 25%)");
    }

    #[test]
    fn test_hex_round_trip() -> Result<(), ColorError> {
        let options = Options::default();
        for input in ["#000000", "#FFFFFF", "#0a1B2c", "d4fb79", "#aee8fb"] {
            let color = parse(input, Hex, &options)?;
            let expected = format!("#{}", input.trim_start_matches('#').to_ascii_lowercase());
            assert_eq!(format(&color, Hex, &options), expected);
        }

        let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
        for _ in 0..10_000 {
            let rgb: [u8; 3] = [rng.random(), rng.random(), rng.random()];
            let expected = format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2]);

            let mut input: String = expected
                .chars()
                .skip(1)
                .map(|c| if rng.random() { c.to_ascii_uppercase() } else { c })
                .collect();
            if rng.random() {
                input.insert(0, '#');
            }

            let color = parse(&input, Hex, &options)?;
            assert_eq!(color.as_ref(), &rgb);
            assert_eq!(format(&color, Hex, &options), expected);
        }

        Ok(())
    }
}
