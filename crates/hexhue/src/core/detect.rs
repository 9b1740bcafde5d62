use super::ColorSpace;
use crate::error::ColorError;

/// The kind of value in one argument position of a functional notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    /// An integer `0..=255`.
    Byte,
    /// An integer hue `0..=360` in degrees.
    Hue,
    /// An integer `0..=100` with `%` suffix.
    Percent,
    /// A decimal number `0..=1`.
    Alpha,
}

impl Slot {
    /// Get the largest valid integer. Alpha values have none.
    pub(crate) const fn max(&self) -> u32 {
        match *self {
            Slot::Byte => 255,
            Slot::Hue => 360,
            Slot::Percent => 100,
            Slot::Alpha => 1,
        }
    }

    /// Determine whether the text has the shape of this slot's value.
    fn is_shaped(&self, text: &str) -> bool {
        match *self {
            Slot::Byte | Slot::Hue => is_digits(text),
            Slot::Percent => text.strip_suffix('%').is_some_and(is_digits),
            Slot::Alpha => is_decimal(text),
        }
    }
}

/// Get the argument slots for the given functional notation.
pub(crate) const fn slots(space: ColorSpace) -> &'static [Slot] {
    use Slot::*;

    match space {
        ColorSpace::Rgb => &[Byte, Byte, Byte],
        ColorSpace::Rgba => &[Byte, Byte, Byte, Alpha],
        ColorSpace::Cmyk => &[Percent, Percent, Percent, Percent],
        _ if space.has_hue() => &[Hue, Percent, Percent],
        _ => &[],
    }
}

/// Determine whether the text is a non-empty run of ASCII digits.
pub(crate) fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Determine whether the text is a decimal number with at least one digit
/// and at most one decimal point.
pub(crate) fn is_decimal(text: &str) -> bool {
    let mut digits = 0;
    let mut points = 0;
    for b in text.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => points += 1,
            _ => return false,
        }
    }
    0 < digits && points <= 1
}

/// Normalize a color string before detection or parsing.
///
/// This function trims leading and trailing white space and converts ASCII
/// letters to lower case. If the result looks like a functional notation,
/// i.e., contains a parenthesis or comma, it also removes all remaining
/// white space.
pub(crate) fn normalize(s: &str) -> String {
    let lowercase = s.trim().to_ascii_lowercase();
    if lowercase.contains(['(', ')', ',']) {
        lowercase.chars().filter(|c| !c.is_whitespace()).collect()
    } else {
        lowercase
    }
}

/// Split a normalized functional notation into function name and the text
/// between the parentheses.
pub(crate) fn split_function(s: &str) -> Option<(&str, &str)> {
    let (name, rest) = s.split_once('(')?;
    let body = rest.strip_suffix(')')?;
    Some((name, body))
}

/// Determine whether the normalized string has the hexadecimal shape.
fn is_hex_shaped(s: &str) -> bool {
    let digits = s.strip_prefix('#').unwrap_or(s);
    (digits.len() == 3 || digits.len() == 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Determine whether the normalized string has the shape of the given
/// functional notation.
fn is_function_shaped(space: ColorSpace, s: &str) -> bool {
    let Some((name, body)) = split_function(s) else {
        return false;
    };
    if Some(name) != space.function() {
        return false;
    }

    let slots = slots(space);
    let mut values = body.split(',');
    for slot in slots {
        match values.next() {
            Some(text) if slot.is_shaped(text) => (),
            _ => return false,
        }
    }
    values.next().is_none()
}

/// Determine whether the normalized string has the shape of the given
/// notation.
pub(crate) fn is_shaped(space: ColorSpace, s: &str) -> bool {
    if space.is_functional() {
        is_function_shaped(space, s)
    } else {
        is_hex_shaped(s)
    }
}

/// Detect the notation of the given color string.
///
/// This function tries the notations in [`ColorSpace::ALL`] order and
/// returns the first one whose shape matches. If none matches, it fails
/// with an unrecognized format error carrying the original string.
pub(crate) fn detect(s: &str) -> Result<ColorSpace, ColorError> {
    let normalized = normalize(s);
    match ColorSpace::ALL
        .into_iter()
        .find(|space| is_shaped(*space, &normalized))
    {
        Some(space) => Ok(space),
        None => {
            log::debug!("no color format matches {:?}", s);
            Err(ColorError::unrecognized(s))
        }
    }
}

// ====================================================================================================================
