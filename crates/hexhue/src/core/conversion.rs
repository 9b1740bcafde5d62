use crate::Float;

/// Convert the given 24-bit RGB coordinates to unit-range coordinates.
#[inline]
pub(crate) fn from_24bit(rgb: &[u8; 3]) -> [Float; 3] {
    let [r, g, b] = *rgb;
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert a unit-range coordinate to a byte.
///
/// Coordinates are non-negative, so rounding half away from zero is the
/// same as rounding half up. The result is clamped to `0..=255`.
#[inline]
fn to_byte(value: Float) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert unit-range coordinates to 24-bit RGB coordinates.
#[inline]
pub(crate) fn to_24bit(value: &[Float; 3]) -> [u8; 3] {
    [to_byte(value[0]), to_byte(value[1]), to_byte(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the hue in unit range `0..1` from unit-range RGB coordinates,
/// their maximum, and the difference between maximum and minimum.
///
/// If the maximum is shared by several channels, red takes precedence over
/// green, which takes precedence over blue.
fn hue(r: Float, g: Float, b: Float, max: Float, delta: Float) -> Float {
    if delta == 0.0 {
        return 0.0;
    }

    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    sector / 6.0
}

/// Convert 24-bit RGB to HSL.
///
/// The result has the hue in degrees `0..360` and saturation as well as
/// lightness in percent `0..=100`. It is not rounded.
pub(crate) fn rgb_to_hsl(rgb: &[u8; 3]) -> [Float; 3] {
    let [r, g, b] = from_24bit(rgb);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let lightness = (max + min) / 2.0;

    let saturation = if delta == 0.0 {
        0.0
    } else if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    [
        hue(r, g, b, max, delta) * 360.0,
        saturation * 100.0,
        lightness * 100.0,
    ]
}

/// Evaluate one channel of HSL to RGB conversion.
///
/// `t` is the hue in unit range shifted by a third for red and blue. It may
/// fall outside `0..=1` by at most one and is wrapped first.
fn hue_to_channel(p: Float, q: Float, mut t: Float) -> Float {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Convert HSL to 24-bit RGB.
///
/// The hue is in degrees `0..=360`, saturation and lightness in percent
/// `0..=100`.
pub(crate) fn hsl_to_rgb(hsl: &[Float; 3]) -> [u8; 3] {
    let h = hsl[0] / 360.0;
    let s = hsl[1] / 100.0;
    let l = hsl[2] / 100.0;

    if s == 0.0 {
        return to_24bit(&[l, l, l]);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    to_24bit(&[
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ])
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert 24-bit RGB to HSV.
///
/// The result has the hue in degrees `0..360` and saturation as well as
/// value in percent `0..=100`. It is not rounded.
pub(crate) fn rgb_to_hsv(rgb: &[u8; 3]) -> [Float; 3] {
    let [r, g, b] = from_24bit(rgb);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    [
        hue(r, g, b, max, delta) * 360.0,
        saturation * 100.0,
        max * 100.0,
    ]
}

/// Convert HSV to 24-bit RGB.
///
/// The hue is in degrees `0..=360`, saturation and value in percent
/// `0..=100`. A hue of 360 lands in sector 6, which is the same as sector 0.
pub(crate) fn hsv_to_rgb(hsv: &[Float; 3]) -> [u8; 3] {
    let h = hsv[0] / 360.0;
    let s = hsv[1] / 100.0;
    let v = hsv[2] / 100.0;

    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let rgb = match (sector as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    };

    to_24bit(&rgb)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert 24-bit RGB to CMYK.
///
/// The result has all four components in percent `0..=100`. It is not
/// rounded. For black, cyan, magenta, and yellow are zero.
pub(crate) fn rgb_to_cmyk(rgb: &[u8; 3]) -> [Float; 4] {
    let [r, g, b] = from_24bit(rgb);
    let max = r.max(g).max(b);
    let k = 1.0 - max;

    if max == 0.0 {
        return [0.0, 0.0, 0.0, 100.0];
    }

    // (1 - c - k) / (1 - k) simplifies to (max - c) / max.
    [
        (max - r) / max * 100.0,
        (max - g) / max * 100.0,
        (max - b) / max * 100.0,
        k * 100.0,
    ]
}

/// Convert CMYK to 24-bit RGB.
///
/// All four components are in percent `0..=100`.
pub(crate) fn cmyk_to_rgb(cmyk: &[Float; 4]) -> [u8; 3] {
    let [c, m, y, k] = *cmyk;
    let [c, m, y, k] = [c / 100.0, m / 100.0, y / 100.0, k / 100.0];

    to_24bit(&[
        (1.0 - c) * (1.0 - k),
        (1.0 - m) * (1.0 - k),
        (1.0 - y) * (1.0 - k),
    ])
}

// ====================================================================================================================
