mod conversion;
mod detect;
mod equality;
mod space;
mod string;

// conversion
pub(crate) use conversion::{
    cmyk_to_rgb, hsl_to_rgb, hsv_to_rgb, rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv,
};

// detect
pub(crate) use detect::detect;

// equality
#[cfg(test)]
pub(crate) use equality::assert_within_one;
pub(crate) use equality::within;

// space
pub use space::ColorSpace;

// string
pub(crate) use string::{format, parse};
