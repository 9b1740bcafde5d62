/// Determine whether two 24-bit colors differ by at most the given tolerance
/// in each channel.
#[inline]
pub(crate) fn within(rgb1: &[u8; 3], rgb2: &[u8; 3], tolerance: u8) -> bool {
    rgb1.iter()
        .zip(rgb2.iter())
        .all(|(c1, c2)| c1.abs_diff(*c2) <= tolerance)
}

/// Test macro for asserting that two 24-bit colors differ by at most one in
/// each channel.
///
/// # Panics
///
/// This macro panics if any channel differs by more than one. Its message
/// places the coordinates below each other at the beginning of subsequent
/// lines for easy comparability.
#[cfg(test)]
macro_rules! assert_within_one {
    ($rgb1:expr, $rgb2:expr $(,)?) => {
        let (rgb1, rgb2): ([u8; 3], [u8; 3]) = ($rgb1, $rgb2);
        assert!(
            $crate::core::within(&rgb1, &rgb2, 1),
            "color coordinates differ by more than one:\n{:?}\n{:?}",
            rgb1,
            rgb2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_within_one;
