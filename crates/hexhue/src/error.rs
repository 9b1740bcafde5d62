//! Utility module with hexhue's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::ColorSpace;

/// The reason a color string of known notation is invalid.
///
/// Each variant names one way a string may match the overall shape of a
/// notation yet still fail to describe a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatDefect {
    /// A hexadecimal color with characters other than hexadecimal digits.
    /// For example, `#💩0000` or `#00ff0g`.
    UnexpectedCharacters,

    /// A hexadecimal color with a number of digits other than six, or three
    /// when short hexadecimal colors are accepted. For example, `#ff`.
    WrongDigitCount,

    /// A functional notation for another color format. For example,
    /// `hsl(0,0%,0%)` parsed as `rgb`.
    UnexpectedFunction,

    /// A functional notation without the opening parenthesis. For example,
    /// `rgb 0,0,0)`.
    NoOpeningParenthesis,

    /// A functional notation without the closing parenthesis. For example,
    /// `rgb(0,0,0`.
    NoClosingParenthesis,

    /// A functional notation that is missing a value. For example,
    /// `rgb(0,0)` or `rgb(0,,0)`.
    MissingCoordinate,

    /// A functional notation with too many values. For example,
    /// `rgb(0,0,0,0)`.
    TooManyCoordinates,

    /// A value that should be a non-negative integer but is not. For
    /// example, `rgb(-1,0,0)` or `rgb(1.5,0,0)`.
    MalformedInteger,

    /// An alpha value that should be a non-negative decimal number but is
    /// not. For example, `rgba(0,0,0,1e0)`.
    MalformedFloat,

    /// A percentage without the `%` suffix. For example, `hsl(0,50,50%)`.
    MissingPercent,

    /// A value outside its range. For example, `rgb(256,0,0)`.
    OutOfRange,
}

impl FormatDefect {
    fn description(&self) -> &'static str {
        use FormatDefect::*;

        match *self {
            UnexpectedCharacters => "should contain only hexadecimal digits",
            WrongDigitCount => "should have 6 hexadecimal digits",
            UnexpectedFunction => "uses the function of another color format",
            NoOpeningParenthesis => "should include an opening parenthesis but has none",
            NoClosingParenthesis => "should include a closing parenthesis but has none",
            MissingCoordinate => "is missing a value",
            TooManyCoordinates => "has too many values",
            MalformedInteger => "should have integer values but does not",
            MalformedFloat => "should have a decimal alpha value but does not",
            MissingPercent => "should have percentages with `%` but does not",
            OutOfRange => "has a value out of range",
        }
    }
}

impl std::fmt::Display for FormatDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

// ====================================================================================================================

/// The kinds of errors while converting color strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorErrorKind {
    /// A string that matches none of the supported notations.
    UnrecognizedFormat,
    /// A string that matches a notation's shape but does not describe a
    /// valid color in that notation.
    InvalidFormat(ColorSpace, FormatDefect),
    /// A target format that is not one of the supported notations.
    UnsupportedTargetFormat,
}

/// An error while detecting, parsing, or converting a color string.
///
/// Every error carries the offending string, so that user interfaces can
/// display it next to the error message. Errors are deterministic: The same
/// input always fails the same way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorError {
    kind: ColorErrorKind,
    input: String,
}

impl ColorError {
    /// Create a new color error.
    pub fn new(kind: ColorErrorKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }

    /// Create a new error for an unrecognized color string.
    pub fn unrecognized(input: impl Into<String>) -> Self {
        Self::new(ColorErrorKind::UnrecognizedFormat, input)
    }

    /// Create a new error for an invalid color string.
    pub fn invalid(space: ColorSpace, defect: FormatDefect, input: impl Into<String>) -> Self {
        Self::new(ColorErrorKind::InvalidFormat(space, defect), input)
    }

    /// Create a new error for an unsupported target format name.
    pub fn unsupported(input: impl Into<String>) -> Self {
        Self::new(ColorErrorKind::UnsupportedTargetFormat, input)
    }

    /// Get the kind of error.
    pub fn kind(&self) -> ColorErrorKind {
        self.kind
    }

    /// Get the offending string, exactly as provided by the caller.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Get the defect of an invalid color string.
    pub fn defect(&self) -> Option<FormatDefect> {
        match self.kind {
            ColorErrorKind::InvalidFormat(_, defect) => Some(defect),
            _ => None,
        }
    }
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ColorErrorKind::UnrecognizedFormat => {
                write!(f, "`{}` is not a recognized color format", self.input)
            }
            ColorErrorKind::InvalidFormat(space, defect) => {
                write!(f, "{} color `{}` {}", space, self.input, defect)
            }
            ColorErrorKind::UnsupportedTargetFormat => {
                write!(f, "`{}` is not a supported target format", self.input)
            }
        }
    }
}

impl std::error::Error for ColorError {}

#[cfg(feature = "pyffi")]
impl From<ColorError> for PyErr {
    fn from(value: ColorError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
