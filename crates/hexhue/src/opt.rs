//! Helper module with the options for parsing and formatting color strings.
//!
//! Every option is a boolean with a fixed default. The defaults produce the
//! canonical, space-free notations, e.g., `#ff0000`, `rgb(255,0,0)`, or
//! `hsl(0,100%,50%)`.
//!
//!
//! # Example
//!
//! ```
//! # use hexhue::opt::Options;
//! let options = Options::builder()
//!     .uppercase_hex(true)
//!     .spaced_lists(true)
//!     .build();
//!
//! assert!(options.uppercase_hex());
//! assert!(options.hash_prefix());
//! ```

#[derive(Clone, Debug, PartialEq, Eq)]
struct OptionData {
    accept_short_hex: bool,
    hash_prefix: bool,
    uppercase_hex: bool,
    spaced_lists: bool,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            accept_short_hex: true,
            hash_prefix: true,
            uppercase_hex: false,
            spaced_lists: false,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Accept three-digit hexadecimal colors such as `#abc`.
    ///
    /// When enabled, the default, the parser expands each digit to a pair,
    /// i.e., `abc` becomes `aabbcc`. When disabled, three-digit colors fail
    /// with [`FormatDefect::WrongDigitCount`](crate::error::FormatDefect).
    pub fn accept_short_hex(&mut self, accept: bool) -> &mut Self {
        self.0.accept_short_hex = accept;
        self
    }

    /// Start formatted hexadecimal colors with a `#`. Enabled by default.
    pub fn hash_prefix(&mut self, prefix: bool) -> &mut Self {
        self.0.hash_prefix = prefix;
        self
    }

    /// Format hexadecimal colors with upper case digits. Disabled by default.
    pub fn uppercase_hex(&mut self, uppercase: bool) -> &mut Self {
        self.0.uppercase_hex = uppercase;
        self
    }

    /// Separate the values of functional notations with a comma followed by
    /// a space, e.g., `rgb(255, 0, 0)`. Disabled by default.
    pub fn spaced_lists(&mut self, spaced: bool) -> &mut Self {
        self.0.spaced_lists = spaced;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Determine whether three-digit hexadecimal colors are accepted.
    pub fn accept_short_hex(&self) -> bool {
        self.0.accept_short_hex
    }

    /// Determine whether formatted hexadecimal colors start with `#`.
    pub fn hash_prefix(&self) -> bool {
        self.0.hash_prefix
    }

    /// Determine whether formatted hexadecimal colors use upper case digits.
    pub fn uppercase_hex(&self) -> bool {
        self.0.uppercase_hex
    }

    /// Determine whether functional notations separate values with `", "`.
    pub fn spaced_lists(&self) -> bool {
        self.0.spaced_lists
    }

    /// Get the separator for values of functional notations.
    pub(crate) fn separator(&self) -> &'static str {
        if self.0.spaced_lists {
            ", "
        } else {
            ","
        }
    }
}
