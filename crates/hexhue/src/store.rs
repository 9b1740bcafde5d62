//! Persistence of the last conversion in a key-value store.
//!
//! The conversion pipeline itself is stateless. Applications that want to
//! restore the last conversion across sessions save a [`Snapshot`] in some
//! [`Store`], e.g., browser-like local storage or a settings file, and load
//! it again on startup. All keys share the [`KEY_PREFIX`].
//!
//! ```
//! # use hexhue::{ColorSpace, Converter};
//! # use hexhue::store::{MemoryStore, Snapshot};
//! let mut store = MemoryStore::new();
//! Snapshot::new("#ff8000", None, ColorSpace::Hsv).save(&mut store)?;
//!
//! let snapshot = Snapshot::load(&store).expect("snapshot was just saved");
//! assert_eq!(snapshot.replay(&Converter::default())?, "hsv(30,100%,100%)");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::error::ColorError;
use crate::{ColorSpace, Converter};
use std::collections::HashMap;
use std::io;

/// The prefix shared by all keys.
pub const KEY_PREFIX: &str = "color-converter.";

const INPUT: &str = "color-converter.input";
const INPUT_FORMAT: &str = "color-converter.input_format";
const OUTPUT_FORMAT: &str = "color-converter.output_format";

/// The stored name for detecting the input format.
const AUTO: &str = "auto";

/// A trait to abstract over key-value stores.
///
/// Implementations only need to provide string-valued access. Reads treat
/// an unavailable value like a missing one, whereas writes report failures,
/// e.g., of a file-backed store, as I/O errors.
pub trait Store {
    /// Read the value for the key.
    fn get(&self, key: &str) -> Option<String>;

    /// Write the value for the key.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;

    /// Remove the key and its value. Removing a missing key succeeds.
    fn remove(&mut self, key: &str) -> io::Result<()>;

    /// Determine whether the store has a value for the key.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// An in-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determine whether this store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// ====================================================================================================================

/// A snapshot of a conversion's inputs.
///
/// A missing input format means the format is detected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    input: String,
    input_format: Option<ColorSpace>,
    output_format: ColorSpace,
}

impl Snapshot {
    /// Create a new snapshot.
    pub fn new(
        input: impl Into<String>,
        input_format: Option<ColorSpace>,
        output_format: ColorSpace,
    ) -> Self {
        Self {
            input: input.into(),
            input_format,
            output_format,
        }
    }

    /// Get the color string.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Get the input format, if any.
    pub fn input_format(&self) -> Option<ColorSpace> {
        self.input_format
    }

    /// Get the output format.
    pub fn output_format(&self) -> ColorSpace {
        self.output_format
    }

    /// Save this snapshot, replacing any previous one.
    ///
    /// If the store fails to write a key, this method stops and returns the
    /// error. The store may then hold a partial snapshot, which
    /// [`Snapshot::load`] only returns if all keys are present.
    pub fn save(&self, store: &mut impl Store) -> io::Result<()> {
        store.set(INPUT, &self.input)?;
        store.set(INPUT_FORMAT, self.input_format.map_or(AUTO, |s| s.name()))?;
        store.set(OUTPUT_FORMAT, self.output_format.name())
    }

    /// Load the snapshot.
    ///
    /// This method returns `None` if any key is missing or if a stored
    /// format name is malformed. The latter is logged as a warning.
    pub fn load(store: &impl Store) -> Option<Self> {
        let input = store.get(INPUT)?;

        let input_format = match store.get(INPUT_FORMAT)?.as_str() {
            AUTO => None,
            name => Some(Self::parse_format(INPUT_FORMAT, name)?),
        };
        let output_format = Self::parse_format(OUTPUT_FORMAT, &store.get(OUTPUT_FORMAT)?)?;

        Some(Self {
            input,
            input_format,
            output_format,
        })
    }

    fn parse_format(key: &str, name: &str) -> Option<ColorSpace> {
        match name.parse() {
            Ok(space) => Some(space),
            Err(_) => {
                log::warn!("ignoring malformed format {:?} stored under {}", name, key);
                None
            }
        }
    }

    /// Remove the snapshot.
    pub fn clear(store: &mut impl Store) -> io::Result<()> {
        store.remove(INPUT)?;
        store.remove(INPUT_FORMAT)?;
        store.remove(OUTPUT_FORMAT)
    }

    /// Repeat the snapshot's conversion with the given converter.
    pub fn replay(&self, converter: &Converter) -> Result<String, ColorError> {
        converter.convert(&self.input, self.input_format, self.output_format)
    }
}

#[cfg(test)]
mod test {
    use super::{MemoryStore, Snapshot, Store, INPUT, INPUT_FORMAT, KEY_PREFIX, OUTPUT_FORMAT};
    use crate::error::{ColorError, ColorErrorKind};
    use crate::{ColorSpace, Converter};
    use std::io;

    /// A store that fails writes to one key.
    struct FailingStore {
        inner: MemoryStore,
        failing_key: &'static str,
    }

    impl Store for FailingStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
            if key == self.failing_key {
                Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only key"))
            } else {
                self.inner.set(key, value)
            }
        }

        fn remove(&mut self, key: &str) -> io::Result<()> {
            if key == self.failing_key {
                Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only key"))
            } else {
                self.inner.remove(key)
            }
        }
    }

    #[test]
    fn test_memory_store() -> io::Result<()> {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        store.set("key", "value")?;
        assert_eq!(store.get("key").as_deref(), Some("value"));
        assert!(store.contains("key"));
        store.set("key", "other")?;
        assert_eq!(store.len(), 1);
        store.remove("key")?;
        assert_eq!(store.get("key"), None);
        store.remove("key")?;
        Ok(())
    }

    #[test]
    fn test_save_load() -> io::Result<()> {
        let mut store = MemoryStore::new();
        assert_eq!(Snapshot::load(&store), None);

        let snapshot = Snapshot::new("rgb(0,255,0)", Some(ColorSpace::Rgb), ColorSpace::Cmyk);
        snapshot.save(&mut store)?;
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(INPUT_FORMAT).as_deref(), Some("rgb"));
        assert_eq!(Snapshot::load(&store), Some(snapshot));

        let snapshot = Snapshot::new("#fff", None, ColorSpace::Hex);
        snapshot.save(&mut store)?;
        assert_eq!(store.get(INPUT_FORMAT).as_deref(), Some("auto"));
        assert_eq!(Snapshot::load(&store), Some(snapshot));

        Snapshot::clear(&mut store)?;
        assert!(store.is_empty());
        assert_eq!(Snapshot::load(&store), None);
        Ok(())
    }

    #[test]
    fn test_write_failures() {
        let mut store = FailingStore {
            inner: MemoryStore::new(),
            failing_key: OUTPUT_FORMAT,
        };

        let error = Snapshot::new("#fff", None, ColorSpace::Hex)
            .save(&mut store)
            .unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::PermissionDenied);

        // The partial snapshot is not loaded.
        assert!(store.contains(INPUT));
        assert_eq!(Snapshot::load(&store), None);

        let error = Snapshot::clear(&mut store).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::PermissionDenied);
        assert!(!store.contains(INPUT));
    }

    #[test]
    fn test_malformed() -> io::Result<()> {
        let mut store = MemoryStore::new();
        Snapshot::new("#fff", None, ColorSpace::Hex).save(&mut store)?;

        store.set(OUTPUT_FORMAT, "lab")?;
        assert_eq!(Snapshot::load(&store), None);

        store.set(OUTPUT_FORMAT, "HSL")?;
        let snapshot = Snapshot::load(&store);
        assert_eq!(
            snapshot.map(|s| s.output_format()),
            Some(ColorSpace::Hsl)
        );

        store.remove(INPUT_FORMAT)?;
        assert_eq!(Snapshot::load(&store), None);
        assert!(OUTPUT_FORMAT.starts_with(KEY_PREFIX));
        Ok(())
    }

    #[test]
    fn test_replay() -> Result<(), ColorError> {
        let converter = Converter::default();
        let snapshot = Snapshot::new("hsl(240,100%,50%)", None, ColorSpace::Hex);
        assert_eq!(snapshot.replay(&converter)?, "#0000ff");

        let snapshot = Snapshot::new("rgb(256,0,0)", Some(ColorSpace::Rgb), ColorSpace::Hex);
        let error = snapshot.replay(&converter).unwrap_err();
        assert!(matches!(error.kind(), ColorErrorKind::InvalidFormat(..)));
        Ok(())
    }
}
