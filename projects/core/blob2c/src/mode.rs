//! Registry of the supported output styles.

use core::fmt;
use core::str::FromStr;
use thiserror::Error;

/// Selects which emitter renders the blob.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputMode {
    /// A single header holding the array and its size as `static const` values.
    #[default]
    SingleHeader,
    /// Header with `extern` declarations, source with the definitions.
    ExternPair,
    /// Header with accessor function prototypes, source with the storage and bodies.
    AccessorFunctions,
    /// Header with a `{bytes, size}` record type and an `extern` instance of it.
    StructExtern,
    /// Header with the record type and a function returning a pointer to the instance.
    StructAccessor,
}

/// Every registered mode alongside its command line name, in presentation order.
const MODES: [(OutputMode, &str); 5] = [
    (OutputMode::SingleHeader, "c_header"),
    (OutputMode::ExternPair, "c_extern"),
    (OutputMode::AccessorFunctions, "c_funcs"),
    (OutputMode::StructExtern, "c_struct_extern"),
    (OutputMode::StructAccessor, "c_struct_func"),
];

impl OutputMode {
    /// Looks up a mode by its command line name.
    ///
    /// # Returns
    ///
    /// `None` if no registered mode has that name. Matching is exact (case sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        MODES
            .iter()
            .find(|(_, mode_name)| *mode_name == name)
            .map(|(mode, _)| *mode)
    }

    /// Returns `true` if this mode has an entry in the registry.
    ///
    /// Every variant is registered; a `false` here indicates the table and the enum
    /// have drifted apart.
    pub fn is_registered(self) -> bool {
        MODES.iter().any(|(mode, _)| *mode == self)
    }

    /// The command line name of this mode.
    pub fn name(self) -> &'static str {
        MODES
            .iter()
            .find(|(mode, _)| *mode == self)
            .map_or("", |(_, name)| *name)
    }

    /// All registered modes, in presentation order.
    pub fn all() -> impl Iterator<Item = OutputMode> {
        MODES.iter().map(|(mode, _)| *mode)
    }

    /// Names of all registered modes, in presentation order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        MODES.iter().map(|(_, name)| *name)
    }

    /// Whether this mode writes a definition (`.c`) artifact next to the header.
    pub fn has_definition(self) -> bool {
        self != Self::SingleHeader
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raised when a mode name does not match any registered mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("undefined mode: {name}")]
pub struct UnknownModeError {
    pub name: String,
}

impl FromStr for OutputMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownModeError { name: s.to_owned() })
    }
}
